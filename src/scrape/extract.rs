use crate::error::{Result, ScrapeError};
use crate::product::Product;
use crate::scrape::selectors;
use headless_chrome::Element;

/// The view of one product fragment the extractor needs.
///
/// This is the only seam between field extraction and the live page, so the
/// parsing rules can be exercised against synthetic fragments. A missing
/// sub-element or unreadable value is reported as `None`; the extractor turns
/// that into a [`ScrapeError::MalformedField`] naming the field.
pub trait Fragment {
    /// Value of attribute `name` on the first sub-element matching `selector`.
    fn attribute(&self, selector: &str, name: &str) -> Option<String>;

    /// Visible text of the first sub-element matching `selector`.
    fn text(&self, selector: &str) -> Option<String>;

    /// Number of sub-elements matching `selector`.
    fn count(&self, selector: &str) -> usize;
}

/// Live [`Fragment`] backed by a browser element.
pub struct DomFragment<'a> {
    element: Element<'a>,
}

impl<'a> DomFragment<'a> {
    pub fn new(element: Element<'a>) -> Self {
        Self { element }
    }
}

impl Fragment for DomFragment<'_> {
    fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        self.element
            .find_element(selector)
            .ok()?
            .get_attribute_value(name)
            .ok()
            .flatten()
    }

    fn text(&self, selector: &str) -> Option<String> {
        self.element
            .find_element(selector)
            .ok()?
            .get_inner_text()
            .ok()
    }

    fn count(&self, selector: &str) -> usize {
        self.element
            .find_elements(selector)
            .map(|elements| elements.len())
            .unwrap_or(0)
    }
}

/// Extract one [`Product`] from a fragment.
///
/// `position` is the fragment's zero-based index in document order and is
/// carried into any [`ScrapeError::MalformedField`] so a bad product can be
/// attributed to its place on the page. The first malformed field aborts the
/// fragment; the orchestrator in turn aborts the page rather than silently
/// dropping data.
pub fn extract<F: Fragment>(fragment: &F, position: usize) -> Result<Product> {
    // The visible title may be elided with an ellipsis; the title attribute
    // carries the full text.
    let title = fragment
        .attribute(selectors::TITLE, "title")
        .ok_or_else(|| malformed("title", position, MISSING))?;

    let description = fragment
        .text(selectors::DESCRIPTION)
        .ok_or_else(|| malformed("description", position, MISSING))?
        .trim()
        .to_string();

    let price_text = fragment
        .text(selectors::PRICE)
        .ok_or_else(|| malformed("price", position, MISSING))?;
    let price_text = price_text.trim();
    let price: f64 = price_text
        .strip_prefix('$')
        .unwrap_or(price_text)
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| malformed("price", position, price_text))?;

    // Structural count of rendered star icons, not a parsed number. More
    // than five stars means the fragment is not the rating widget we expect.
    let stars = fragment.count(selectors::RATING_STAR);
    if stars > 5 {
        return Err(malformed("rating", position, &format!("{stars} star icons")));
    }
    let rating = stars as u8;

    let review_text = fragment
        .text(selectors::REVIEW_COUNT)
        .ok_or_else(|| malformed("num_of_reviews", position, MISSING))?;
    let num_of_reviews: u32 = review_text
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| malformed("num_of_reviews", position, review_text.trim()))?;

    Ok(Product {
        title,
        description,
        price,
        rating,
        num_of_reviews,
    })
}

const MISSING: &str = "(element missing)";

fn malformed(field: &'static str, position: usize, value: &str) -> ScrapeError {
    ScrapeError::MalformedField {
        field,
        position,
        value: value.to_string(),
    }
}
