use crate::browser::Session;
use crate::catalog::PageDescriptor;
use crate::error::{Result, ScrapeError};
use crate::product::Product;
use crate::scrape::extract::{DomFragment, extract};
use crate::scrape::{consent, pagination, selectors};

/// Scrape one catalog page end to end.
///
/// Sequence: navigate, dismiss consent, paginate to exhaustion, then extract
/// every product fragment in document order. Document order equals click
/// order, so earlier-loaded products come first in the returned Vec. Nothing
/// is extracted until pagination has finished, so each fragment is read
/// exactly once.
pub fn scrape_page(session: &Session, page: &PageDescriptor) -> Result<Vec<Product>> {
    let url = page.url();
    log::info!("scraping page '{}' at {url}", page.name);

    session.goto(&url)?;

    let tab = session.tab();
    consent::dismiss_consent_if_present(tab)?;

    let outcome = pagination::load_all_products(tab)?;

    let fragments = tab
        .find_elements(selectors::PRODUCT_FRAGMENT)
        .map_err(|e| ScrapeError::Session(format!("failed to collect product fragments: {e}")))?;

    log::info!(
        "page '{}': {} product fragments after {} load-more clicks",
        page.name,
        fragments.len(),
        outcome.clicks
    );

    let mut products = Vec::with_capacity(fragments.len());
    for (position, element) in fragments.into_iter().enumerate() {
        products.push(extract(&DomFragment::new(element), position)?);
    }

    Ok(products)
}
