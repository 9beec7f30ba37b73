use serde::Serialize;

/// One product listing extracted from the catalog.
///
/// Field order matches the CSV column order
/// (`title, description, price, rating, num_of_reviews`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Full product title, taken from the `title` attribute rather than the
    /// (possibly elided) visible text.
    pub title: String,

    /// Trimmed description text.
    pub description: String,

    /// Price in the site's display currency, currency symbol stripped.
    pub price: f64,

    /// Star rating, counted from the rendered star icons (0-5).
    pub rating: u8,

    /// Review count, parsed from the leading number of the review text.
    pub num_of_reviews: u32,
}
