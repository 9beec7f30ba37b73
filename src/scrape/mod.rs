//! Page traversal and product extraction.
//!
//! This module holds the scrape logic for one catalog page:
//! - [`waiter`]: bounded polling for an element, yielding [`Lookup`] instead
//!   of an error when nothing shows up
//! - [`consent`]: one-shot, best-effort dismissal of the cookie banner
//! - [`pagination`]: clicking the load-more control until the page is
//!   exhausted
//! - [`extract`]: turning one product fragment into a typed [`crate::Product`]
//! - [`page`]: sequencing the above for one page

pub mod consent;
pub mod extract;
pub mod page;
pub mod pagination;
pub mod waiter;

pub use consent::dismiss_consent_if_present;
pub use extract::{DomFragment, Fragment, extract};
pub use page::scrape_page;
pub use pagination::{PaginationOutcome, load_all_products};
pub use waiter::{Condition, Lookup, wait_for};

/// CSS selectors for the webscraper.io e-commerce demo pages.
pub mod selectors {
    /// One self-contained product listing card.
    pub const PRODUCT_FRAGMENT: &str = ".thumbnail";

    /// Accept button of the cookie-consent banner.
    pub const CONSENT_ACCEPT: &str = ".acceptCookies";

    /// The load-more control appending further products to the page.
    pub const LOAD_MORE: &str = ".ecomerce-items-scroll-more";

    /// Product title link; the full title lives in its `title` attribute.
    pub const TITLE: &str = ".title";

    /// Product description block.
    pub const DESCRIPTION: &str = ".description";

    /// Price text, prefixed with a currency symbol.
    pub const PRICE: &str = ".price";

    /// One rendered star of the product's rating.
    pub const RATING_STAR: &str = ".ratings .ws-icon-star";

    /// Review-count text, e.g. "14 reviews".
    pub const REVIEW_COUNT: &str = ".ratings .review-count";
}
