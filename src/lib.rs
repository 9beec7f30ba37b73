//! # ecom-scraper
//!
//! Scrapes the fixed set of category pages of the
//! [webscraper.io e-commerce demo site](https://webscraper.io/test-sites/e-commerce/more/)
//! with a headless Chrome session and writes one CSV file per page.
//!
//! Each page is processed strictly sequentially through one browser session:
//! navigate, dismiss the cookie-consent banner if present, click the
//! load-more control until the page stops offering one, then extract every
//! product card (title, description, price, rating, review count) in
//! document order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ecom_scraper::{Session, SessionOptions, catalog};
//!
//! # fn main() -> ecom_scraper::Result<()> {
//! let session = Session::launch(SessionOptions::new().headless(true))?;
//! let summary = catalog::run(&session, std::path::Path::new("."));
//! println!(
//!     "{} pages written, {} products",
//!     summary.pages_written, summary.products_written
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module overview
//!
//! - [`browser`]: session launch, navigation, and teardown
//! - [`scrape`]: per-page traversal and product extraction
//! - [`catalog`]: the fixed page table and the run loop
//! - [`output`]: CSV writing
//! - [`error`]: error types and result alias

pub mod browser;
pub mod catalog;
pub mod error;
pub mod output;
pub mod product;
pub mod scrape;

pub use browser::{Session, SessionOptions};
pub use catalog::{PAGES, PageDescriptor, RunSummary};
pub use error::{Result, ScrapeError};
pub use product::Product;
