//! The fixed set of catalog pages and the run loop over them.

use crate::browser::Session;
use crate::error::Result;
use crate::output;
use crate::product::Product;
use crate::scrape::scrape_page;
use std::path::Path;

/// Origin all page paths are joined onto.
pub const BASE_URL: &str = "https://webscraper.io/";

/// One catalog page: a short name (also the output file stem) and the URL
/// path under [`BASE_URL`]. Static configuration, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub name: &'static str,
    pub path: &'static str,
}

impl PageDescriptor {
    /// Absolute URL of this page.
    pub fn url(&self) -> String {
        format!("{BASE_URL}{}", self.path)
    }

    /// Name of the CSV file this page's products are written to.
    pub fn output_file(&self) -> String {
        format!("{}.csv", self.name)
    }
}

/// The six catalog pages, in traversal order.
pub const PAGES: [PageDescriptor; 6] = [
    PageDescriptor {
        name: "home",
        path: "test-sites/e-commerce/more/",
    },
    PageDescriptor {
        name: "computers",
        path: "test-sites/e-commerce/more/computers",
    },
    PageDescriptor {
        name: "laptops",
        path: "test-sites/e-commerce/more/computers/laptops",
    },
    PageDescriptor {
        name: "tablets",
        path: "test-sites/e-commerce/more/computers/tablets",
    },
    PageDescriptor {
        name: "phones",
        path: "test-sites/e-commerce/more/phones",
    },
    PageDescriptor {
        name: "touch",
        path: "test-sites/e-commerce/more/phones/touch",
    },
];

/// Tally of a full catalog run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages scraped and written successfully.
    pub pages_written: usize,

    /// Pages that failed to scrape or write.
    pub pages_failed: usize,

    /// Total products written across all pages.
    pub products_written: usize,
}

/// Scrape every page in [`PAGES`] and write one CSV per page into `out_dir`.
///
/// Page-level failures (navigation, malformed data, output) are isolated:
/// the failed page is logged with its name and cause, and the run continues
/// with the next page. A session-level failure means the browser itself is
/// gone and aborts the run, with the remaining pages counted as failed. A
/// page's file is only written after its full pagination and extraction
/// completed.
pub fn run(session: &Session, out_dir: &Path) -> RunSummary {
    run_pages(|page| scrape_page(session, page), out_dir)
}

/// Run loop over [`PAGES`], generic over the per-page scrape step so the
/// continue-vs-abort policy can be exercised without a browser.
fn run_pages<F>(mut scrape: F, out_dir: &Path) -> RunSummary
where
    F: FnMut(&PageDescriptor) -> Result<Vec<Product>>,
{
    let mut summary = RunSummary::default();

    for (index, page) in PAGES.iter().enumerate() {
        let path = out_dir.join(page.output_file());

        let written = scrape(page)
            .and_then(|products| output::write_csv(&products, &path).map(|()| products.len()));

        match written {
            Ok(count) => {
                log::info!("page '{}': wrote {count} products to {}", page.name, path.display());
                summary.pages_written += 1;
                summary.products_written += count;
            }
            Err(e) if e.is_fatal() => {
                log::error!(
                    "page '{}' failed: {e}; browser session is unusable, aborting run",
                    page.name
                );
                summary.pages_failed += PAGES.len() - index;
                break;
            }
            Err(e) => {
                log::error!("page '{}' failed: {e}", page.name);
                summary.pages_failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use std::collections::HashSet;

    fn sample_product() -> Product {
        Product {
            title: "Acer Aspire ES1-512".to_string(),
            description: "Cheap notebook".to_string(),
            price: 299.0,
            rating: 3,
            num_of_reviews: 4,
        }
    }

    #[test]
    fn test_run_continues_past_page_level_failure() {
        let dir = tempfile::tempdir().unwrap();

        let summary = run_pages(
            |page| {
                if page.name == "laptops" {
                    Err(ScrapeError::Navigation {
                        url: page.url(),
                        reason: "timeout".to_string(),
                    })
                } else {
                    Ok(vec![sample_product()])
                }
            },
            dir.path(),
        );

        assert_eq!(summary.pages_written, PAGES.len() - 1);
        assert_eq!(summary.pages_failed, 1);
        assert_eq!(summary.products_written, PAGES.len() - 1);
        // Pages after the failed one were still written.
        assert!(dir.path().join("touch.csv").exists());
        assert!(!dir.path().join("laptops.csv").exists());
    }

    #[test]
    fn test_run_aborts_on_session_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut attempts = 0;

        let summary = run_pages(
            |page| {
                attempts += 1;
                if page.name == "computers" {
                    Err(ScrapeError::Session("tab crashed".to_string()))
                } else {
                    Ok(vec![sample_product()])
                }
            },
            dir.path(),
        );

        // The session died on the second page: no further page is attempted
        // and the remaining pages count as failed.
        assert_eq!(attempts, 2);
        assert_eq!(summary.pages_written, 1);
        assert_eq!(summary.pages_failed, PAGES.len() - 1);
        assert!(dir.path().join("home.csv").exists());
        assert!(!dir.path().join("touch.csv").exists());
    }

    #[test]
    fn test_six_pages_in_fixed_order() {
        let names: Vec<&str> = PAGES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["home", "computers", "laptops", "tablets", "phones", "touch"]
        );
    }

    #[test]
    fn test_page_names_are_unique() {
        let names: HashSet<&str> = PAGES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PAGES.len());
    }

    #[test]
    fn test_url_joins_onto_base() {
        let laptops = &PAGES[2];
        assert_eq!(
            laptops.url(),
            "https://webscraper.io/test-sites/e-commerce/more/computers/laptops"
        );
    }

    #[test]
    fn test_output_file_uses_page_name() {
        assert_eq!(PAGES[0].output_file(), "home.csv");
        assert_eq!(PAGES[5].output_file(), "touch.csv");
    }
}
