use ecom_scraper::scrape::dismiss_consent_if_present;
use ecom_scraper::scrape::{Condition, Lookup, wait_for};
use ecom_scraper::{PAGES, Session, SessionOptions, catalog};
use std::time::Duration;

#[test]
#[ignore] // Requires Chrome to be installed
fn test_wait_for_present_element() {
    let session = Session::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .goto("data:text/html,<html><body><div class='thumbnail'>card</div></body></html>")
        .expect("Failed to navigate");

    let lookup = wait_for(
        session.tab(),
        ".thumbnail",
        Condition::Present,
        Duration::from_secs(2),
    );
    assert!(lookup.is_found());
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_wait_for_absent_element_times_out() {
    let session = Session::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .goto("data:text/html,<html><body><p>empty</p></body></html>")
        .expect("Failed to navigate");

    let lookup = wait_for(
        session.tab(),
        ".no-such-element",
        Condition::Present,
        Duration::from_secs(1),
    );
    assert!(matches!(lookup, Lookup::NotFound));
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_consent_absent_is_not_an_error() {
    let session = Session::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    session
        .goto("data:text/html,<html><body><p>no banner here</p></body></html>")
        .expect("Failed to navigate");

    // No banner on the page: both calls must return cleanly.
    dismiss_consent_if_present(session.tab()).expect("First dismissal failed");
    dismiss_consent_if_present(session.tab()).expect("Second dismissal failed");
}

#[test]
#[ignore] // Requires Chrome and network access to webscraper.io
fn test_scrape_home_page() {
    let session = Session::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    let home = &PAGES[0];
    let products =
        ecom_scraper::scrape::scrape_page(&session, home).expect("Failed to scrape home page");

    assert!(!products.is_empty(), "Home page should list products");
    for product in &products {
        assert!(!product.title.is_empty());
        assert!(product.price >= 0.0);
        assert!(product.rating <= 5);
    }
}

#[test]
#[ignore] // Requires Chrome and network access to webscraper.io
fn test_full_catalog_run() {
    let session = Session::launch(SessionOptions::new().headless(true))
        .expect("Failed to launch browser");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let summary = catalog::run(&session, dir.path());

    assert_eq!(summary.pages_failed, 0);
    assert_eq!(summary.pages_written, PAGES.len());

    for page in &PAGES {
        let path = dir.path().join(page.output_file());
        let contents = std::fs::read_to_string(&path).expect("Missing output file");
        assert!(contents.starts_with("title,description,price,rating,num_of_reviews"));
        // Row count equals products extracted for the page: header + data rows.
        assert!(contents.lines().count() >= 1);
    }
}
