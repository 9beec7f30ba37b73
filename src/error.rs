use thiserror::Error;

/// Errors that can occur while driving the browser or extracting products.
///
/// "Element not found within its timeout" is deliberately not represented
/// here: an absent element is an expected outcome of waiting (no consent
/// banner, no more pages) and is modelled as [`crate::scrape::Lookup::NotFound`]
/// instead of an error.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The browser process could not be started or its first tab could not
    /// be created. Fatal to the entire run.
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// The browser session failed mid-run (CDP transport, tab crash, a click
    /// that could not be delivered).
    #[error("browser session failure: {0}")]
    Session(String),

    /// A target URL could not be loaded. Fatal to the current page only.
    #[error("failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    /// A product fragment carried a field that could not be parsed into its
    /// expected shape. `position` is the fragment's zero-based index in
    /// document order, so the offending product can be located on the page.
    #[error("product fragment {position}: field '{field}' could not be parsed from {value:?}")]
    MalformedField {
        field: &'static str,
        position: usize,
        value: String,
    },

    /// The CSV writer failed.
    #[error("failed to write output file: {0}")]
    Output(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Whether this error means the browser session itself is unusable.
    ///
    /// A dead session cannot serve any further page, so the catalog runner
    /// aborts the run on these instead of moving on to the next page.
    /// Page-level errors (navigation, malformed data, output) stay isolated
    /// to their page.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScrapeError::Launch(_) | ScrapeError::Session(_))
    }
}

/// Result type alias using [`ScrapeError`].
pub type Result<T> = std::result::Result<T, ScrapeError>;
