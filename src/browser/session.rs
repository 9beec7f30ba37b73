use crate::{
    browser::config::SessionOptions,
    error::{Result, ScrapeError},
};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// A single live connection to a controlled Chrome instance.
///
/// All navigation and extraction in a run goes through one session and its
/// one tab; pages are navigated in place, never re-created. Dropping the
/// session kills the underlying browser process, so the browser is released
/// on every exit path, including early returns from extraction errors.
pub struct Session {
    /// Owns the Chrome process; kept alive for the lifetime of the session.
    browser: Browser,

    /// The single tab used for the whole run.
    tab: Arc<Tab>,
}

impl Session {
    /// Launch a new browser instance with the given options.
    pub fn launch(options: SessionOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.headless = options.headless;
        launch_opts.sandbox = false;
        launch_opts.args.push(OsStr::new("--disable-gpu"));

        // The run spends most of its time in render-settle sleeps between
        // load-more clicks; raise the idle timeout well above the default 30s
        // so Chrome is not reaped mid-page.
        launch_opts.idle_browser_timeout = Duration::from_secs(300);

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        let browser =
            Browser::new(launch_opts).map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::Launch(format!("failed to create tab: {e}")))?;

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options.
    pub fn new() -> Result<Self> {
        Self::launch(SessionOptions::default())
    }

    /// The tab all page operations run against.
    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    /// Navigate the session's tab to a URL and wait for the load to complete.
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ScrapeError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    /// Close the session, consuming it. Tab-close errors are ignored since
    /// dropping the browser ends the process anyway.
    pub fn close(self) {
        if let Ok(tabs) = self.browser.get_tabs().lock() {
            for tab in tabs.iter() {
                let _ = tab.close(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests (require Chrome to be installed)
    #[test]
    #[ignore] // Run with: cargo test -- --ignored
    fn test_launch_browser() {
        let result = Session::launch(SessionOptions::new().headless(true));
        assert!(result.is_ok());
    }

    #[test]
    #[ignore]
    fn test_goto() {
        let session = Session::launch(SessionOptions::new().headless(true))
            .expect("Failed to launch browser");

        let result = session.goto("about:blank");
        assert!(result.is_ok());
    }
}
