use std::path::PathBuf;

/// Options for launching the scraper's browser session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Whether to run Chrome headless (default: true).
    pub headless: bool,

    /// Path to a custom Chrome/Chromium binary. When `None`, the system
    /// default installation is used.
    pub chrome_path: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
        }
    }
}

impl SessionOptions {
    /// Create options with defaults (headless, system Chrome).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set headless mode.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set the browser executable path.
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}
