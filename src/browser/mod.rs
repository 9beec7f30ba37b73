//! Browser session management.
//!
//! One [`Session`] wraps a launched Chrome/Chromium process and the single
//! tab all navigation and extraction runs through. The session is created
//! once per run, owned by the caller, and tears the browser process down
//! when dropped.

pub mod config;
pub mod session;

pub use config::SessionOptions;
pub use session::Session;
