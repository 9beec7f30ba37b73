use crate::error::{Result, ScrapeError};
use crate::scrape::selectors;
use crate::scrape::waiter::{Condition, Lookup, wait_for};
use headless_chrome::Tab;
use std::thread;
use std::time::Duration;

/// How long to look for the consent banner before concluding it is absent.
const CONSENT_TIMEOUT: Duration = Duration::from_secs(3);

/// Pause after the click so the overlay-removal animation settles before
/// anything underneath is interacted with.
const DISMISS_SETTLE: Duration = Duration::from_secs(1);

/// Best-effort, one-shot dismissal of the cookie-consent banner.
///
/// Runs once per page load, before pagination. Absence of the banner is the
/// normal case on repeat visits and is absorbed here; only a click that could
/// not be delivered to a found banner is an error.
pub fn dismiss_consent_if_present(tab: &Tab) -> Result<()> {
    match wait_for(
        tab,
        selectors::CONSENT_ACCEPT,
        Condition::Clickable,
        CONSENT_TIMEOUT,
    ) {
        Lookup::Found(button) => {
            button.click().map_err(|e| {
                ScrapeError::Session(format!("failed to click consent-accept button: {e}"))
            })?;
            thread::sleep(DISMISS_SETTLE);
            log::debug!("dismissed cookie-consent banner");
        }
        Lookup::NotFound => {
            log::debug!("no cookie-consent banner present");
        }
    }

    Ok(())
}
