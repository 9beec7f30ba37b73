use crate::error::{Result, ScrapeError};
use crate::scrape::selectors;
use crate::scrape::waiter::{Condition, Lookup, wait_for};
use headless_chrome::Tab;
use std::thread;
use std::time::Duration;

/// How long to wait for the load-more control before concluding the page is
/// exhausted.
const LOAD_MORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Pause after each click so the newly appended products render before the
/// control is probed again.
const RENDER_SETTLE: Duration = Duration::from_secs(1);

/// Safety bound on load-more clicks. The catalog pages top out at a few
/// hundred products loaded in batches, so a page that is still offering more
/// after this many clicks has a stuck control.
pub const MAX_LOAD_MORE_CLICKS: usize = 200;

/// Pagination state after one probe of the load-more control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaginationState {
    /// The control was found and clicked; further products may follow.
    MoreAvailable,
    /// The control is gone; every product is materialized. Terminal.
    Exhausted,
}

/// Result of driving pagination to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOutcome {
    /// Number of load-more clicks performed.
    pub clicks: usize,

    /// Whether the safety bound stopped the loop instead of the control
    /// disappearing. Logged as a warning by the driver, not a failure.
    pub capped: bool,
}

/// Click the load-more control until the page stops offering one, so every
/// product fragment is present in the DOM before extraction.
pub fn load_all_products(tab: &Tab) -> Result<PaginationOutcome> {
    let outcome = drive(
        || match wait_for(
            tab,
            selectors::LOAD_MORE,
            Condition::Clickable,
            LOAD_MORE_TIMEOUT,
        ) {
            Lookup::Found(button) => {
                button.click().map_err(|e| {
                    ScrapeError::Session(format!("failed to click load-more control: {e}"))
                })?;
                thread::sleep(RENDER_SETTLE);
                Ok(PaginationState::MoreAvailable)
            }
            Lookup::NotFound => Ok(PaginationState::Exhausted),
        },
        MAX_LOAD_MORE_CLICKS,
    )?;

    if outcome.capped {
        log::warn!(
            "load-more control still present after {} clicks; treating page as exhausted",
            outcome.clicks
        );
    } else {
        log::debug!("page exhausted after {} load-more clicks", outcome.clicks);
    }

    Ok(outcome)
}

/// Core pagination loop, generic over the probe-and-click step so termination
/// can be exercised without a browser.
fn drive<F>(mut step: F, max_rounds: usize) -> Result<PaginationOutcome>
where
    F: FnMut() -> Result<PaginationState>,
{
    for clicks in 0..max_rounds {
        match step()? {
            PaginationState::Exhausted => {
                return Ok(PaginationOutcome {
                    clicks,
                    capped: false,
                });
            }
            PaginationState::MoreAvailable => {}
        }
    }

    Ok(PaginationOutcome {
        clicks: max_rounds,
        capped: true,
    })
}
