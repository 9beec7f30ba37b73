use headless_chrome::{Element, Tab};
use std::time::{Duration, Instant};

/// How often the page is re-queried while waiting for an element. Kept well
/// below the shortest wait ceiling (2s) so end-of-pagination detection stays
/// responsive.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Outcome of waiting for an element.
///
/// Absence is an expected result of a bounded wait (a consent banner that was
/// already dismissed, a load-more control on an exhausted page), so it is an
/// explicit variant callers pattern-match on, not an error.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The element appeared within the timeout and satisfied the condition.
    Found(T),
    /// The timeout elapsed without the element satisfying the condition.
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Condition an awaited element must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The element exists in the DOM.
    Present,
    /// The element exists and is rendered, so a click can be delivered.
    Clickable,
}

impl Condition {
    fn holds(self, element: &Element) -> bool {
        match self {
            Condition::Present => true,
            // An element without a box model is not laid out and cannot
            // receive a click.
            Condition::Clickable => element.get_box_model().is_ok(),
        }
    }
}

/// Poll the tab for `selector` until `condition` holds or `timeout` elapses.
///
/// The page is checked at least once even with a zero timeout. Query errors
/// during a poll count as "not there yet": the page may still be rendering,
/// and a genuinely broken session surfaces on the next real operation.
pub fn wait_for<'a>(
    tab: &'a Tab,
    selector: &str,
    condition: Condition,
    timeout: Duration,
) -> Lookup<Element<'a>> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Ok(element) = tab.find_element(selector) {
            if condition.holds(&element) {
                return Lookup::Found(element);
            }
        }

        if Instant::now() >= deadline {
            return Lookup::NotFound;
        }

        std::thread::sleep(POLL_INTERVAL);
    }
}
