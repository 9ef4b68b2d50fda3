//! Alert auto-dismissal

use tracing::warn;

use crate::behaviors::Installation;
use crate::error::Result;
use crate::page::Page;

/// Hide every alert rendered now after `delay_ms`
///
/// Each alert gets its own timer. Alerts added later are not covered and
/// timers are never cancelled; hiding an already hidden alert is harmless.
///
/// # Errors
///
/// Returns an error if the alerts cannot be queried or a timer cannot be
/// scheduled
pub fn install<P: Page>(page: &P, selector: &str, delay_ms: u32) -> Result<Installation> {
    let alerts = page.query_all(selector)?;

    alerts.iter().try_for_each(|alert| {
        let handler_page = page.clone();
        let alert = alert.clone();

        page.defer(
            delay_ms,
            Box::new(move || {
                if let Err(e) = handler_page.set_displayed(&alert, false) {
                    warn!(error = %e, "failed to hide alert");
                }
            }),
        )
    })?;

    Ok(Installation::Bound(alerts.len()))
}
