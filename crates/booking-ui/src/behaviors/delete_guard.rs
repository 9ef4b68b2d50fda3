//! Delete-confirmation guard

use tracing::{debug, warn};

use crate::behaviors::Installation;
use crate::error::Result;
use crate::page::{EventKind, Page};

/// Ask for confirmation before every delete action matching `selector`
///
/// A declined prompt cancels the click's default action (following the
/// link or submitting the delete form). A dialog the host cannot show
/// counts as declined.
///
/// # Errors
///
/// Returns an error if the buttons cannot be queried or a listener
/// cannot be registered
pub fn install<P: Page>(page: &P, selector: &str, prompt: &str) -> Result<Installation> {
    let buttons = page.query_all(selector)?;

    buttons.iter().try_for_each(|button| {
        let handler_page = page.clone();
        let prompt = prompt.to_string();

        page.listen(
            button,
            EventKind::Click,
            Box::new(move |event| {
                let confirmed = handler_page.confirm(&prompt).unwrap_or_else(|e| {
                    warn!(error = %e, "confirmation dialog failed, delete blocked");
                    false
                });

                if !confirmed {
                    debug!("delete declined");
                    event.prevent_default();
                }
            }),
        )
    })?;

    Ok(Installation::Bound(buttons.len()))
}
