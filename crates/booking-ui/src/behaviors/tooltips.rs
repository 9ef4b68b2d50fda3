//! Tooltip activation

use tracing::warn;

use crate::behaviors::Installation;
use crate::error::{BehaviorError, Result};
use crate::page::{Page, TooltipFactory};

/// Attach a tooltip to every trigger element matching `selector`
///
/// Every trigger is attempted even after a failure.
///
/// # Errors
///
/// Returns the factory's error when every trigger failed with it (for
/// example a missing library), or `TooltipsFailed` when only some did
pub fn install<P, T>(page: &P, factory: &T, selector: &str) -> Result<Installation>
where
    P: Page,
    T: TooltipFactory<P::Node> + ?Sized,
{
    let triggers = page.query_all(selector)?;
    let total = triggers.len();

    let failures: Vec<BehaviorError> = triggers
        .iter()
        .filter_map(|trigger| factory.attach(trigger).err())
        .collect();

    match failures.split_first() {
        None => Ok(Installation::Bound(total)),
        Some((first, _)) if failures.len() == total => Err(first.clone()),
        Some((first, _)) => {
            warn!(failed = failures.len(), total, "some tooltips failed to attach");
            Err(BehaviorError::TooltipsFailed {
                failed: failures.len(),
                total,
                first: first.to_string(),
            })
        }
    }
}
