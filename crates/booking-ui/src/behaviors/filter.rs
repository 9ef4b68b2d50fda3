//! Live card filter
//!
//! One installer serves the train, ticket and user lists; each
//! [`FilterConfig`] entry pairs a search input with a card selector.

use tracing::{debug, warn};

use crate::behaviors::Installation;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::page::{EventKind, Page};
use crate::search::SearchTerm;

/// Cards shown, hidden and left untouched by one filter pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
    /// Cards whose visibility could not be changed
    pub failed: usize,
}

/// Show every card whose text contains `term`, hide the rest
///
/// Cards are queried fresh on every call so cards rendered after
/// installation are filtered too. A card that cannot be restyled is
/// logged and counted in [`FilterOutcome::failed`]; the remaining cards are
/// still filtered.
///
/// # Errors
///
/// Returns an error if the cards cannot be queried
pub fn apply_filter<P: Page>(
    page: &P,
    card_selector: &str,
    term: &SearchTerm,
) -> Result<FilterOutcome> {
    let cards = page.query_all(card_selector)?;

    let outcome = cards.iter().fold(FilterOutcome::default(), |outcome, card| {
        let visible = term.matches(&page.text_content(card));
        match page.set_displayed(card, visible) {
            Ok(()) if visible => FilterOutcome {
                shown: outcome.shown.saturating_add(1),
                ..outcome
            },
            Ok(()) => FilterOutcome {
                hidden: outcome.hidden.saturating_add(1),
                ..outcome
            },
            Err(e) => {
                warn!(selector = %card_selector, error = %e, "failed to restyle card");
                FilterOutcome {
                    failed: outcome.failed.saturating_add(1),
                    ..outcome
                }
            }
        }
    });

    Ok(outcome)
}

/// Filter the configured cards on every keystroke in the search input
///
/// Returns [`Installation::Absent`] when the page has no such input.
///
/// # Errors
///
/// Returns an error if the input listener cannot be registered
pub fn install<P: Page>(page: &P, config: &FilterConfig) -> Result<Installation> {
    let Some(input) = page.element_by_id(&config.input_id) else {
        debug!(input = %config.input_id, "search input not rendered, filter skipped");
        return Ok(Installation::Absent);
    };

    let handler_page = page.clone();
    let handler_input = input.clone();
    let input_id = config.input_id.clone();
    let card_selector = config.card_selector.clone();

    page.listen(
        &input,
        EventKind::Input,
        Box::new(move |_event| {
            let result = handler_page
                .input_value(&handler_input)
                .map(|raw| SearchTerm::new(&raw))
                .and_then(|term| apply_filter(&handler_page, &card_selector, &term));

            match result {
                Ok(outcome) => debug!(
                    input = %input_id,
                    shown = outcome.shown,
                    hidden = outcome.hidden,
                    failed = outcome.failed,
                    "filter applied"
                ),
                Err(e) => warn!(input = %input_id, error = %e, "filter pass failed"),
            }
        }),
    )?;

    Ok(Installation::Bound(1))
}
