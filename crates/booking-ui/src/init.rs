//! Page initialization
//!
//! [`initialize`] installs every behavior once. Each behavior runs in its
//! own failure boundary: a missing tooltip library or a bad selector fails
//! that behavior alone and is recorded in the [`InitReport`].

use tracing::{info, warn};

use crate::behaviors::{self, Installation};
use crate::config::BehaviorConfig;
use crate::error::Result;
use crate::page::{Page, TooltipFactory};

/// Behaviors installed by [`initialize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    Tooltips,
    /// Live filter keyed by its search input id
    Filter(String),
    DeleteGuard,
    AlertDismissal,
    FormGuard,
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tooltips => write!(f, "tooltips"),
            Self::Filter(input_id) => write!(f, "filter #{input_id}"),
            Self::DeleteGuard => write!(f, "delete guard"),
            Self::AlertDismissal => write!(f, "alert dismissal"),
            Self::FormGuard => write!(f, "form guard"),
        }
    }
}

/// Result of installing one behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorOutcome {
    pub behavior: Behavior,
    pub result: Result<Installation>,
}

/// Per-behavior outcomes of one initialization, in installation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub outcomes: Vec<BehaviorOutcome>,
}

impl InitReport {
    /// Outcome for a given behavior
    #[must_use]
    pub fn outcome(&self, behavior: &Behavior) -> Option<&BehaviorOutcome> {
        self.outcomes.iter().find(|o| &o.behavior == behavior)
    }

    /// Behaviors that failed to install
    pub fn failures(&self) -> impl Iterator<Item = &BehaviorOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    /// True when every behavior installed (absent optional inputs count)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Elements bound across every installed behavior
    #[must_use]
    pub fn bound_elements(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|installation| installation.bound())
            .sum()
    }

    fn record(&mut self, behavior: Behavior, result: Result<Installation>) {
        if let Err(e) = &result {
            warn!(behavior = %behavior, error = %e, "behavior failed to install");
        }
        self.outcomes.push(BehaviorOutcome { behavior, result });
    }
}

/// Install every page behavior into `page`
///
/// Call once per page lifecycle; the browser entry point guards this.
pub fn initialize<P, T>(page: &P, tooltips: &T, config: &BehaviorConfig) -> InitReport
where
    P: Page,
    T: TooltipFactory<P::Node> + ?Sized,
{
    let mut report = InitReport::default();

    report.record(
        Behavior::Tooltips,
        behaviors::tooltips::install(page, tooltips, &config.tooltip_selector),
    );

    for filter in &config.filters {
        report.record(
            Behavior::Filter(filter.input_id.clone()),
            behaviors::filter::install(page, filter),
        );
    }

    report.record(
        Behavior::DeleteGuard,
        behaviors::delete_guard::install(page, &config.delete_selector, &config.delete_prompt),
    );

    report.record(
        Behavior::AlertDismissal,
        behaviors::alerts::install(page, &config.alert_selector, config.alert_delay_ms),
    );

    report.record(
        Behavior::FormGuard,
        behaviors::form_guard::install(page, &config.form_selector, &config.validated_class),
    );

    let installed = report
        .outcomes
        .iter()
        .filter(|o| o.result.as_ref().is_ok_and(|i| *i != Installation::Absent))
        .count();
    info!(
        installed,
        elements = report.bound_elements(),
        failed = report.failures().count(),
        "page behaviors initialized"
    );

    report
}
