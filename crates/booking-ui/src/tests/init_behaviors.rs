//! Behavioral tests for tooltip activation and page initialization

#![allow(clippy::unwrap_used)]

use crate::behaviors::Installation;
use crate::config::{BehaviorConfig, FilterConfig};
use crate::error::BehaviorError;
use crate::init::{Behavior, initialize};
use crate::memory::{MemoryElement, MemoryPage, MemoryTooltips};
use crate::page::EventKind;

fn tooltip_trigger() -> MemoryElement {
    MemoryElement::new("span")
        .with_attr("data-bs-toggle", "tooltip")
        .with_attr("title", "Departure time")
}

// ============================================================================
// TOOLTIP BEHAVIORS
// ============================================================================

#[test]
fn given_tooltip_triggers_when_initializing_then_each_gets_a_tooltip() {
    // Given
    let page = MemoryPage::new();
    let first = page.append(tooltip_trigger());
    page.append(MemoryElement::new("span").with_attr("data-bs-toggle", "popover"));
    let second = page.append(tooltip_trigger());
    let tooltips = MemoryTooltips::new();

    // When
    let report = initialize(&page, &tooltips, &BehaviorConfig::default());

    // Then
    assert_eq!(tooltips.attached(), vec![first, second]);
    assert_eq!(
        report.outcome(&Behavior::Tooltips).map(|o| o.result.clone()),
        Some(Ok(Installation::Bound(2)))
    );
}

#[test]
fn given_one_rejected_trigger_when_initializing_then_others_still_get_tooltips() {
    // Given
    let page = MemoryPage::new();
    let rejected = page.append(tooltip_trigger());
    let accepted = page.append(tooltip_trigger());
    let tooltips = MemoryTooltips::new().rejecting(rejected);

    // When
    let report = initialize(&page, &tooltips, &BehaviorConfig::default());

    // Then
    assert_eq!(tooltips.attached(), vec![accepted]);
    assert!(matches!(
        report.outcome(&Behavior::Tooltips).map(|o| o.result.clone()),
        Some(Err(BehaviorError::TooltipsFailed { failed: 1, total: 2, .. }))
    ));
}

// ============================================================================
// FAILURE ISOLATION
// ============================================================================

#[test]
fn given_missing_tooltip_library_when_initializing_then_other_behaviors_install() {
    // Given
    let page = MemoryPage::new();
    page.append(tooltip_trigger());
    let input = page.append(MemoryElement::new("input").with_id("trainSearch"));
    let card = page.append(
        MemoryElement::new("div")
            .with_class("train-card")
            .with_text("Express 101 Delhi-Mumbai"),
    );
    let form = page.append(MemoryElement::new("form").invalid());

    // When
    let report = initialize(&page, &MemoryTooltips::unavailable(), &BehaviorConfig::default());

    // Then
    assert_eq!(report.failures().count(), 1);
    assert!(matches!(
        report.outcome(&Behavior::Tooltips).map(|o| o.result.clone()),
        Some(Err(BehaviorError::TooltipLibraryUnavailable(_)))
    ));

    page.type_into(input, "pune").unwrap();
    assert!(!page.is_displayed(card));
    assert!(page.dispatch(form, EventKind::Submit).default_prevented);
}

#[test]
fn given_unsupported_selector_when_initializing_then_only_that_behavior_fails() {
    // Given
    let page = MemoryPage::new();
    let alert = page.append(MemoryElement::new("div").with_class("alert"));
    let config = BehaviorConfig {
        delete_selector: "table .btn-delete".to_string(),
        ..BehaviorConfig::default()
    };

    // When
    let report = initialize(&page, &MemoryTooltips::new(), &config);

    // Then
    assert!(matches!(
        report.outcome(&Behavior::DeleteGuard).map(|o| o.result.clone()),
        Some(Err(BehaviorError::UnsupportedSelector(_)))
    ));
    assert_eq!(
        report.outcome(&Behavior::AlertDismissal).map(|o| o.result.clone()),
        Some(Ok(Installation::Bound(1)))
    );
    page.advance(5000);
    assert!(!page.is_displayed(alert));
}

// ============================================================================
// REPORT
// ============================================================================

#[test]
fn given_page_without_search_inputs_when_initializing_then_filters_are_absent() {
    // Given
    let page = MemoryPage::new();

    // When
    let report = initialize(&page, &MemoryTooltips::new(), &BehaviorConfig::default());

    // Then
    assert!(report.is_complete());
    for input_id in ["trainSearch", "ticketSearch", "userSearch"] {
        assert_eq!(
            report
                .outcome(&Behavior::Filter(input_id.to_string()))
                .map(|o| o.result.clone()),
            Some(Ok(Installation::Absent))
        );
    }
}

#[test]
fn given_default_config_when_initializing_then_behaviors_report_in_order() {
    // Given
    let page = MemoryPage::new();

    // When
    let report = initialize(&page, &MemoryTooltips::new(), &BehaviorConfig::default());

    // Then
    let order: Vec<Behavior> = report.outcomes.iter().map(|o| o.behavior.clone()).collect();
    assert_eq!(
        order,
        vec![
            Behavior::Tooltips,
            Behavior::Filter("trainSearch".to_string()),
            Behavior::Filter("ticketSearch".to_string()),
            Behavior::Filter("userSearch".to_string()),
            Behavior::DeleteGuard,
            Behavior::AlertDismissal,
            Behavior::FormGuard,
        ]
    );
}

#[test]
fn given_custom_filter_config_when_initializing_then_custom_list_is_filtered() {
    // Given
    let page = MemoryPage::new();
    let input = page.append(MemoryElement::new("input").with_id("stationSearch"));
    let pune = page.append(
        MemoryElement::new("li")
            .with_class("station-card")
            .with_text("Pune Junction"),
    );
    let config = BehaviorConfig {
        filters: vec![FilterConfig::new("stationSearch", ".station-card")],
        ..BehaviorConfig::default()
    };
    initialize(&page, &MemoryTooltips::new(), &config);

    // When
    page.type_into(input, "nagpur").unwrap();

    // Then
    assert!(!page.is_displayed(pune));
}
