//! Behavioral tests for the delete-confirmation and form submission guards

#![allow(clippy::unwrap_used)]

use crate::behaviors::Installation;
use crate::behaviors::{delete_guard, form_guard};
use crate::memory::{MemoryElement, MemoryPage};
use crate::page::EventKind;

const PROMPT: &str = "Are you sure you want to delete this item?";

// ============================================================================
// DELETE GUARD BEHAVIORS
// ============================================================================

#[test]
fn given_delete_button_when_user_declines_then_default_action_is_prevented() {
    // Given
    let page = MemoryPage::new();
    let button = page.append(MemoryElement::new("a").with_class("btn-delete"));
    delete_guard::install(&page, ".btn-delete", PROMPT).unwrap();
    page.answer_confirm(false);

    // When
    let outcome = page.dispatch(button, EventKind::Click);

    // Then
    assert!(outcome.default_prevented);
    assert_eq!(page.prompts(), vec![PROMPT]);
}

#[test]
fn given_delete_button_when_user_accepts_then_default_action_proceeds() {
    // Given
    let page = MemoryPage::new();
    let button = page.append(MemoryElement::new("button").with_class("btn-delete"));
    delete_guard::install(&page, ".btn-delete", PROMPT).unwrap();
    page.answer_confirm(true);

    // When
    let outcome = page.dispatch(button, EventKind::Click);

    // Then
    assert!(!outcome.default_prevented);
    assert!(!outcome.propagation_stopped);
}

#[test]
fn given_each_click_when_answering_differently_then_each_click_is_asked_fresh() {
    // Given
    let page = MemoryPage::new();
    let button = page.append(MemoryElement::new("a").with_class("btn-delete"));
    delete_guard::install(&page, ".btn-delete", PROMPT).unwrap();
    page.answer_confirm(false);
    page.answer_confirm(true);

    // When
    let first = page.dispatch(button, EventKind::Click);
    let second = page.dispatch(button, EventKind::Click);

    // Then
    assert!(first.default_prevented);
    assert!(!second.default_prevented);
    assert_eq!(page.prompts().len(), 2);
}

#[test]
fn given_broken_dialog_when_clicking_delete_then_action_is_blocked() {
    // Given
    let page = MemoryPage::new();
    let button = page.append(MemoryElement::new("a").with_class("btn-delete"));
    delete_guard::install(&page, ".btn-delete", PROMPT).unwrap();
    page.break_dialog();

    // When
    let outcome = page.dispatch(button, EventKind::Click);

    // Then
    assert!(outcome.default_prevented);
}

#[test]
fn given_plain_button_when_clicking_then_no_confirmation_is_asked() {
    // Given
    let page = MemoryPage::new();
    let plain = page.append(MemoryElement::new("button").with_class("btn-primary"));
    page.append(MemoryElement::new("button").with_class("btn-delete"));
    let installed = delete_guard::install(&page, ".btn-delete", PROMPT).unwrap();

    // When
    let outcome = page.dispatch(plain, EventKind::Click);

    // Then
    assert_eq!(installed, Installation::Bound(1));
    assert_eq!(outcome.handled, 0);
    assert!(page.prompts().is_empty());
}

// ============================================================================
// FORM GUARD BEHAVIORS
// ============================================================================

#[test]
fn given_invalid_form_when_submitting_then_submission_is_blocked_and_marked() {
    // Given
    let page = MemoryPage::new();
    let form = page.append(MemoryElement::new("form").invalid());
    form_guard::install(&page, "form", "was-validated").unwrap();

    // When
    let outcome = page.dispatch(form, EventKind::Submit);

    // Then
    assert!(outcome.default_prevented);
    assert!(outcome.propagation_stopped);
    assert!(page.has_class(form, "was-validated"));
}

#[test]
fn given_valid_form_when_submitting_then_submission_proceeds_and_is_marked() {
    // Given
    let page = MemoryPage::new();
    let form = page.append(MemoryElement::new("form"));
    form_guard::install(&page, "form", "was-validated").unwrap();

    // When
    let outcome = page.dispatch(form, EventKind::Submit);

    // Then
    assert!(!outcome.default_prevented);
    assert!(!outcome.propagation_stopped);
    assert!(page.has_class(form, "was-validated"));
}

#[test]
fn given_form_fixed_after_failed_submit_when_resubmitting_then_validity_is_rechecked() {
    // Given
    let page = MemoryPage::new();
    let form = page.append(MemoryElement::new("form").invalid());
    form_guard::install(&page, "form", "was-validated").unwrap();
    let first = page.dispatch(form, EventKind::Submit);

    // When
    page.set_valid(form, true).unwrap();
    let second = page.dispatch(form, EventKind::Submit);

    // Then
    assert!(first.default_prevented);
    assert!(!second.default_prevented);
    assert_eq!(
        page.element(form).unwrap().classes,
        vec!["was-validated"],
        "Marker is added once"
    );
}

#[test]
fn given_non_form_match_when_submitting_then_submission_is_not_blocked() {
    // Given
    let page = MemoryPage::new();
    let div = page.append(MemoryElement::new("div").with_class("pseudo-form"));
    form_guard::install(&page, ".pseudo-form", "was-validated").unwrap();

    // When
    let outcome = page.dispatch(div, EventKind::Submit);

    // Then
    assert!(!outcome.default_prevented);
    assert!(page.has_class(div, "was-validated"));
}
