//! Behavior configuration
//!
//! Defaults match the markup the server templates render. A page may
//! override them with an inline JSON block (see [`crate::web::boot`]).

use serde::{Deserialize, Serialize};

use crate::error::{BehaviorError, Result};

/// Default alert dismissal delay in milliseconds
pub const DEFAULT_ALERT_DELAY_MS: u32 = 5000;

/// One live filter: a search input and the cards it filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Id of the search input element
    pub input_id: String,
    /// Selector for the cards to show or hide
    pub card_selector: String,
}

impl FilterConfig {
    /// Create a filter entry
    #[must_use]
    pub fn new(input_id: impl Into<String>, card_selector: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            card_selector: card_selector.into(),
        }
    }
}

/// Selectors, texts and timings used by every page behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub tooltip_selector: String,
    pub filters: Vec<FilterConfig>,
    pub delete_selector: String,
    pub delete_prompt: String,
    pub alert_selector: String,
    pub alert_delay_ms: u32,
    pub form_selector: String,
    pub validated_class: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_string(),
            filters: vec![
                FilterConfig::new("trainSearch", ".train-card"),
                FilterConfig::new("ticketSearch", ".ticket-card"),
                FilterConfig::new("userSearch", ".user-card"),
            ],
            delete_selector: ".btn-delete".to_string(),
            delete_prompt: "Are you sure you want to delete this item?".to_string(),
            alert_selector: ".alert".to_string(),
            alert_delay_ms: DEFAULT_ALERT_DELAY_MS,
            form_selector: "form".to_string(),
            validated_class: "was-validated".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Parse a JSON override; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON does not parse or fails validation
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BehaviorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty selectors, ids and class names
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first empty field
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("tooltip_selector", &self.tooltip_selector),
            ("delete_selector", &self.delete_selector),
            ("alert_selector", &self.alert_selector),
            ("form_selector", &self.form_selector),
            ("validated_class", &self.validated_class),
        ];

        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BehaviorError::InvalidConfig(format!("{field} is empty")));
        }

        self.filters.iter().try_for_each(|filter| {
            if filter.input_id.trim().is_empty() {
                Err(BehaviorError::InvalidConfig(
                    "filter input_id is empty".to_string(),
                ))
            } else if filter.card_selector.trim().is_empty() {
                Err(BehaviorError::InvalidConfig(format!(
                    "filter '{}' has an empty card_selector",
                    filter.input_id
                )))
            } else {
                Ok(())
            }
        })
    }
}
