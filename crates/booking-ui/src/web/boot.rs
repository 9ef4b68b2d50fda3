//! DOM-ready entry point
//!
//! [`boot`] installs logging, waits for the document to finish parsing and
//! runs [`initialize`] exactly once per page.

use std::cell::Cell;

use tracing::{Level, debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::config::BehaviorConfig;
use crate::error::{BehaviorError, Result};
use crate::init::{InitReport, initialize};
use crate::page::Page;
use crate::web::logging;
use crate::web::page::WebPage;
use crate::web::tooltip::BootstrapTooltips;

/// Id of the optional `<script type="application/json">` config override
pub const CONFIG_ELEMENT_ID: &str = "booking-ui-config";

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Install page behaviors once the document is parsed
///
/// Repeated calls on the same page do nothing.
///
/// # Errors
///
/// Returns an error if there is no window or document, or the
/// `DOMContentLoaded` listener cannot be registered
pub fn boot() -> Result<()> {
    if BOOTED.with(|booted| booted.replace(true)) {
        debug!("page behaviors already booted");
        return Ok(());
    }

    logging::install(Level::INFO);
    let page = WebPage::from_window()?;

    if page.document().ready_state() == "loading" {
        let document = page.document().clone();
        let on_ready = Closure::once_into_js(move || {
            run(&page);
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| BehaviorError::ListenerFailed {
                event: "DOMContentLoaded",
                reason: format!("{e:?}"),
            })?;
    } else {
        run(&page);
    }

    Ok(())
}

fn run(page: &WebPage) -> InitReport {
    let config = load_config(page);
    initialize(page, &BootstrapTooltips, &config)
}

/// Configuration from the page's JSON block, or the defaults
fn load_config(page: &WebPage) -> BehaviorConfig {
    let Some(element) = page.element_by_id(CONFIG_ELEMENT_ID) else {
        return BehaviorConfig::default();
    };

    BehaviorConfig::from_json(&page.text_content(&element)).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring page config, using defaults");
        BehaviorConfig::default()
    })
}
