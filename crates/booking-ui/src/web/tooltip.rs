//! Bootstrap tooltip capability
//!
//! The tooltip library is loaded by the page, not bundled. The constructor
//! is resolved from `window.bootstrap.Tooltip` on each attach, the same way
//! other globals injected by the host page are looked up.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::error::{BehaviorError, Result};
use crate::page::TooltipFactory;

/// Creates `new bootstrap.Tooltip(element)` for each trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapTooltips;

impl BootstrapTooltips {
    /// Check whether the page loaded the tooltip library
    #[must_use]
    pub fn is_available() -> bool {
        Self::constructor().is_ok()
    }

    fn constructor() -> Result<Function> {
        let window = web_sys::window().ok_or(BehaviorError::WindowNotAvailable)?;

        let bootstrap = lookup(&window, "bootstrap")
            .ok_or_else(|| unavailable("bootstrap is not defined"))?;

        lookup(&bootstrap, "Tooltip")
            .ok_or_else(|| unavailable("bootstrap.Tooltip is not defined"))?
            .dyn_into::<Function>()
            .map_err(|_| unavailable("bootstrap.Tooltip is not a constructor"))
    }
}

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn unavailable(reason: &str) -> BehaviorError {
    BehaviorError::TooltipLibraryUnavailable(reason.to_string())
}

impl TooltipFactory<Element> for BootstrapTooltips {
    fn attach(&self, trigger: &Element) -> Result<()> {
        let constructor = Self::constructor()?;
        Reflect::construct(&constructor, &Array::of1(trigger))
            .map(|_| ())
            .map_err(|e| {
                BehaviorError::MutationFailed(format!("tooltip construction failed: {e:?}"))
            })
    }
}
