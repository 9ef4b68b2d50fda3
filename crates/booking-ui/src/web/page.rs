//! `web-sys` implementation of [`Page`]

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, SvgElement, Window,
};

use crate::error::{BehaviorError, Result};
use crate::page::{DeferredTask, DomEvent, EventHandler, EventKind, Page};

/// The live browser document
#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Bind to the current window's document
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or document (not in a browser)
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(BehaviorError::WindowNotAvailable)?;
        let document = window
            .document()
            .ok_or(BehaviorError::DocumentNotAvailable)?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

/// Inline style of an HTML or SVG element
fn inline_style(node: &Element) -> Option<CssStyleDeclaration> {
    node.dyn_ref::<HtmlElement>()
        .map(HtmlElement::style)
        .or_else(|| node.dyn_ref::<SvgElement>().map(SvgElement::style))
}

struct WebEvent(Event);

impl DomEvent for WebEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

impl Page for WebPage {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| BehaviorError::QueryFailed {
                selector: selector.to_string(),
                reason: format!("{e:?}"),
            })?;

        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn input_value(&self, node: &Element) -> Result<String> {
        node.dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .or_else(|| node.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
            .ok_or(BehaviorError::WrongElementType { expected: "input" })
    }

    fn set_displayed(&self, node: &Element, displayed: bool) -> Result<()> {
        let style = inline_style(node).ok_or(BehaviorError::WrongElementType {
            expected: "HTML or SVG element",
        })?;

        let result = if displayed {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        result.map_err(|e| BehaviorError::MutationFailed(format!("{e:?}")))
    }

    fn add_class(&self, node: &Element, class: &str) -> Result<()> {
        node.class_list()
            .add_1(class)
            .map_err(|e| BehaviorError::MutationFailed(format!("{e:?}")))
    }

    fn check_validity(&self, node: &Element) -> Result<bool> {
        node.dyn_ref::<HtmlFormElement>()
            .map(HtmlFormElement::check_validity)
            .ok_or(BehaviorError::WrongElementType { expected: "form" })
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        self.window
            .confirm_with_message(message)
            .map_err(|e| BehaviorError::DialogUnavailable(format!("{e:?}")))
    }

    fn listen(&self, node: &Element, event: EventKind, handler: EventHandler) -> Result<()> {
        let mut handler = handler;
        let closure = Closure::wrap(Box::new(move |raw: Event| {
            let dom_event = WebEvent(raw);
            let event: &dyn DomEvent = &dom_event;
            handler(event);
        }) as Box<dyn FnMut(Event)>);

        node.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|e| BehaviorError::ListenerFailed {
                event: event.as_str(),
                reason: format!("{e:?}"),
            })?;

        // Listeners live as long as the page
        closure.forget();

        Ok(())
    }

    fn defer(&self, delay_ms: u32, task: DeferredTask) -> Result<()> {
        Timeout::new(delay_ms, task).forget();
        Ok(())
    }
}
