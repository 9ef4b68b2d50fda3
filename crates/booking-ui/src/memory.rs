//! In-memory page
//!
//! A [`Page`] without a browser: a flat list of elements, a manual clock for
//! deferred tasks, scripted confirmation answers and synchronous event
//! dispatch. Used by the behavior tests and for headless checks of page
//! markup against the behavior configuration.
//!
//! Selectors are limited to one simple selector: `#id`, `.class`, `tag`,
//! `[attr]` or `[attr="value"]`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::rc::Rc;

use crate::error::{BehaviorError, Result};
use crate::page::{DeferredTask, DomEvent, EventHandler, EventKind, Page, TooltipFactory};

/// Handle to an element of a [`MemoryPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Markup of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    /// Native constraint validity (forms only)
    pub valid: bool,
}

impl MemoryElement {
    /// Create an element with the given tag name
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            valid: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Form whose native constraints are not met
    #[must_use]
    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    fn is_text_input(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea")
    }
}

/// What happened to one dispatched event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
    /// Number of handlers that ran
    pub handled: usize,
}

#[derive(Default)]
struct MemoryEvent {
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl DomEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }
}

/// Parsed simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    Attribute { name: String, value: Option<String> },
}

impl Selector {
    fn parse(selector: &str) -> Result<Self> {
        let unsupported = || BehaviorError::UnsupportedSelector(selector.to_string());
        let trimmed = selector.trim();

        if let Some(inner) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let (name, value) = match inner.split_once('=') {
                Some((name, value)) => (name.trim(), Some(unquote(value.trim()))),
                None => (inner.trim(), None),
            };
            return if is_ident(name) {
                Ok(Self::Attribute {
                    name: name.to_string(),
                    value: value.map(str::to_string),
                })
            } else {
                Err(unsupported())
            };
        }

        let checked = |name: &str| {
            if is_ident(name) {
                Ok(name.to_string())
            } else {
                Err(unsupported())
            }
        };

        if let Some(id) = trimmed.strip_prefix('#') {
            checked(id).map(Self::Id)
        } else if let Some(class) = trimmed.strip_prefix('.') {
            checked(class).map(Self::Class)
        } else {
            checked(trimmed).map(|tag| Self::Tag(tag.to_lowercase()))
        }
    }

    fn matches(&self, element: &MemoryElement) -> bool {
        match self {
            Self::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Self::Class(class) => element.classes.iter().any(|c| c == class),
            Self::Tag(tag) => &element.tag == tag,
            Self::Attribute { name, value } => match (element.attributes.get(name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            },
        }
    }
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

struct ElementState {
    element: MemoryElement,
    displayed: bool,
}

struct Listener {
    node: NodeId,
    event: EventKind,
    handler: Rc<RefCell<EventHandler>>,
}

struct Timer {
    due_ms: u64,
    seq: u64,
    task: DeferredTask,
}

#[derive(Default)]
struct PageState {
    elements: Vec<ElementState>,
    listeners: Vec<Listener>,
    timers: Vec<Timer>,
    now_ms: u64,
    next_seq: u64,
    confirm_answers: VecDeque<bool>,
    prompts: Vec<String>,
    dialog_broken: bool,
}

impl PageState {
    fn element(&self, node: NodeId) -> Result<&ElementState> {
        self.elements
            .get(node.0)
            .ok_or_else(|| BehaviorError::MutationFailed(format!("unknown node {}", node.0)))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementState> {
        self.elements
            .get_mut(node.0)
            .ok_or_else(|| BehaviorError::MutationFailed(format!("unknown node {}", node.0)))
    }
}

/// In-memory [`Page`] implementation
#[derive(Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element; it starts displayed
    pub fn append(&self, element: MemoryElement) -> NodeId {
        let mut state = self.state.borrow_mut();
        let node = NodeId(state.elements.len());
        state.elements.push(ElementState {
            element,
            displayed: true,
        });
        node
    }

    /// Snapshot of an element's markup
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<MemoryElement> {
        self.state
            .borrow()
            .elements
            .get(node.0)
            .map(|e| e.element.clone())
    }

    /// Whether the element is currently displayed
    #[must_use]
    pub fn is_displayed(&self, node: NodeId) -> bool {
        self.state
            .borrow()
            .elements
            .get(node.0)
            .is_some_and(|e| e.displayed)
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Change the native validity of a form
    ///
    /// # Errors
    ///
    /// Returns an error if the node does not exist
    pub fn set_valid(&self, node: NodeId, valid: bool) -> Result<()> {
        self.state.borrow_mut().element_mut(node)?.element.valid = valid;
        Ok(())
    }

    /// Replace an input's value and fire `input`, like a keystroke
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not a text input
    pub fn type_into(&self, node: NodeId, value: &str) -> Result<DispatchOutcome> {
        {
            let mut state = self.state.borrow_mut();
            let entry = state.element_mut(node)?;
            if !entry.element.is_text_input() {
                return Err(BehaviorError::WrongElementType { expected: "input" });
            }
            entry.element.value = value.to_string();
        }
        Ok(self.dispatch(node, EventKind::Input))
    }

    /// Fire `event` on `node`, running its handlers in registration order
    pub fn dispatch(&self, node: NodeId, event: EventKind) -> DispatchOutcome {
        let handlers: Vec<Rc<RefCell<EventHandler>>> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.node == node && l.event == event)
            .map(|l| Rc::clone(&l.handler))
            .collect();

        let dom_event = MemoryEvent::default();
        let event: &dyn DomEvent = &dom_event;
        for handler in &handlers {
            let mut handler = handler.borrow_mut();
            (*handler)(event);
        }

        DispatchOutcome {
            default_prevented: dom_event.default_prevented.get(),
            propagation_stopped: dom_event.propagation_stopped.get(),
            handled: handlers.len(),
        }
    }

    /// Number of handlers registered for `event` on `node`
    #[must_use]
    pub fn listener_count(&self, node: NodeId, event: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.node == node && l.event == event)
            .count()
    }

    /// Queue the answer for the next confirmation dialog
    pub fn answer_confirm(&self, answer: bool) {
        self.state.borrow_mut().confirm_answers.push_back(answer);
    }

    /// Make every further confirmation dialog fail to open
    pub fn break_dialog(&self) {
        self.state.borrow_mut().dialog_broken = true;
    }

    /// Messages of every confirmation dialog shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.state.borrow().prompts.clone()
    }

    /// Milliseconds elapsed on the manual clock
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Deferred tasks not yet run
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Move the clock forward and run every task now due, earliest first
    ///
    /// Returns the number of tasks run.
    pub fn advance(&self, ms: u64) -> usize {
        let now = {
            let mut state = self.state.borrow_mut();
            state.now_ms = state.now_ms.saturating_add(ms);
            state.now_ms
        };

        let mut fired = 0;
        while let Some(timer) = self.take_due(now) {
            (timer.task)();
            fired += 1;
        }
        fired
    }

    fn take_due(&self, now: u64) -> Option<Timer> {
        let mut state = self.state.borrow_mut();
        let index = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;
        Some(state.timers.swap_remove(index))
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.state
            .borrow()
            .elements
            .iter()
            .position(|e| e.element.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .state
            .borrow()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| selector.matches(&e.element))
            .map(|(i, _)| NodeId(i))
            .collect())
    }

    fn text_content(&self, node: &NodeId) -> String {
        self.element(*node).map(|e| e.text).unwrap_or_default()
    }

    fn input_value(&self, node: &NodeId) -> Result<String> {
        let state = self.state.borrow();
        let entry = state.element(*node)?;
        if entry.element.is_text_input() {
            Ok(entry.element.value.clone())
        } else {
            Err(BehaviorError::WrongElementType { expected: "input" })
        }
    }

    fn set_displayed(&self, node: &NodeId, displayed: bool) -> Result<()> {
        self.state.borrow_mut().element_mut(*node)?.displayed = displayed;
        Ok(())
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let classes = &mut state.element_mut(*node)?.element.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn check_validity(&self, node: &NodeId) -> Result<bool> {
        let state = self.state.borrow();
        let entry = state.element(*node)?;
        if entry.element.tag == "form" {
            Ok(entry.element.valid)
        } else {
            Err(BehaviorError::WrongElementType { expected: "form" })
        }
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        if state.dialog_broken {
            return Err(BehaviorError::DialogUnavailable(
                "dialogs are blocked".to_string(),
            ));
        }
        state.prompts.push(message.to_string());
        Ok(state.confirm_answers.pop_front().unwrap_or(false))
    }

    fn listen(&self, node: &NodeId, event: EventKind, handler: EventHandler) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.element(*node).map_err(|e| BehaviorError::ListenerFailed {
            event: event.as_str(),
            reason: e.to_string(),
        })?;
        state.listeners.push(Listener {
            node: *node,
            event,
            handler: Rc::new(RefCell::new(handler)),
        });
        Ok(())
    }

    fn defer(&self, delay_ms: u32, task: DeferredTask) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let timer = Timer {
            due_ms: state.now_ms.saturating_add(u64::from(delay_ms)),
            seq: state.next_seq,
            task,
        };
        state.next_seq = state.next_seq.saturating_add(1);
        state.timers.push(timer);
        Ok(())
    }
}

/// Tooltip factory that records the elements it was asked to decorate
#[derive(Debug, Clone, Default)]
pub struct MemoryTooltips {
    attached: Rc<RefCell<Vec<NodeId>>>,
    rejected: HashSet<NodeId>,
    library_missing: bool,
}

impl MemoryTooltips {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose tooltip library is not loaded
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            library_missing: true,
            ..Self::default()
        }
    }

    /// Reject `node` when asked to attach to it
    #[must_use]
    pub fn rejecting(mut self, node: NodeId) -> Self {
        self.rejected.insert(node);
        self
    }

    /// Elements with a tooltip attached, in attachment order
    #[must_use]
    pub fn attached(&self) -> Vec<NodeId> {
        self.attached.borrow().clone()
    }
}

impl TooltipFactory<NodeId> for MemoryTooltips {
    fn attach(&self, trigger: &NodeId) -> Result<()> {
        if self.library_missing {
            return Err(BehaviorError::TooltipLibraryUnavailable(
                "bootstrap.Tooltip is not defined".to_string(),
            ));
        }
        if self.rejected.contains(trigger) {
            return Err(BehaviorError::MutationFailed(format!(
                "tooltip rejected node {}",
                trigger.0
            )));
        }
        self.attached.borrow_mut().push(*trigger);
        Ok(())
    }
}
