//! Host platform seam
//!
//! linkbeacon never touches a document directly. The embedding host supplies
//! a [`Platform`] implementation that performs delegated event subscription
//! (observe an event type on the document, filtered to elements matching a
//! selector) and hands matched elements back as [`LinkElement`] trait
//! objects. Tests drive the crate through fakes of these traits; a browser
//! binding implements them over the real DOM.

use chrono::{DateTime, Utc};

/// A single interaction dispatched by the host.
#[derive(Debug, Clone)]
pub struct InteractionEvent {
    /// DOM-style event type, e.g. `click`.
    pub event_type: String,
    /// When the host dispatched the event.
    pub occurred_at: DateTime<Utc>,
}

impl InteractionEvent {
    /// Create an event of the given type, stamped now.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Options passed through to the host's delegated subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateOptions {
    /// Deliver during the capture phase.
    pub use_capture: bool,
    /// Traverse shadow roots when matching the selector.
    pub composed: bool,
}

/// Read access to a matched element's attributes.
pub trait LinkElement {
    /// Value of a single attribute, `None` when absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// All attributes as name/value pairs.
    fn attributes(&self) -> Vec<(String, String)>;
}

/// Handler invoked by the host once per matching interaction.
pub type InteractionHandler = Box<dyn Fn(&InteractionEvent, &dyn LinkElement) + Send + Sync>;

/// Handle for one delegated subscription.
pub trait DelegateHandle {
    /// Remove the underlying listener. After this returns the handler is
    /// never invoked again.
    fn destroy(self: Box<Self>);
}

/// Capability surface of the embedding host.
///
/// The platform itself is the subscription root: `delegate` observes
/// `event_type` on the host document and invokes `handler` only for events
/// whose target matches `selector`.
pub trait Platform: Send + Sync {
    /// Whether the host can subscribe to events at all.
    ///
    /// Hosts without an event system answer `false`; plugins then come up
    /// inert instead of failing.
    fn supports_event_subscription(&self) -> bool;

    /// Install a delegated subscription and return its handle.
    fn delegate(
        &self,
        event_type: &str,
        selector: &str,
        handler: InteractionHandler,
        options: DelegateOptions,
    ) -> Box<dyn DelegateHandle>;
}
