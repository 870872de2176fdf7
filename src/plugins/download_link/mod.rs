//! Download link tracker
//!
//! Observes interactions (clicks by default) on elements matching a download
//! link selector and sends one `event` hit per interaction.
//!
//! ## Fields produced
//!
//! | Field | Value |
//! |-------|-------|
//! | `transport` | `beacon` |
//! | `eventCategory` | `Download Link` |
//! | `eventAction` | the interaction event type |
//! | `eventLabel` | the element's `download` attribute, when present |
//!
//! Any field can be overridden by `fields_obj` or by a `{prefix}{field}`
//! attribute on the link itself, and a hit filter gets the last word.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linkbeacon::{DownloadLinkOptions, DownloadLinkTracker};
//!
//! let mut plugin = DownloadLinkTracker::new(
//!     Arc::clone(&tracker),
//!     Arc::clone(&platform),
//!     DownloadLinkOptions {
//!         events: vec!["click".into(), "contextmenu".into()],
//!         ..Default::default()
//!     },
//! );
//!
//! // Tear down when the embedding page goes away.
//! plugin.remove();
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::dom::{DelegateHandle, DelegateOptions, InteractionEvent, InteractionHandler, LinkElement, Platform};
use crate::fields::{assign, attribute_fields, compose_fields};
use crate::tracker::Tracker;
use crate::types::{FieldsObj, HitFilter, HIT_TYPE_EVENT};
use crate::usage::{track_usage, PluginId};

/// Options for [`DownloadLinkTracker`].
///
/// Construct with struct-update syntax over [`Default`]; any field left out
/// keeps its default, and a provided field fully replaces it.
pub struct DownloadLinkOptions {
    /// Event types to observe.
    pub events: Vec<String>,
    /// Selector matching the links to track.
    pub link_selector: String,
    /// Static fields merged into every hit.
    pub fields_obj: FieldsObj,
    /// Attribute prefix for per-element field overrides.
    pub attribute_prefix: String,
    /// Optional callback that may mutate the merged fields before sending.
    pub hit_filter: Option<HitFilter>,
}

impl Default for DownloadLinkOptions {
    fn default() -> Self {
        Self {
            events: vec!["click".to_string()],
            link_selector: "a[download]".to_string(),
            fields_obj: FieldsObj::new(),
            attribute_prefix: "ga-".to_string(),
            hit_filter: None,
        }
    }
}

impl fmt::Debug for DownloadLinkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadLinkOptions")
            .field("events", &self.events)
            .field("link_selector", &self.link_selector)
            .field("fields_obj", &self.fields_obj)
            .field("attribute_prefix", &self.attribute_prefix)
            .field("hit_filter", &self.hit_filter.is_some())
            .finish()
    }
}

/// Tracks interactions on download links and reports them as `event` hits.
///
/// Listeners are installed at construction and live until [`remove`] is
/// called; there are no other lifecycle states.
///
/// [`remove`]: DownloadLinkTracker::remove
pub struct DownloadLinkTracker {
    delegates: HashMap<String, Box<dyn DelegateHandle>>,
}

impl DownloadLinkTracker {
    /// Install the plugin against `tracker` on the given host platform.
    ///
    /// When the host cannot subscribe to events the instance comes up inert:
    /// no listeners, no hits, and [`remove`](Self::remove) is a no-op.
    pub fn new(
        tracker: Arc<dyn Tracker>,
        platform: Arc<dyn Platform>,
        opts: DownloadLinkOptions,
    ) -> Self {
        track_usage(tracker.as_ref(), PluginId::DownloadLinkTracker);

        if !platform.supports_event_subscription() {
            tracing::debug!("host cannot subscribe to events; plugin is inert");
            return Self {
                delegates: HashMap::new(),
            };
        }

        let opts = Arc::new(opts);
        let mut delegates: HashMap<String, Box<dyn DelegateHandle>> = HashMap::new();

        for event_type in &opts.events {
            if delegates.contains_key(event_type) {
                continue;
            }
            let handle = platform.delegate(
                event_type,
                &opts.link_selector,
                interaction_handler(Arc::clone(&tracker), Arc::clone(&opts)),
                DelegateOptions {
                    use_capture: true,
                    composed: true,
                },
            );
            delegates.insert(event_type.clone(), handle);
        }

        tracing::debug!(
            events = delegates.len(),
            selector = %opts.link_selector,
            "download link tracking active"
        );

        Self { delegates }
    }

    /// Destroy every delegated subscription.
    ///
    /// After this returns, previously observed event types produce no
    /// further hits. Whether destroying an already-destroyed host listener
    /// is safe is the host's contract; this method itself holds each handle
    /// only once.
    pub fn remove(&mut self) {
        for (event_type, handle) in self.delegates.drain() {
            tracing::debug!(event_type = %event_type, "destroying delegated subscription");
            handle.destroy();
        }
    }
}

/// Build the closure handed to the delegation seam.
fn interaction_handler(
    tracker: Arc<dyn Tracker>,
    opts: Arc<DownloadLinkOptions>,
) -> InteractionHandler {
    Box::new(move |event, element| {
        handle_interaction(tracker.as_ref(), &opts, event, element);
    })
}

/// Build and send the hit for one interaction.
fn handle_interaction(
    tracker: &dyn Tracker,
    opts: &DownloadLinkOptions,
    event: &InteractionEvent,
    element: &dyn LinkElement,
) {
    let mut default_fields = FieldsObj::new();
    default_fields.insert("transport".to_string(), Value::String("beacon".to_string()));
    default_fields.insert(
        "eventCategory".to_string(),
        Value::String("Download Link".to_string()),
    );
    default_fields.insert(
        "eventAction".to_string(),
        Value::String(event.event_type.clone()),
    );
    if let Some(label) = element.attribute("download") {
        default_fields.insert("eventLabel".to_string(), Value::String(label));
    }

    let mut user_fields = opts.fields_obj.clone();
    assign(
        &mut user_fields,
        attribute_fields(element, &opts.attribute_prefix),
    );

    let fields = compose_fields(
        default_fields,
        user_fields,
        opts.hit_filter.as_ref(),
        element,
    );

    tracker.send(HIT_TYPE_EVENT, &fields);
}
