//! Plugin usage telemetry
//!
//! Every plugin records itself against the tracker once at construction.
//! Plugins OR their bit into a process-wide bitmap; the bitmap is
//! hex-encoded and written to the tracker under the `&_au` field so the
//! receiving endpoint can tell which plugins produced the traffic.
//! Recording is fire-and-forget and never fails plugin construction.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::tracker::Tracker;

/// Tracker-level field carrying the usage bitmap.
const USAGE_FIELD: &str = "&_au";

/// Bitmap of plugins seen in this process.
static USAGE: AtomicU32 = AtomicU32::new(0);

/// Identifiers for the plugins this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginId {
    DownloadLinkTracker,
}

impl PluginId {
    /// Stable bit index in the usage bitmap.
    fn bit(self) -> u32 {
        match self {
            PluginId::DownloadLinkTracker => 0,
        }
    }
}

/// Record that `plugin` is active against `tracker`.
pub fn track_usage(tracker: &dyn Tracker, plugin: PluginId) {
    let bit = 1u32 << plugin.bit();
    let bitmap = USAGE.fetch_or(bit, Ordering::Relaxed) | bit;

    tracing::debug!(plugin = ?plugin, bitmap, "recording plugin usage");
    tracker.set(USAGE_FIELD, &format!("{bitmap:x}"));
}
