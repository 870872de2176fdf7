//! # linkbeacon
//!
//! Host-agnostic interaction tracking for download links.
//!
//! This library provides:
//! - A [`DownloadLinkTracker`] plugin that reports link interactions as
//!   analytics `event` hits
//! - Trait seams for the embedding host ([`Platform`], [`LinkElement`]) and
//!   the analytics collaborator ([`Tracker`])
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows in one direction:
//!
//! ```text
//! host event ──▶ Platform delegation (selector filter)
//!            ──▶ field construction (defaults → user fields → element attributes → hit filter)
//!            ──▶ Tracker::send("event", fields)
//! ```
//!
//! The crate never touches a document directly. The host implements
//! [`Platform`] over whatever event system it has; trackers implement
//! [`Tracker`] over whatever transport they own. Everything in between is
//! plain data and is covered by in-crate fakes in the test suite.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use linkbeacon::{Config, DownloadLinkOptions, DownloadLinkTracker};
//!
//! let config = Config::load().expect("failed to load config");
//! let _guard = linkbeacon::logging::init(&config.logging)?;
//!
//! let mut plugin = DownloadLinkTracker::new(
//!     tracker,   // Arc<dyn Tracker>, provided by the analytics layer
//!     platform,  // Arc<dyn Platform>, provided by the host binding
//!     config.download_links.into_options(),
//! );
//!
//! // On teardown:
//! plugin.remove();
//! ```

// Re-export commonly used items at the crate root
pub use config::{Config, DownloadLinkSettings, LoggingConfig};
pub use dom::{
    DelegateHandle, DelegateOptions, InteractionEvent, InteractionHandler, LinkElement, Platform,
};
pub use error::{Error, Result};
pub use plugins::download_link::{DownloadLinkOptions, DownloadLinkTracker};
pub use tracker::Tracker;
pub use types::{FieldsObj, HitFilter};

// Public modules
pub mod config;
pub mod dom;
pub mod error;
pub mod fields;
pub mod logging;
pub mod plugins;
pub mod tracker;
pub mod types;
pub mod usage;
