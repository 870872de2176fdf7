//! Shared domain types for linkbeacon
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Hit** | One record delivered to the tracker (`send("event", fields)`) |
//! | **Fields** | The key/value payload of a hit (`eventCategory`, `eventLabel`, ...) |
//! | **Tracker** | The analytics collaborator that owns transport and delivery |
//! | **Platform** | The embedding host, consumed through the [`crate::dom`] traits |
//! | **Hit filter** | User callback that may mutate the merged fields before sending |

use crate::dom::LinkElement;

/// Field record of a single hit.
///
/// Keys are analytics field names; values are JSON scalars so user fields can
/// carry booleans (`nonInteraction`) and numbers alongside strings.
pub type FieldsObj = serde_json::Map<String, serde_json::Value>;

/// Callback applied to the fully merged field record, after every other
/// layer. The filter may mutate the record in place; whatever it leaves
/// behind is what gets sent. Panics inside the filter propagate to the host.
pub type HitFilter = Box<dyn Fn(&mut FieldsObj, &dyn LinkElement) + Send + Sync>;

/// Hit type used for every record this crate produces.
pub const HIT_TYPE_EVENT: &str = "event";
