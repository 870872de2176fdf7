//! Tracker collaborator contract

use crate::types::FieldsObj;

/// Analytics tracker that receives finished hits.
///
/// Transport, batching, and retry all belong to the tracker; linkbeacon only
/// constructs field records and hands them over. Failures inside `send` are
/// the tracker's own policy and are not caught by callers in this crate.
pub trait Tracker: Send + Sync {
    /// Deliver one hit of the given type.
    fn send(&self, hit_type: &str, fields: &FieldsObj);

    /// Set a tracker-level field.
    ///
    /// Only usage telemetry writes through this. Trackers without a settings
    /// surface can keep the default empty body.
    fn set(&self, _field: &str, _value: &str) {}
}
