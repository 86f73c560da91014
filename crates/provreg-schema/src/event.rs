//! The registry event entity and its declared attribute set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored registry event.
///
/// This is the reference shape for the records the remote service stores.
/// Search responses carry per-request field subsets, so results are handled
/// as plain JSON objects; this struct fixes the declared attribute set that
/// field selections resolve against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier assigned by the registry.
    pub id: String,
    /// Event name (e.g., a pipeline stage like "build").
    pub name: String,
    /// Version of the unit the event describes.
    pub version: String,
    /// Release qualifier for the versioned unit.
    pub release: String,
    /// Platform the event applies to.
    pub platform_id: String,
    /// Package the event belongs to.
    pub package: String,
    /// Human-readable description.
    pub description: String,
    /// Arbitrary user-defined payload.
    pub payload: Value,
    /// Whether the described action succeeded.
    pub success: bool,
    /// Whether the event may be delivered to receivers more than once.
    pub multipass: bool,
    /// When the registry stored the event.
    pub created_at: DateTime<Utc>,
    /// Receiver the event was posted to.
    pub event_receiver_id: String,
}

/// Declared attribute names of [`Event`].
///
/// Built once at compile time and shared read-only; `--fields` selections
/// resolve against this set. Must stay in sync with the struct above.
pub const EVENT_ATTRIBUTES: &[&str] = &[
    "id",
    "name",
    "version",
    "release",
    "platform_id",
    "package",
    "description",
    "payload",
    "success",
    "multipass",
    "created_at",
    "event_receiver_id",
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn reference_event() -> Event {
        Event {
            id: "01JQ3ZV8ZJ2T5W9G4K7M1N6P8R".to_string(),
            name: "build".to_string(),
            version: "1.0.0".to_string(),
            release: "2026.08.05".to_string(),
            platform_id: "x86-64-linux".to_string(),
            package: "acme-svc".to_string(),
            description: "compiled acme-svc".to_string(),
            payload: json!({ "artifact": "acme-svc-1.0.0.tar.gz" }),
            success: true,
            multipass: false,
            created_at: "2026-08-05T12:00:00Z".parse().unwrap(),
            event_receiver_id: "01JQ3ZVCQH8Y2D4F6A9B3C5E7G".to_string(),
        }
    }

    #[test]
    fn attribute_registry_matches_event_shape() {
        let value = serde_json::to_value(reference_event()).unwrap();
        let serialized: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let declared: BTreeSet<&str> = EVENT_ATTRIBUTES.iter().copied().collect();
        assert_eq!(serialized, declared);
    }

    #[test]
    fn attribute_registry_has_no_duplicates() {
        let unique: BTreeSet<&str> = EVENT_ATTRIBUTES.iter().copied().collect();
        assert_eq!(unique.len(), EVENT_ATTRIBUTES.len());
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = reference_event();
        let value = serde_json::to_value(&event).unwrap();
        let restored: Event = serde_json::from_value(value).unwrap();
        assert_eq!(event, restored);
    }
}
