//! Tracked event record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Group;

/// Free-form event properties.
pub type Properties = Map<String, Value>;

/// Keys owned by the record itself; callers cannot override them.
pub const RESERVED_KEYS: [&str; 3] = ["event", "group", "timestamp"];

/// One user interaction, tagged with the visitor's group.
///
/// Serializes as a single flat object so collectors can read it without
/// knowing the schema: `{"event": .., "group": "A", "timestamp": .., ..props}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEvent {
    #[serde(rename = "event")]
    name: String,
    group: Group,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    properties: Properties,
}

impl TrackedEvent {
    /// Builds a record, dropping any reserved key from `properties`.
    pub fn new(
        name: impl Into<String>,
        group: Group,
        timestamp: DateTime<Utc>,
        mut properties: Properties,
    ) -> Self {
        for key in RESERVED_KEYS {
            properties.remove(key);
        }
        Self {
            name: name.into(),
            group,
            timestamp,
            properties,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Properties {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn reserved_keys_are_stripped() {
        let now = Utc::now();
        let event = TrackedEvent::new(
            "cta_click",
            Group::A,
            now,
            props(json!({
                "location": "hero",
                "group": "B",
                "timestamp": "1970-01-01T00:00:00Z",
                "event": "spoofed",
            })),
        );

        assert_eq!(event.name(), "cta_click");
        assert_eq!(event.group(), Group::A);
        assert_eq!(event.timestamp(), now);
        assert_eq!(event.properties().len(), 1);
        assert_eq!(event.property("location"), Some(&json!("hero")));
    }

    #[test]
    fn serializes_flat() {
        let event = TrackedEvent::new(
            "nav_click",
            Group::B,
            Utc::now(),
            props(json!({ "section": "products" })),
        );
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["event"], "nav_click");
        assert_eq!(value["group"], "B");
        assert_eq!(value["section"], "products");
        assert!(value["timestamp"].is_string());

        let back: TrackedEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }
}
