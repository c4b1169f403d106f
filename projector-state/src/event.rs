//! Change event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::PropertySnapshot;

/// Kind of event raised by the diff engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// A tracked property's value diverged from its stored value
    PropertyChanged,
}

/// A property value as carried on events.
///
/// Tracked properties are textual, boolean (eco mode), or integer
/// (bulb hours); this union covers the old/new value pair on a
/// [`ChangeEvent`] without stringifying everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
        }
    }
}

/// Notification that one property's value changed.
///
/// Constructed by the diff engine immediately after the snapshot update;
/// ownership passes to the emitter and then to the subscriber. The carried
/// snapshot is a copy taken after the update and is never mutated again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeEvent {
    /// What happened
    pub kind: EventKind,
    /// Name of the field that changed (e.g. "Name", "BulbHours")
    pub field: &'static str,
    /// Value stored before the update
    pub change_from: Value,
    /// Value stored by the update
    pub change_to: Value,
    /// When the change was decoded
    pub timestamp: DateTime<Utc>,
    /// Full snapshot taken immediately after the update
    pub properties: PropertySnapshot,
}

impl ChangeEvent {
    /// Build a property-change event, stamping it with the current time.
    ///
    /// The timestamp defaults to decode time here rather than anywhere
    /// ambient; use [`ChangeEvent::with_timestamp`] to override it.
    pub fn property_changed(
        field: &'static str,
        change_from: Value,
        change_to: Value,
        properties: PropertySnapshot,
    ) -> Self {
        ChangeEvent {
            kind: EventKind::PropertyChanged,
            field,
            change_from,
            change_to,
            timestamp: Utc::now(),
            properties,
        }
    }

    /// Replace the default timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_stamps_current_time() {
        let before = Utc::now();
        let event = ChangeEvent::property_changed(
            "Name",
            Value::Text("old".into()),
            Value::Text("new".into()),
            PropertySnapshot::default(),
        );
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= Utc::now());
    }

    #[test]
    fn test_with_timestamp_overrides() {
        let fixed = DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let event = ChangeEvent::property_changed(
            "Input",
            Value::Text("HDMI1".into()),
            Value::Text("HDMI2".into()),
            PropertySnapshot::default(),
        )
        .with_timestamp(fixed);
        assert_eq!(event.timestamp, fixed);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("HDMI1".into()).to_string(), "HDMI1");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(182).to_string(), "182");
    }
}
