//! Frame decoding and change detection.
//!
//! The engine resolves each frame's normalized key against the property
//! table, decodes the value per that key's rule, and compares it against
//! the stored snapshot. Only a genuine divergence mutates the snapshot and
//! produces an event; equal values, unknown keys, valueless frames, and
//! unparseable numeric text are all silent skips.

use projector_protocol::{Frame, PropertyKey};

use crate::event::{ChangeEvent, Value};
use crate::snapshot::PropertySnapshot;

/// Decodes frames into snapshot updates and change events.
///
/// The engine owns its [`PropertySnapshot`] exclusively: callers feed it
/// frames in stream order and it is the only writer. Events for a given
/// field therefore come out in decode order.
#[derive(Debug, Default)]
pub struct DiffEngine {
    snapshot: PropertySnapshot,
}

impl DiffEngine {
    /// Create an engine with an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state; callers clone what they need to keep.
    pub fn snapshot(&self) -> &PropertySnapshot {
        &self.snapshot
    }

    /// Decode one frame and fold it into the snapshot.
    ///
    /// Returns the change events the frame produced: none for a skip or an
    /// equal value, one for a simple field, and up to two for the compound
    /// resolution/refresh key.
    pub fn apply(&mut self, frame: &Frame) -> Vec<ChangeEvent> {
        let mut events = Vec::new();

        let Some(value) = frame.value() else {
            // fewer than two tokens: nothing actionable
            return events;
        };
        let Some(key) = PropertyKey::from_frame_key(&frame.key) else {
            tracing::trace!(key = %frame.key, "skipping unrecognized property key");
            return events;
        };

        match key {
            PropertyKey::ColorMode => self.apply_text("ColorMode", value, |s| &mut s.color_mode, &mut events),
            PropertyKey::Orientation => self.apply_text("Orientation", value, |s| &mut s.orientation, &mut events),
            PropertyKey::Language => self.apply_text("Language", value, |s| &mut s.language, &mut events),
            PropertyKey::Mac => self.apply_text("MAC", value, |s| &mut s.mac, &mut events),
            PropertyKey::Firmware => self.apply_text("Firmware", value, |s| &mut s.firmware, &mut events),
            PropertyKey::Name => self.apply_text("Name", value, |s| &mut s.name, &mut events),
            PropertyKey::Location => self.apply_text("Location", value, |s| &mut s.location, &mut events),
            PropertyKey::AssignedTo => self.apply_text("AssignedTo", value, |s| &mut s.assigned_to, &mut events),
            PropertyKey::Hostname => self.apply_text("Hostname", value, |s| &mut s.hostname, &mut events),
            PropertyKey::Input => self.apply_text("Input", value, |s| &mut s.input, &mut events),
            PropertyKey::EcoMode => self.apply_eco_mode(value, &mut events),
            PropertyKey::Display => self.apply_display(value, &mut events),
            PropertyKey::BulbHours => self.apply_bulb_hours(value, &mut events),
        }

        events
    }

    /// Raw-text rule: store the value as-is when it differs.
    fn apply_text(
        &mut self,
        field: &'static str,
        value: &str,
        slot: fn(&mut PropertySnapshot) -> &mut String,
        events: &mut Vec<ChangeEvent>,
    ) {
        let current = slot(&mut self.snapshot);
        if current.as_str() != value {
            let previous = std::mem::replace(current, value.to_string());
            events.push(ChangeEvent::property_changed(
                field,
                Value::Text(previous),
                Value::Text(value.to_string()),
                self.snapshot.clone(),
            ));
        }
    }

    /// Boolean rule: enabled unless the text equals "OFF", any case.
    fn apply_eco_mode(&mut self, value: &str, events: &mut Vec<ChangeEvent>) {
        let enabled = !value.eq_ignore_ascii_case("OFF");
        if self.snapshot.eco_mode != enabled {
            let previous = self.snapshot.eco_mode;
            self.snapshot.eco_mode = enabled;
            events.push(ChangeEvent::property_changed(
                "EcoMode",
                Value::Bool(previous),
                Value::Bool(enabled),
                self.snapshot.clone(),
            ));
        }
    }

    /// Compound rule for the display key.
    ///
    /// The device reports e.g. "1920 x 1080 60Hz". The first " x " is
    /// collapsed and the remainder split on spaces: token 0 is the
    /// resolution, token 1 (when present) the refresh rate. A report with
    /// no refresh token clears a previously known refresh rate. Either
    /// field can change independently, so one frame yields 0, 1, or 2
    /// events.
    fn apply_display(&mut self, value: &str, events: &mut Vec<ChangeEvent>) {
        let reformed = value.replacen(" x ", "x", 1);
        let mut tokens = reformed.split(' ');

        let resolution = tokens.next().unwrap_or_default().to_string();
        self.apply_text("Resolution", &resolution, |s| &mut s.resolution, events);

        match tokens.next() {
            Some(refresh) => {
                let refresh = refresh.to_string();
                self.apply_text("Refresh", &refresh, |s| &mut s.refresh, events);
            }
            None => self.apply_text("Refresh", "", |s| &mut s.refresh, events),
        }
    }

    /// Integer rule: non-numeric text is a silent skip.
    fn apply_bulb_hours(&mut self, value: &str, events: &mut Vec<ChangeEvent>) {
        let Ok(hours) = value.parse::<i64>() else {
            tracing::trace!(value, "ignoring unparseable bulb hours");
            return;
        };
        if self.snapshot.bulb_hours != hours {
            let previous = self.snapshot.bulb_hours;
            self.snapshot.bulb_hours = hours;
            events.push(ChangeEvent::property_changed(
                "BulbHours",
                Value::Int(previous),
                Value::Int(hours),
                self.snapshot.clone(),
            ));
        }
    }
}
