//! The table of recognized property keys.
//!
//! Keys are matched on the normalized 6-hex-character suffix produced by
//! frame parsing. Several keys observed in captures (capability blocks,
//! Crestron target IP, NIC addresses, the port echo) are deliberately not
//! in this table; their payloads are not understood well enough to decode.

use serde::{Deserialize, Serialize};

/// A recognized device property, resolved from a normalized frame key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    /// `1513be` - active color mode (raw text)
    ColorMode,
    /// `15138a` - eco mode; text "OFF" (any case) means disabled
    EcoMode,
    /// `1513bc` - display orientation (raw text)
    Orientation,
    /// `1513e2` - menu language (raw text)
    Language,
    /// `1513b3` - NIC MAC address (raw text)
    Mac,
    /// `1513bf` - firmware level (raw text)
    Firmware,
    /// `1513bd` - compound resolution + refresh rate, e.g. "1920 x 1080 60Hz"
    Display,
    /// `1513b9` - device name (raw text)
    Name,
    /// `1513bb` - location field (raw text)
    Location,
    /// `1513ba` - assigned-to field (raw text)
    AssignedTo,
    /// `1513ae` - hostname (raw text)
    Hostname,
    /// `151391` - active input (raw text)
    Input,
    /// `15138b` or `150004` - bulb hours (integer text)
    BulbHours,
}

impl PropertyKey {
    /// Look up a normalized frame key in the table.
    ///
    /// Returns `None` for unrecognized keys; the frame is then skipped.
    pub fn from_frame_key(key: &str) -> Option<PropertyKey> {
        match key {
            "1513be" => Some(PropertyKey::ColorMode),
            "15138a" => Some(PropertyKey::EcoMode),
            "1513bc" => Some(PropertyKey::Orientation),
            "1513e2" => Some(PropertyKey::Language),
            "1513b3" => Some(PropertyKey::Mac),
            "1513bf" => Some(PropertyKey::Firmware),
            "1513bd" => Some(PropertyKey::Display),
            "1513b9" => Some(PropertyKey::Name),
            "1513bb" => Some(PropertyKey::Location),
            "1513ba" => Some(PropertyKey::AssignedTo),
            "1513ae" => Some(PropertyKey::Hostname),
            "151391" => Some(PropertyKey::Input),
            "15138b" | "150004" => Some(PropertyKey::BulbHours),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        assert_eq!(PropertyKey::from_frame_key("1513b9"), Some(PropertyKey::Name));
        assert_eq!(PropertyKey::from_frame_key("1513bd"), Some(PropertyKey::Display));
        assert_eq!(PropertyKey::from_frame_key("151391"), Some(PropertyKey::Input));
    }

    #[test]
    fn test_both_bulb_hours_keys_resolve() {
        assert_eq!(PropertyKey::from_frame_key("15138b"), Some(PropertyKey::BulbHours));
        assert_eq!(PropertyKey::from_frame_key("150004"), Some(PropertyKey::BulbHours));
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(PropertyKey::from_frame_key("1513b4"), None); // Crestron target IP
        assert_eq!(PropertyKey::from_frame_key(""), None);
    }

    #[test]
    fn test_short_key_only_matches_exactly() {
        // a key region too short to normalize never collides with a table entry
        assert_eq!(PropertyKey::from_frame_key("13b9"), None);
    }
}
