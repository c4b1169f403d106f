//! The named-action catalog.
//!
//! Every device action is a fixed 2-byte opcode appended to the command
//! prefix. Rather than one method per action, the catalog is a single
//! table: an [`Action`] names the operation and [`Action::opcode`] yields
//! its wire identifier. Clients send one through a generic
//! `perform(action)` entry point.

use serde::{Deserialize, Serialize};

/// A named device action and its opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // Power
    PowerOn,
    PowerOff,

    // Input selection
    InputComputer1,
    InputComputer2,
    InputHdmi1,
    InputHdmi2,
    InputComposite,
    InputSVideo,
    InputComponent,
    InputUsbA,
    InputUsbB,
    InputLan,

    // Audio
    Mute,
    Unmute,
    VolumeUp,
    VolumeDown,

    // Picture
    Freeze,
    Blank,
    ContrastUp,
    ContrastDown,
    BrightnessUp,
    BrightnessDown,
    SaturationUp,
    SaturationDown,
    SharpnessUp,
    SharpnessDown,
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,

    // Menu navigation
    Menu,
    Ok,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
}

impl Action {
    /// Every action in the catalog.
    pub const ALL: [Action; 38] = [
        Action::PowerOn,
        Action::PowerOff,
        Action::InputComputer1,
        Action::InputComputer2,
        Action::InputHdmi1,
        Action::InputHdmi2,
        Action::InputComposite,
        Action::InputSVideo,
        Action::InputComponent,
        Action::InputUsbA,
        Action::InputUsbB,
        Action::InputLan,
        Action::Mute,
        Action::Unmute,
        Action::VolumeUp,
        Action::VolumeDown,
        Action::Freeze,
        Action::Blank,
        Action::ContrastUp,
        Action::ContrastDown,
        Action::BrightnessUp,
        Action::BrightnessDown,
        Action::SaturationUp,
        Action::SaturationDown,
        Action::SharpnessUp,
        Action::SharpnessDown,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::PanUp,
        Action::PanDown,
        Action::PanLeft,
        Action::PanRight,
        Action::Menu,
        Action::Ok,
        Action::CursorUp,
        Action::CursorDown,
        Action::CursorLeft,
        Action::CursorRight,
    ];

    /// The 2-byte opcode (4 hex characters) for this action.
    pub fn opcode(&self) -> &'static str {
        match self {
            Action::PowerOn => "0400",
            Action::PowerOff => "0500",
            Action::InputComputer1 => "cd13",
            Action::InputComputer2 => "ce13",
            Action::InputHdmi1 => "cf13",
            Action::InputHdmi2 => "d013",
            Action::InputComposite => "d113",
            Action::InputSVideo => "d213",
            Action::InputComponent => "d313",
            Action::InputUsbA => "d413",
            Action::InputUsbB => "d513",
            Action::InputLan => "d613",
            Action::Mute => "fc13",
            Action::Unmute => "fd13",
            Action::VolumeUp => "fa13",
            Action::VolumeDown => "fb13",
            Action::Freeze => "f013",
            Action::Blank => "ee13",
            Action::ContrastUp => "f613",
            Action::ContrastDown => "f713",
            Action::BrightnessUp => "f413",
            Action::BrightnessDown => "f513",
            Action::SaturationUp => "f213",
            Action::SaturationDown => "f313",
            Action::SharpnessUp => "f813",
            Action::SharpnessDown => "f913",
            Action::ZoomIn => "3914",
            Action::ZoomOut => "3a14",
            Action::PanUp => "3b14",
            Action::PanDown => "3c14",
            Action::PanLeft => "3d14",
            Action::PanRight => "3e14",
            Action::Menu => "1d14",
            Action::Ok => "2314",
            Action::CursorUp => "1e14",
            Action::CursorDown => "1f14",
            Action::CursorLeft => "2014",
            Action::CursorRight => "2114",
        }
    }

    /// Stable string name of the action, e.g. `"PowerOn"`.
    pub fn name(&self) -> &'static str {
        match self {
            Action::PowerOn => "PowerOn",
            Action::PowerOff => "PowerOff",
            Action::InputComputer1 => "InputComputer1",
            Action::InputComputer2 => "InputComputer2",
            Action::InputHdmi1 => "InputHdmi1",
            Action::InputHdmi2 => "InputHdmi2",
            Action::InputComposite => "InputComposite",
            Action::InputSVideo => "InputSVideo",
            Action::InputComponent => "InputComponent",
            Action::InputUsbA => "InputUsbA",
            Action::InputUsbB => "InputUsbB",
            Action::InputLan => "InputLan",
            Action::Mute => "Mute",
            Action::Unmute => "Unmute",
            Action::VolumeUp => "VolumeUp",
            Action::VolumeDown => "VolumeDown",
            Action::Freeze => "Freeze",
            Action::Blank => "Blank",
            Action::ContrastUp => "ContrastUp",
            Action::ContrastDown => "ContrastDown",
            Action::BrightnessUp => "BrightnessUp",
            Action::BrightnessDown => "BrightnessDown",
            Action::SaturationUp => "SaturationUp",
            Action::SaturationDown => "SaturationDown",
            Action::SharpnessUp => "SharpnessUp",
            Action::SharpnessDown => "SharpnessDown",
            Action::ZoomIn => "ZoomIn",
            Action::ZoomOut => "ZoomOut",
            Action::PanUp => "PanUp",
            Action::PanDown => "PanDown",
            Action::PanLeft => "PanLeft",
            Action::PanRight => "PanRight",
            Action::Menu => "Menu",
            Action::Ok => "Ok",
            Action::CursorUp => "CursorUp",
            Action::CursorDown => "CursorDown",
            Action::CursorLeft => "CursorLeft",
            Action::CursorRight => "CursorRight",
        }
    }

    /// Look up an action by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opcodes_are_two_bytes() {
        for action in Action::ALL {
            assert_eq!(action.opcode().len(), 4, "{action} opcode length");
            assert!(hex::decode(action.opcode()).is_ok(), "{action} opcode hex");
        }
    }

    #[test]
    fn test_opcodes_are_unique() {
        let opcodes: HashSet<_> = Action::ALL.iter().map(|a| a.opcode()).collect();
        assert_eq!(opcodes.len(), Action::ALL.len());
    }

    #[test]
    fn test_known_opcodes() {
        assert_eq!(Action::PowerOn.opcode(), "0400");
        assert_eq!(Action::PowerOff.opcode(), "0500");
        assert_eq!(Action::InputHdmi1.opcode(), "cf13");
        assert_eq!(Action::Menu.opcode(), "1d14");
    }

    #[test]
    fn test_from_name_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
        }
        assert_eq!(Action::from_name("poweron"), Some(Action::PowerOn));
        assert_eq!(Action::from_name("NoSuchAction"), None);
    }
}
