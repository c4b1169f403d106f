//! The canonical record of device state.

use serde::{Deserialize, Serialize};

/// The full set of tracked property values at a point in time.
///
/// Every field holds the most recently decoded value for that property;
/// fields the device has not reported yet hold their default. Consumers
/// always receive a clone, never a live reference: the decode path is the
/// single writer and copies are taken under synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    /// Device name field
    pub name: String,
    /// Network hostname
    pub hostname: String,
    /// Location field
    pub location: String,
    /// Assigned-to field
    pub assigned_to: String,
    /// Active color mode
    pub color_mode: String,
    /// Whether eco mode is enabled
    pub eco_mode: bool,
    /// Display orientation (e.g. "Front Ceiling")
    pub orientation: String,
    /// Firmware level
    pub firmware: String,
    /// Menu language
    pub language: String,
    /// NIC MAC address
    pub mac: String,
    /// Active input
    pub input: String,
    /// Active resolution (e.g. "1920x1080")
    pub resolution: String,
    /// Refresh rate (e.g. "60Hz"); empty when the device reports none
    pub refresh: String,
    /// Bulb usage hours
    pub bulb_hours: i64,
}
