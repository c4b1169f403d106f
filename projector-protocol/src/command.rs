//! Outbound command frame encoding.
//!
//! Commands are hex-encoded frames: a fixed 7-byte prefix followed by a
//! 2-byte opcode. The property-refresh request is the one full frame that
//! does not follow the prefix+opcode shape.

use crate::error::Result;

/// TCP port the device listens on
pub const DEFAULT_PORT: u16 = 41794;

/// Fixed 7-byte prefix (hex) carried by every prefix+opcode command
pub const COMMAND_PREFIX: &str = "05000600000300";

/// Full frame (hex) requesting a refresh of every property
pub const REFRESH_PROPERTIES: &str = "050005000002031e";

/// Decode a raw hex payload into wire bytes.
pub fn raw_frame(payload: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(payload)?)
}

/// Build a command frame from a 2-byte (4 hex character) opcode.
pub fn command_frame(opcode: &str) -> Result<Vec<u8>> {
    raw_frame(&format!("{COMMAND_PREFIX}{opcode}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_frame_prepends_prefix() {
        let frame = command_frame("0400").unwrap();
        assert_eq!(frame, vec![0x05, 0x00, 0x06, 0x00, 0x00, 0x03, 0x00, 0x04, 0x00]);
    }

    #[test]
    fn test_raw_frame_refresh_properties() {
        let frame = raw_frame(REFRESH_PROPERTIES).unwrap();
        assert_eq!(frame, vec![0x05, 0x00, 0x05, 0x00, 0x00, 0x02, 0x03, 0x1e]);
    }

    #[test]
    fn test_raw_frame_rejects_bad_hex() {
        assert!(raw_frame("zz").is_err());
        assert!(raw_frame("040").is_err()); // odd length
    }
}
