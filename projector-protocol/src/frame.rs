//! Frame tokenizing for the device's response stream.
//!
//! The device emits frames terminated by [`FRAME_DELIMITER`] (0x05). Within
//! a frame, [`FIELD_DELIMITER`] (0x03) separates a key region from one or
//! more value tokens. The key region carries a variable-length address
//! prefix; only the trailing 6 hex characters identify the property, so the
//! key is normalized to that suffix.

/// Sentinel byte terminating a frame on receive
pub const FRAME_DELIMITER: u8 = 0x05;

/// Byte separating the key region from value tokens within a frame
pub const FIELD_DELIMITER: u8 = 0x03;

/// One delimiter-bounded unit of the response stream.
///
/// A `Frame` is transient and immutable: it is parsed from raw bytes,
/// handed to the decoder, and dropped. Frames with no value tokens carry
/// nothing actionable and are discarded after the [`Frame::has_value`]
/// check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Normalized property key: the trailing 6 hex characters of the
    /// hex-encoded key region (shorter key regions are kept as-is).
    pub key: String,
    /// Value tokens, interpreted as text.
    pub values: Vec<String>,
}

impl Frame {
    /// Tokenize one raw frame.
    ///
    /// `raw` is everything read up to and including the frame delimiter.
    /// The delimiter itself (and anything after a stray delimiter inside a
    /// token) is stripped from each token.
    pub fn parse(raw: &[u8]) -> Frame {
        let mut tokens = raw.split(|b| *b == FIELD_DELIMITER).map(|token| {
            // Strip the trailing frame delimiter (and anything after a
            // stray one) from the token.
            token
                .split(|b| *b == FRAME_DELIMITER)
                .next()
                .unwrap_or_default()
        });

        // split() always yields at least one token
        let key_region = tokens.next().unwrap_or_default();
        let key = normalize_key(key_region);
        let values = tokens
            .map(|t| String::from_utf8_lossy(t).into_owned())
            .collect();

        Frame { key, values }
    }

    /// First value token, if the frame carried one.
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Whether the frame carried at least one value token.
    ///
    /// Frames that fail this check produce no state update and no event.
    pub fn has_value(&self) -> bool {
        !self.values.is_empty()
    }
}

/// Hex-encode a key region and keep the trailing 6 hex characters.
///
/// Key regions shorter than 3 bytes hex-encode to fewer than 6 characters
/// and are kept whole; they only match a table entry on exact equality.
fn normalize_key(region: &[u8]) -> String {
    let encoded = hex::encode(region);
    if encoded.len() >= 6 {
        encoded[encoded.len() - 6..].to_string()
    } else {
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_and_value() {
        // key region 0x15 0x13 0xb9, one value token, trailing delimiter
        let raw = b"\x15\x13\xb9\x03ViewSonic-Pro8400\x05";
        let frame = Frame::parse(raw);
        assert_eq!(frame.key, "1513b9");
        assert_eq!(frame.value(), Some("ViewSonic-Pro8400"));
        assert!(frame.has_value());
    }

    #[test]
    fn test_parse_long_key_region_keeps_trailing_suffix() {
        // device responses prepend a variable-length address prefix
        let raw = b"\x00\x18\x00\x00\x15\x15\x13\xb9\x03Name\x05";
        let frame = Frame::parse(raw);
        assert_eq!(frame.key, "1513b9");
    }

    #[test]
    fn test_parse_short_key_region_kept_as_is() {
        let raw = b"\x15\x13\x03x\x05";
        let frame = Frame::parse(raw);
        assert_eq!(frame.key, "1513");
    }

    #[test]
    fn test_parse_frame_without_value_tokens() {
        let raw = b"\x15\x13\xb9\x05";
        let frame = Frame::parse(raw);
        assert_eq!(frame.key, "1513b9");
        assert!(!frame.has_value());
        assert_eq!(frame.value(), None);
    }

    #[test]
    fn test_parse_multiple_value_tokens() {
        let raw = b"\x15\x13\xbd\x03first\x03second\x05";
        let frame = Frame::parse(raw);
        assert_eq!(frame.values, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_parse_empty_input() {
        let frame = Frame::parse(b"");
        assert_eq!(frame.key, "");
        assert!(!frame.has_value());
    }

    #[test]
    fn test_delimiter_stripped_from_value() {
        let raw = b"\x15\x13\xb9\x03Name\x05garbage";
        let frame = Frame::parse(raw);
        assert_eq!(frame.value(), Some("Name"));
    }
}
