//! Error types for the projector-protocol crate.

use thiserror::Error;

/// Errors produced while encoding or decoding wire payloads.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A command payload was not valid hex
    ///
    /// Returned when a caller hands a malformed hex string to the command
    /// encoder. Always local and deterministic; never worth retrying.
    #[error("Invalid hex payload: {0}")]
    Encoding(#[from] hex::FromHexError),
}

/// Type alias for results that can return a ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_display() {
        let err = ProtocolError::from(hex::decode("zz").unwrap_err());
        assert!(format!("{}", err).starts_with("Invalid hex payload"));
    }
}
