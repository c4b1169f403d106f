//! Error types for the projector-client crate.

use projector_protocol::ProtocolError;
use thiserror::Error;

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum ProjectorError {
    /// Dial failure, connect timeout, or socket write failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// An operation was attempted with no live connection
    ///
    /// This is the one error the reconnect-once policy reacts to; every
    /// other failure passes through unchanged.
    #[error("Not connected")]
    NotConnected,

    /// A command payload was not valid hex
    #[error(transparent)]
    Encoding(#[from] ProtocolError),
}

/// Type alias for results that can return a ProjectorError
pub type Result<T> = std::result::Result<T, ProjectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectorError::Connection("connection refused".to_string());
        assert_eq!(format!("{}", err), "Connection error: connection refused");
        assert_eq!(format!("{}", ProjectorError::NotConnected), "Not connected");
    }

    #[test]
    fn test_protocol_error_conversion() {
        let err: ProjectorError = projector_protocol::raw_frame("zz").unwrap_err().into();
        assert!(matches!(err, ProjectorError::Encoding(_)));
    }
}
