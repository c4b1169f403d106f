//! Wire-level protocol support for Crestron-style projector control.
//!
//! The device speaks a binary protocol over a persistent TCP session
//! (port 41794). Responses arrive as an unsolicited stream of frames
//! terminated by a sentinel byte; commands are short hex-encoded frames
//! built from a fixed prefix plus a 2-byte opcode.
//!
//! This crate owns everything at the byte level:
//!
//! ```text
//! frame    - tokenizing one response frame, key normalization
//! keys     - the table of recognized property keys
//! command  - outbound frame encoding (prefix + opcode, refresh frame)
//! action   - the named-action catalog (action name -> opcode)
//! ```
//!
//! State tracking and change detection live in `projector-state`; the
//! connection itself lives in `projector-client`.

mod action;
mod command;
mod error;
mod frame;
mod keys;

pub use action::Action;
pub use command::{command_frame, raw_frame, COMMAND_PREFIX, DEFAULT_PORT, REFRESH_PROPERTIES};
pub use error::{ProtocolError, Result};
pub use frame::{Frame, FIELD_DELIMITER, FRAME_DELIMITER};
pub use keys::PropertyKey;
