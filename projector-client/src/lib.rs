//! # Projector Client
//!
//! Async client for the Crestron-style binary control protocol spoken by
//! ViewSonic projectors over a persistent TCP session (port 41794). The
//! device streams property updates unsolicited; the client keeps a
//! canonical snapshot, raises change notifications when values diverge,
//! and sends fixed-format command frames.
//!
//! # Architecture
//!
//! ```text
//! Projector (connect / close / with_reconnect / send / perform)
//!     |
//!     |-- writer half ------ command frames -------> device
//!     |
//!     |-- receiver task <--- response stream ------- device
//!            |  split on 0x05, parse      (projector-protocol)
//!            |  decode + diff snapshot    (projector-state)
//!            |
//!         EventEmitter --- broadcast ---> subscribers
//! ```
//!
//! The receiver task is the sole writer of the snapshot; subscribers get
//! immutable copies on every event and [`Projector::properties`] returns a
//! synchronized clone. Event delivery never blocks the decode path: with
//! no subscriber events are dropped, and a slow subscriber lags and skips.

pub use client::Projector;
pub use error::{ProjectorError, Result};
pub use event::ProjectorEvent;

// Re-export the types that appear in this crate's public API
pub use projector_protocol::Action;
pub use projector_state::{ChangeEvent, EventKind, PropertySnapshot, Value};

mod client;
mod emitter;
mod error;
mod event;
mod receiver;
