//! State tracking and change detection for the projector SDK.
//!
//! The device streams property updates unsolicited; this crate keeps the
//! canonical [`PropertySnapshot`] and turns decoded updates into
//! [`ChangeEvent`]s whenever a value diverges from what is stored.
//!
//! # Architecture
//!
//! ```text
//! Frame (projector-protocol)
//!     |
//! DiffEngine::apply
//!     |  decode rule per PropertyKey
//!     |  compare against PropertySnapshot
//!     |
//! 0..2 ChangeEvents (old value, new value, snapshot copy)
//! ```
//!
//! The [`DiffEngine`] is the sole mutator of its snapshot. Everything else
//! sees state only through cloned snapshots, either queried explicitly or
//! carried on each event.

mod engine;
mod event;
mod snapshot;

pub use engine::DiffEngine;
pub use event::{ChangeEvent, EventKind, Value};
pub use snapshot::PropertySnapshot;
