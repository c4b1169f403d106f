//! Events delivered to subscribers.

use projector_state::ChangeEvent;

/// An event from the client's background machinery.
#[derive(Debug, Clone)]
pub enum ProjectorEvent {
    /// A tracked property's value changed
    PropertyChanged(ChangeEvent),

    /// The background receiver hit an I/O failure and stopped
    ///
    /// The connection is already marked disconnected when this is emitted;
    /// the owner decides whether and when to reconnect. The receiver never
    /// takes the process down with it.
    Disconnected {
        /// Human-readable cause of the failure
        reason: String,
    },
}
