//! Event delivery, decoupled from the decode path.
//!
//! Delivery uses a broadcast channel: sending never blocks, a missing
//! subscriber means the event is dropped, and a slow subscriber lags and
//! skips rather than stalling frame processing. Dropping is the deliberate
//! backpressure choice here.

use projector_state::ChangeEvent;
use tokio::sync::broadcast;

use crate::event::ProjectorEvent;

pub(crate) struct EventEmitter {
    tx: broadcast::Sender<ProjectorEvent>,
}

impl EventEmitter {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        EventEmitter { tx }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ProjectorEvent> {
        self.tx.subscribe()
    }

    /// Emit a property change, with a human-readable debug line per change.
    pub(crate) fn emit_change(&self, event: ChangeEvent) {
        tracing::debug!(
            field = event.field,
            from = %event.change_from,
            to = %event.change_to,
            "property changed"
        );
        self.emit(ProjectorEvent::PropertyChanged(event));
    }

    pub(crate) fn emit(&self, event: ProjectorEvent) {
        // send() errors only when nobody is subscribed; the event is dropped
        let _ = self.tx.send(event);
    }
}
