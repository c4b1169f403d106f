//! The background frame receiver.
//!
//! One task per connection reads the socket for the connection's lifetime,
//! slices the byte stream into frames on the 0x05 sentinel, and feeds each
//! frame through the diff engine in stream order. Frames are never
//! reordered; the only ones dropped are those carrying no value tokens.
//!
//! A read failure is not fatal to anything but this task: the connection
//! is marked disconnected, a `Disconnected` event is emitted, and the task
//! exits cleanly so the owner can decide whether to reconnect.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::watch;

use projector_protocol::{Frame, FRAME_DELIMITER};

use crate::client::Shared;
use crate::event::ProjectorEvent;

pub(crate) async fn run(
    read_half: OwnedReadHalf,
    shared: Arc<Shared>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut reader = BufReader::new(read_half);
    let mut buf = Vec::new();
    tracing::debug!("frame receiver started");

    loop {
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    tracing::debug!("frame receiver observed shutdown signal");
                    break;
                }
            }
            read = reader.read_until(FRAME_DELIMITER, &mut buf) => match read {
                Ok(0) => {
                    report_failure(&shared, "connection closed by device");
                    break;
                }
                Ok(_) => {
                    // A cancelled read leaves partial bytes in the buffer,
                    // so it is only cleared once a full frame came off.
                    let frame = Frame::parse(&buf);
                    buf.clear();
                    if frame.has_value() {
                        // Decode and diff synchronously: this task is the
                        // only snapshot writer, and events come out in
                        // decode order.
                        let events = shared.engine.write().apply(&frame);
                        for event in events {
                            shared.emitter.emit_change(event);
                        }
                    }
                }
                Err(e) => {
                    report_failure(&shared, &format!("read failed: {e}"));
                    break;
                }
            }
        }
    }

    tracing::debug!("frame receiver exited");
}

fn report_failure(shared: &Shared, reason: &str) {
    tracing::warn!(reason, "receive failure, marking connection disconnected");
    shared.connected.store(false, Ordering::SeqCst);
    shared.emitter.emit(ProjectorEvent::Disconnected {
        reason: reason.to_string(),
    });
}
