//! The projector client: connection lifecycle and command sending.

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpStream;
use tokio::sync::{broadcast, watch, Mutex};
use tokio::task::JoinHandle;

use projector_protocol::{Action, COMMAND_PREFIX, DEFAULT_PORT, REFRESH_PROPERTIES};
use projector_state::{DiffEngine, PropertySnapshot};

use crate::emitter::EventEmitter;
use crate::error::{ProjectorError, Result};
use crate::event::ProjectorEvent;
use crate::receiver;

/// Timeout used by the one-shot reconnect inside [`Projector::with_reconnect`]
const RECONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Buffered events per subscriber before a slow subscriber starts lagging
const EVENT_BUFFER: usize = 256;

/// Shared state between the client handle and its background receiver.
pub(crate) struct Shared {
    pub(crate) addr: SocketAddr,
    pub(crate) connected: AtomicBool,
    /// Write half of the live connection, if any. Guarded by an async
    /// mutex because writes hold it across an await.
    pub(crate) writer: Mutex<Option<OwnedWriteHalf>>,
    /// Diff engine owning the canonical snapshot. The receiver task is the
    /// only writer; everything else takes read-locked clones.
    pub(crate) engine: RwLock<DiffEngine>,
    pub(crate) emitter: EventEmitter,
    /// Cooperative shutdown signal observed by the receiver loop
    pub(crate) shutdown: watch::Sender<bool>,
    receiver: Mutex<Option<JoinHandle<()>>>,
}

/// Client for one projector.
///
/// Owns the TCP session and the background frame receiver. Cheap to clone;
/// clones share the same connection and state.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use projector_client::{Projector, ProjectorEvent};
/// use projector_protocol::Action;
///
/// #[tokio::main]
/// async fn main() -> Result<(), projector_client::ProjectorError> {
///     let projector = Projector::new("192.168.1.50".parse().unwrap());
///     let mut events = projector.subscribe();
///     projector.connect(Duration::from_secs(5)).await?;
///
///     projector.perform(Action::PowerOn).await?;
///
///     while let Ok(event) = events.recv().await {
///         if let ProjectorEvent::PropertyChanged(change) = event {
///             println!("{} -> {}", change.field, change.change_to);
///         }
///     }
///     projector.close().await;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Projector {
    inner: Arc<Shared>,
}

impl Projector {
    /// Create a client for a device at `ip` on the standard port (41794).
    ///
    /// Does not connect; call [`Projector::connect`].
    pub fn new(ip: IpAddr) -> Self {
        Self::with_addr(SocketAddr::new(ip, DEFAULT_PORT))
    }

    /// Create a client for a device at an explicit socket address.
    pub fn with_addr(addr: SocketAddr) -> Self {
        let (shutdown, _) = watch::channel(false);
        Projector {
            inner: Arc::new(Shared {
                addr,
                connected: AtomicBool::new(false),
                writer: Mutex::new(None),
                engine: RwLock::new(DiffEngine::new()),
                emitter: EventEmitter::new(EVENT_BUFFER),
                shutdown,
                receiver: Mutex::new(None),
            }),
        }
    }

    /// Establish the TCP session.
    ///
    /// Dials within `timeout`, starts the background frame receiver, and
    /// issues the initial full property refresh (best-effort; its results
    /// arrive asynchronously). Fails on dial timeout or refusal.
    /// Idempotent: calling this while already connected is a no-op
    /// returning success, and concurrent calls dial at most once.
    pub async fn connect(&self, timeout: Duration) -> Result<()> {
        // The receiver slot doubles as the connect guard: holding it across
        // the connected-check, dial, spawn, and store serializes concurrent
        // connects, so a second caller can never replace (and orphan) a
        // live receiver's join handle.
        let mut receiver = self.inner.receiver.lock().await;
        if self.is_connected() {
            return Ok(());
        }

        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.inner.addr))
            .await
            .map_err(|_| {
                ProjectorError::Connection(format!(
                    "connect to {} timed out after {:?}",
                    self.inner.addr, timeout
                ))
            })?
            .map_err(|e| {
                ProjectorError::Connection(format!("failed to connect to {}: {}", self.inner.addr, e))
            })?;

        let (read_half, write_half) = stream.into_split();
        *self.inner.writer.lock().await = Some(write_half);

        // Arm the shutdown signal for the new receiver before it subscribes
        self.inner.shutdown.send_replace(false);
        self.inner.connected.store(true, Ordering::SeqCst);

        *receiver = Some(tokio::spawn(receiver::run(
            read_half,
            Arc::clone(&self.inner),
            self.inner.shutdown.subscribe(),
        )));
        drop(receiver);

        tracing::debug!(addr = %self.inner.addr, "connected");

        // Refresh results arrive on the response stream at the device's
        // pace; a lost refresh write does not fail an otherwise live
        // connection.
        if let Err(e) = self.refresh_properties().await {
            tracing::warn!(error = %e, "initial property refresh failed");
        }
        Ok(())
    }

    /// Tear the session down.
    ///
    /// Signals the receiver, closes the socket, and waits until the
    /// receiver task has observed the signal and exited. No background
    /// task outlives this call.
    pub async fn close(&self) {
        let _ = self.inner.shutdown.send(true);
        self.inner.connected.store(false, Ordering::SeqCst);

        if let Some(mut writer) = self.inner.writer.lock().await.take() {
            let _ = writer.shutdown().await;
        }
        if let Some(handle) = self.inner.receiver.lock().await.take() {
            let _ = handle.await;
        }
        tracing::debug!(addr = %self.inner.addr, "closed");
    }

    /// Run `operation`, reconnecting and retrying once on [`ProjectorError::NotConnected`].
    ///
    /// Any other failure, or a failed reconnect, is returned unchanged.
    /// This is deliberately not a retry loop: callers wanting more
    /// attempts wrap it themselves. Only `NotConnected` triggers the
    /// reconnect; other transient I/O errors pass through untouched.
    pub async fn with_reconnect<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match operation().await {
            Err(ProjectorError::NotConnected) => {
                tracing::debug!(addr = %self.inner.addr, "operation hit a dead connection, reconnecting");
                self.connect(RECONNECT_TIMEOUT).await?;
                operation().await
            }
            other => other,
        }
    }

    /// Send a raw hex payload straight to the device.
    ///
    /// Prefer [`Projector::perform`]; this exists for payloads the action
    /// catalog does not cover.
    pub async fn raw_send(&self, payload: &str) -> Result<()> {
        let frame = projector_protocol::raw_frame(payload)?;

        let mut guard = self.inner.writer.lock().await;
        let Some(writer) = guard.as_mut() else {
            return Err(ProjectorError::NotConnected);
        };
        writer
            .write_all(&frame)
            .await
            .map_err(|e| ProjectorError::Connection(format!("write failed: {e}")))
    }

    /// Send a command frame: the fixed protocol prefix plus `opcode`.
    pub async fn send(&self, opcode: &str) -> Result<()> {
        self.raw_send(&format!("{COMMAND_PREFIX}{opcode}")).await
    }

    /// Perform a named action from the catalog.
    pub async fn perform(&self, action: Action) -> Result<()> {
        tracing::debug!(%action, "performing action");
        self.send(action.opcode()).await
    }

    /// Ask the device to re-report every property.
    ///
    /// Results arrive asynchronously on the response stream; this does not
    /// wait for them.
    pub async fn refresh_properties(&self) -> Result<()> {
        self.raw_send(REFRESH_PROPERTIES).await
    }

    /// Synchronized copy of the current property snapshot.
    pub fn properties(&self) -> PropertySnapshot {
        self.inner.engine.read().snapshot().clone()
    }

    /// Subscribe to change notifications.
    ///
    /// Each subscriber gets its own buffered receiver; a subscriber that
    /// falls more than [`EVENT_BUFFER`] events behind skips the oldest.
    pub fn subscribe(&self) -> broadcast::Receiver<ProjectorEvent> {
        self.inner.emitter.subscribe()
    }

    /// Whether the client currently holds a live connection.
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_port() {
        let projector = Projector::new("192.168.1.50".parse().unwrap());
        assert_eq!(projector.inner.addr.port(), DEFAULT_PORT);
        assert!(!projector.is_connected());
    }

    #[tokio::test]
    async fn test_raw_send_without_connection() {
        let projector = Projector::with_addr("127.0.0.1:41794".parse().unwrap());
        let err = projector.raw_send("0400").await.unwrap_err();
        assert!(matches!(err, ProjectorError::NotConnected));
    }

    #[tokio::test]
    async fn test_raw_send_rejects_bad_hex_before_connection_check() {
        let projector = Projector::with_addr("127.0.0.1:41794".parse().unwrap());
        let err = projector.raw_send("not hex").await.unwrap_err();
        assert!(matches!(err, ProjectorError::Encoding(_)));
    }

    #[tokio::test]
    async fn test_properties_starts_at_default() {
        let projector = Projector::with_addr("127.0.0.1:41794".parse().unwrap());
        assert_eq!(projector.properties(), PropertySnapshot::default());
    }
}
