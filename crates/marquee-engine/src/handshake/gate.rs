use tokio::sync::mpsc;

use super::{HostAdapter, HostEventKind, HostNotification, HostState};

/// One-shot handshake progress.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandshakeState {
    Pending,
    Complete,
}

/// One-shot startup barrier against the host container.
///
/// [`HandshakeGate::wait`] resolves exactly once: immediately when no adapter
/// is present, when the host already reports a non-loading state, or when
/// querying it fails; otherwise after the host's ready notification. After
/// the ready path it takes the session subscriptions (orientation changes,
/// and viewability until the creative is first viewable), all best-effort.
pub struct HandshakeGate {
    host: Option<Box<dyn HostAdapter>>,
    notifications: mpsc::UnboundedReceiver<HostNotification>,
    state: HandshakeState,
    awaiting_viewable: bool,
}

impl HandshakeGate {
    /// Gate for a context without any host capability; `wait` is immediate.
    pub fn without_host() -> Self {
        let (_tx, rx) = mpsc::unbounded_channel();
        Self {
            host: None,
            notifications: rx,
            state: HandshakeState::Pending,
            awaiting_viewable: false,
        }
    }

    /// Gate over a host adapter and the channel its notifications arrive on.
    pub fn with_host(
        adapter: Box<dyn HostAdapter>,
        notifications: mpsc::UnboundedReceiver<HostNotification>,
    ) -> Self {
        Self {
            host: Some(adapter),
            notifications,
            state: HandshakeState::Pending,
            awaiting_viewable: false,
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Resolves the handshake. Idempotent: once complete, returns
    /// immediately.
    pub async fn wait(&mut self) {
        if self.state == HandshakeState::Complete {
            return;
        }

        let Some(host) = self.host.as_mut() else {
            self.complete("no host capability");
            return;
        };

        match host.state() {
            Ok(HostState::Loading) => {
                if host.subscribe(HostEventKind::Ready).is_err() {
                    self.complete("host refused ready subscription");
                    return;
                }
                loop {
                    match self.notifications.recv().await {
                        Some(HostNotification::Ready) => break,
                        Some(other) => {
                            log::debug!("pre-ready host notification ignored: {other:?}");
                        }
                        // Channel gone: same policy as a malfunctioning host.
                        None => break,
                    }
                }
                self.on_ready();
            }
            Ok(HostState::Ready) => self.complete("host already ready"),
            Err(err) => {
                // A throwing host must not hang startup; treat as absent.
                self.complete("host state query failed");
                log::warn!("host state query failed: {err:#}");
            }
        }
    }

    /// Drains one post-handshake notification, handling the one-shot
    /// viewability gate. Pends forever when no host (or channel) remains, so
    /// it parks cleanly inside a `select!` loop.
    pub async fn next_notification(&mut self) -> HostNotification {
        loop {
            if self.host.is_none() {
                return std::future::pending().await;
            }
            match self.notifications.recv().await {
                Some(HostNotification::ViewableChange(true)) if self.awaiting_viewable => {
                    // First time viewable: the visibility gate is spent and
                    // re-hiding is intentionally not re-subscribed.
                    self.awaiting_viewable = false;
                    if let Some(host) = self.host.as_mut() {
                        let _ = host.unsubscribe(HostEventKind::ViewableChange);
                    }
                    return HostNotification::ViewableChange(true);
                }
                Some(notification) => return notification,
                None => {
                    self.host = None;
                }
            }
        }
    }

    /// Session subscriptions after the ready notification; every host error
    /// here is swallowed.
    fn on_ready(&mut self) {
        if let Some(host) = self.host.as_mut() {
            let _ = host.unsubscribe(HostEventKind::Ready);
            let _ = host.subscribe(HostEventKind::OrientationChange);

            if let Ok(false) = host.is_viewable() {
                if host.subscribe(HostEventKind::ViewableChange).is_ok() {
                    self.awaiting_viewable = true;
                }
            }
        }
        self.complete("host ready notification");
    }

    fn complete(&mut self, reason: &str) {
        self.state = HandshakeState::Complete;
        log::debug!("handshake complete: {reason}");
    }
}
