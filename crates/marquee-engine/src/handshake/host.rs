use anyhow::Result;

/// Host readiness as reported by `state()`.
///
/// Containers report richer states (expanded, resized, hidden); for the
/// handshake only "still loading" vs "anything else" matters.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HostState {
    Loading,
    Ready,
}

/// Notification kinds a host can be subscribed to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HostEventKind {
    Ready,
    OrientationChange,
    ViewableChange,
}

/// Notification payloads delivered over the adapter's channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HostNotification {
    Ready,
    OrientationChange,
    ViewableChange(bool),
}

/// Boundary to the optional host ad container.
///
/// Implementations bridge whatever object the execution context exposes.
/// Every method may fail; callers treat failures as "capability absent" (for
/// `state`) or swallow them (for subscriptions) — no host error is fatal.
pub trait HostAdapter {
    fn state(&self) -> Result<HostState>;

    fn is_viewable(&self) -> Result<bool>;

    /// Requests delivery of `kind` notifications on the adapter's channel.
    fn subscribe(&mut self, kind: HostEventKind) -> Result<()>;

    fn unsubscribe(&mut self, kind: HostEventKind) -> Result<()>;
}
