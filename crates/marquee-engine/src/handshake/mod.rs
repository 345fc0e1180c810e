//! Host-container handshake.
//!
//! The ad container (an MRAID-like capability) is optional and untrusted:
//! it may be missing, report readiness immediately, or deliver it later as a
//! notification. The gate resolves exactly once in all three cases, and any
//! host malfunction counts as "absent" — startup is never allowed to hang on
//! a broken integration.

mod gate;
mod host;

pub use gate::{HandshakeGate, HandshakeState};
pub use host::{HostAdapter, HostEventKind, HostNotification, HostState};
