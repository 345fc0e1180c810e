//! Lifecycle orchestration.
//!
//! Owns the startup sequence and the cooperative run loop that ties the
//! subsystems together. The ordering in [`Orchestrator::init`] is
//! load-bearing: surfaces exist before sizing, sizing happens before the
//! first frame, and no frame is drawn before the host handshake completes.

mod orchestrator;

pub use orchestrator::{Orchestrator, OrchestratorConfig, OrchestratorHandle, ResizeNotifier};
