//! Marquee engine crate.
//!
//! This crate owns the lifecycle plumbing for interactive ad creatives:
//! fan-out asset loading into named caches, a throttled render loop shared by
//! the registered backends, viewport sizing under resize/orientation events,
//! and the one-shot host-container handshake that gates startup.
//!
//! Rendering engines, the host ad container, and input widgets are external
//! collaborators; they plug in through the traits in [`render`], [`handshake`],
//! [`assets`], and [`input`].

pub mod assets;
pub mod core;
pub mod events;
pub mod handshake;
pub mod input;
pub mod render;
pub mod time;
pub mod viewport;

pub mod locale;
pub mod logging;
