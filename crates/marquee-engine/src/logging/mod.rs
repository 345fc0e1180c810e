//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! Asset failures surface only as diagnostics, so a working logger is the
//! only way to see why a name is missing from a cache.

mod init;

pub use init::{init_logging, LoggingConfig};
