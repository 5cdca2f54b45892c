//! Logging utilities.
//!
//! Centralizes logger initialization for binaries driving the shading
//! stage. The library itself only uses the `log` facade, and only for
//! setup-level diagnostics — the per-fragment path never logs.

mod init;

pub use init::{init_logging, LoggingConfig};
