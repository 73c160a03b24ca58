//! Logging utilities.
//!
//! Centralizes logger initialization. Widget and path code logs through the
//! standard `log` facade only; the `env_logger` backend is wired up here.

mod init;

pub use init::{LoggingConfig, init_logging};
