//! Logging utilities.
//!
//! Centralizes logger initialization. Engine code logs through the `log`
//! facade; the backend here is `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
