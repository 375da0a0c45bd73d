//! Logging utilities.
//!
//! Two independent sinks:
//! - `init_logging` installs `env_logger` behind the standard `log` facade for
//!   diagnostics emitted by the crates themselves.
//! - `BufferedLog` is an owned, explicitly started session log that buffers
//!   timestamped records and flushes them to the console and/or a file.

mod buffer;
mod init;

pub use buffer::{BufferedLog, SinkConfig};
pub use init::{init_logging, LoggingConfig};
