//! Small helpers for a device that talks to its host over a serial line:
//! bounded `printf`-style output and URL percent-encoding.

pub mod commands;
pub mod config;
pub mod error;
pub mod serial;
pub mod utils;

pub use config::{TruncationPolicy, WriterConfig};
pub use error::{ConfigError, DecodeError, SerialError};
