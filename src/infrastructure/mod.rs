//! # Infrastructure Layer
//!
//! Process-level concerns: settings loading and log output.
//!
//! - [`config`]: layered [`Settings`]
//! - [`logging`]: subscriber setup and [`TracingSink`]

pub mod config;
pub mod logging;

pub use config::{LoggingSettings, OutputSettings, Settings};
pub use logging::TracingSink;
