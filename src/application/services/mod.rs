//! # Application Services
//!
//! - [`calculator`]: raw and decorated entry points for every operation
//! - [`commands`]: text-in entry points for front ends
//! - [`formatter`]: builds calculation records
//! - [`diagnostics`]: injectable observation hook

pub mod calculator;
pub mod commands;
pub mod diagnostics;
pub mod formatter;

pub use calculator::Calculator;
pub use commands::Evaluation;
pub use diagnostics::{DiagnosticSink, NoopSink};
pub use formatter::{Clock, IdGenerator, RandomIdGenerator, ResultFormatter, SystemClock};
