//! # Domain Services
//!
//! - [`arithmetic`]: the twelve checked operations

pub mod arithmetic;
