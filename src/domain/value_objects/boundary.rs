//! # Boundary Policy
//!
//! Numeric constants that define what counts as a "safe" value.
//!
//! The safe interval is the range of integers that an IEEE-754 double can
//! represent exactly. Results outside it are rejected as overflow or
//! underflow even though they are finite.
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::value_objects::boundary::{SAFE_MAX, SAFE_MIN, is_within_safe_range};
//!
//! assert!(is_within_safe_range(SAFE_MAX));
//! assert!(!is_within_safe_range(SAFE_MIN - 1.0));
//! ```

/// Largest integer `n` such that `n` and `n + 1` are both exactly representable
/// as an `f64` (`2^53 - 1`).
pub const SAFE_MAX: f64 = 9_007_199_254_740_991.0;

/// Negation of [`SAFE_MAX`].
pub const SAFE_MIN: f64 = -SAFE_MAX;

/// Largest input whose factorial is still a finite `f64`.
pub const FACTORIAL_MAX_INPUT: f64 = 170.0;

/// Returns true if `value` lies in `[SAFE_MIN, SAFE_MAX]`.
///
/// NaN is never within range.
#[inline]
#[must_use]
pub fn is_within_safe_range(value: f64) -> bool {
    (SAFE_MIN..=SAFE_MAX).contains(&value)
}
