//! # Arithmetic Core
//!
//! The twelve operations, each a pure function of its operands.
//!
//! Every operation follows the same contract:
//!
//! 1. Validate operands. A failure becomes [`CalculationError::InvalidOperand`].
//! 2. Check operation-specific preconditions (zero divisor, negative root, ...).
//! 3. Compute.
//! 4. For add, subtract, multiply, divide and power, check the result against
//!    the safe-integer interval. Factorial checks finiteness only.
//!
//! Modulo, absolute, ceiling, floor and round skip step 4 because their
//! result is bounded by an operand that already passed validation.
//!
//! # Examples
//!
//! ```
//! use safe_calc::domain::services::arithmetic;
//! use safe_calc::domain::errors::ErrorKind;
//!
//! assert_eq!(arithmetic::modulo(-7.0, 3.0).unwrap(), -1.0);
//! assert_eq!(arithmetic::round(-3.5).unwrap(), -3.0);
//!
//! let err = arithmetic::factorial(5.5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidOperand);
//! ```

use crate::domain::errors::{CalculationError, CalculationResult};
use crate::domain::validation::{
    self, OPERAND, ValidationIssue, ValidationVerdict, validate_operands, validate_result_range,
};
use crate::domain::value_objects::boundary::FACTORIAL_MAX_INPUT;
use crate::domain::value_objects::operation::Operation;

/// Adds two operands.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a NaN or infinite operand;
/// [`CalculationError::Overflow`], [`CalculationError::Underflow`] or
/// [`CalculationError::InvalidResult`] when the sum leaves the safe interval.
pub fn add(a: f64, b: f64) -> CalculationResult<f64> {
    let (a, b) = binary_operands(Operation::Add, a, b)?;
    checked_result(Operation::Add, a + b)
}

/// Subtracts `b` from `a`.
///
/// # Errors
///
/// Same as [`add`].
pub fn subtract(a: f64, b: f64) -> CalculationResult<f64> {
    let (a, b) = binary_operands(Operation::Subtract, a, b)?;
    checked_result(Operation::Subtract, a - b)
}

/// Multiplies two operands.
///
/// # Errors
///
/// Same as [`add`].
pub fn multiply(a: f64, b: f64) -> CalculationResult<f64> {
    let (a, b) = binary_operands(Operation::Multiply, a, b)?;
    checked_result(Operation::Multiply, a * b)
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// [`CalculationError::DivisionByZero`] if `b` is zero, otherwise the same
/// as [`add`].
pub fn divide(a: f64, b: f64) -> CalculationResult<f64> {
    let (a, b) = binary_operands(Operation::Divide, a, b)?;
    if b == 0.0 {
        return Err(CalculationError::DivisionByZero { dividend: a });
    }
    checked_result(Operation::Divide, a / b)
}

/// Raises `base` to `exponent`.
///
/// # Errors
///
/// [`CalculationError::InvalidResult`] when the result is NaN (negative base
/// with a fractional exponent) or infinite, otherwise the same as [`add`].
pub fn power(base: f64, exponent: f64) -> CalculationResult<f64> {
    let (base, exponent) = binary_operands(Operation::Power, base, exponent)?;
    checked_result(Operation::Power, base.powf(exponent))
}

/// Truncating remainder of `a / b`. The result takes the sign of `a`.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a bad operand;
/// [`CalculationError::ModuloByZero`] if `b` is zero.
pub fn modulo(a: f64, b: f64) -> CalculationResult<f64> {
    let (a, b) = binary_operands(Operation::Modulo, a, b)?;
    if b == 0.0 {
        return Err(CalculationError::ModuloByZero { dividend: a });
    }
    Ok(a % b)
}

/// Square root.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a bad operand;
/// [`CalculationError::InvalidOperation`] if the operand is negative.
pub fn sqrt(x: f64) -> CalculationResult<f64> {
    let x = unary_operand(Operation::Sqrt, x)?;
    if x < 0.0 {
        return Err(CalculationError::invalid_operation(
            Operation::Sqrt,
            x,
            format!("Cannot calculate square root of negative number {x}"),
        ));
    }
    Ok(x.sqrt())
}

/// `x!` computed by iterated multiplication.
///
/// Negative input is checked before integrality, and integrality before the
/// upper limit.
///
/// # Errors
///
/// - [`CalculationError::InvalidOperation`] if `x` is negative or above
///   [`FACTORIAL_MAX_INPUT`]
/// - [`CalculationError::InvalidOperand`] if `x` is not an integer
/// - [`CalculationError::Overflow`] if the product stops being finite
pub fn factorial(x: f64) -> CalculationResult<f64> {
    let op = Operation::Factorial;
    let n = unary_operand(op, x)?;
    if n < 0.0 {
        return Err(CalculationError::invalid_operation(
            op,
            n,
            "Factorial is not defined for negative numbers",
        ));
    }
    let n = validation::is_integer(n, OPERAND)
        .into_result()
        .map_err(|failure| CalculationError::invalid_operand(op, failure.reason()))?;
    if n > FACTORIAL_MAX_INPUT {
        return Err(CalculationError::invalid_operation(
            op,
            n,
            format!("Factorial input {n} exceeds maximum of {FACTORIAL_MAX_INPUT}"),
        ));
    }

    let mut product = 1.0_f64;
    let mut factor = 2.0_f64;
    while factor <= n {
        product *= factor;
        if !product.is_finite() {
            return Err(CalculationError::overflow(
                op,
                product,
                format!("Factorial of {n} is too large to represent"),
            ));
        }
        factor += 1.0;
    }
    Ok(product)
}

/// Absolute value.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a NaN or infinite operand.
pub fn absolute(x: f64) -> CalculationResult<f64> {
    unary_operand(Operation::Absolute, x).map(f64::abs)
}

/// Rounds towards positive infinity.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a NaN or infinite operand.
pub fn ceiling(x: f64) -> CalculationResult<f64> {
    unary_operand(Operation::Ceiling, x).map(f64::ceil)
}

/// Rounds towards negative infinity.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a NaN or infinite operand.
pub fn floor(x: f64) -> CalculationResult<f64> {
    unary_operand(Operation::Floor, x).map(f64::floor)
}

/// Rounds to the nearest integer; exact halves go towards positive infinity.
///
/// `round(2.5) == 3`, `round(-2.5) == -2`, and `round(-0.4) == -0`.
///
/// # Errors
///
/// [`CalculationError::InvalidOperand`] for a NaN or infinite operand.
pub fn round(x: f64) -> CalculationResult<f64> {
    unary_operand(Operation::Round, x).map(round_half_up)
}

fn round_half_up(x: f64) -> f64 {
    let lower = x.floor();
    let rounded = if x - lower >= 0.5 { lower + 1.0 } else { lower };
    // keep the sign of zero for inputs in [-0.5, -0]
    if rounded == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

fn binary_operands(op: Operation, a: f64, b: f64) -> CalculationResult<(f64, f64)> {
    validate_operands(a, b)
        .map_err(|failure| CalculationError::invalid_operand(op, failure.reason()))
}

fn unary_operand(op: Operation, x: f64) -> CalculationResult<f64> {
    validation::validate_number(x, OPERAND)
        .into_result()
        .map_err(|failure| CalculationError::invalid_operand(op, failure.reason()))
}

fn checked_result(op: Operation, result: f64) -> CalculationResult<f64> {
    match validate_result_range(result, op) {
        ValidationVerdict::Valid(value) => Ok(value),
        ValidationVerdict::Invalid(failure) => Err(match failure.issue() {
            ValidationIssue::Overflow => CalculationError::overflow(op, result, failure.reason()),
            ValidationIssue::Underflow => {
                CalculationError::underflow(op, result, failure.reason())
            }
            _ => CalculationError::invalid_result(op, result, failure.reason()),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::domain::value_objects::boundary::{SAFE_MAX, SAFE_MIN};
    use crate::domain::value_objects::operation::{Arity, Operands};
    use proptest::prelude::*;

    fn kind(result: CalculationResult<f64>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    mod binary {
        use super::*;

        #[test]
        fn basic_results() {
            assert_eq!(add(2.0, 3.0).unwrap(), 5.0);
            assert_eq!(subtract(2.0, 3.0).unwrap(), -1.0);
            assert_eq!(multiply(-4.0, 2.5).unwrap(), -10.0);
            assert_eq!(divide(1.0, 4.0).unwrap(), 0.25);
            assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        }

        #[test]
        fn add_past_safe_max_overflows() {
            let err = add(SAFE_MAX, 1.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Overflow);
            assert_eq!(err.result(), Some(SAFE_MAX + 1.0));
            assert_eq!(add(SAFE_MAX - 1.0, 1.0).unwrap(), SAFE_MAX);
        }

        #[test]
        fn subtract_past_safe_min_underflows() {
            assert_eq!(kind(subtract(SAFE_MIN, 1.0)), ErrorKind::Underflow);
            assert_eq!(kind(multiply(SAFE_MIN, 2.0)), ErrorKind::Underflow);
        }

        #[test]
        fn infinite_product_is_invalid_result() {
            let err = multiply(1e300, 1e300).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidResult);
            assert!(err.reason().contains("+Infinity"));
        }

        #[test]
        fn divide_by_zero() {
            assert_eq!(kind(divide(5.0, 0.0)), ErrorKind::DivisionByZero);
            assert_eq!(kind(divide(0.0, -0.0)), ErrorKind::DivisionByZero);
        }

        #[test]
        fn tiny_divisor_is_checked_for_range() {
            assert_eq!(kind(divide(1.0, 1e-300)), ErrorKind::Overflow);
            assert_eq!(kind(divide(-1.0, 1e-300)), ErrorKind::Underflow);
        }

        #[test]
        fn power_of_negative_base_with_fraction_is_nan() {
            let err = power(-4.0, 0.5).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidResult);
            assert!(err.reason().contains("not a number"));
        }

        #[test]
        fn huge_power_is_rejected() {
            let err = power(10.0, 1000.0).unwrap_err();
            assert!(err.is_result_error());
            assert_eq!(power(2.0, 52.0).unwrap(), 4_503_599_627_370_496.0);
            assert_eq!(kind(power(2.0, 53.0)), ErrorKind::Overflow);
        }
    }

    mod modulo_sign {
        use super::*;

        #[test]
        fn follows_dividend() {
            assert_eq!(modulo(-7.0, 3.0).unwrap(), -1.0);
            assert_eq!(modulo(7.0, -3.0).unwrap(), 1.0);
            assert_eq!(modulo(-7.0, -3.0).unwrap(), -1.0);
            assert_eq!(modulo(7.5, 2.0).unwrap(), 1.5);
        }

        #[test]
        fn by_zero() {
            let err = modulo(7.0, 0.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ModuloByZero);
            assert_eq!(err.operation(), Operation::Modulo);
        }
    }

    mod operand_validation {
        use super::*;

        #[test]
        fn every_binary_operation_names_the_bad_operand() {
            let ops: [fn(f64, f64) -> CalculationResult<f64>; 6] =
                [add, subtract, multiply, divide, power, modulo];
            for op in ops {
                for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                    let first = op(bad, 1.0).unwrap_err();
                    assert_eq!(first.kind(), ErrorKind::InvalidOperand);
                    assert!(first.reason().starts_with("First operand"));

                    let second = op(1.0, bad).unwrap_err();
                    assert_eq!(second.kind(), ErrorKind::InvalidOperand);
                    assert!(second.reason().starts_with("Second operand"));
                }
            }
        }

        #[test]
        fn every_unary_operation_rejects_non_finite() {
            let ops: [fn(f64) -> CalculationResult<f64>; 6] =
                [sqrt, factorial, absolute, ceiling, floor, round];
            for op in ops {
                for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                    let err = op(bad).unwrap_err();
                    assert_eq!(err.kind(), ErrorKind::InvalidOperand);
                    assert!(err.reason().starts_with("Operand"));
                }
            }
        }

        #[test]
        fn validation_precedes_zero_divisor_check() {
            assert_eq!(kind(divide(f64::NAN, 0.0)), ErrorKind::InvalidOperand);
            assert_eq!(kind(modulo(f64::INFINITY, 0.0)), ErrorKind::InvalidOperand);
        }
    }

    mod unary {
        use super::*;

        #[test]
        fn sqrt_domain() {
            assert_eq!(sqrt(0.0).unwrap(), 0.0);
            assert_eq!(sqrt(4.0).unwrap(), 2.0);
            let err = sqrt(-1.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidOperation);
            assert_eq!(err.operand(), Some(-1.0));
        }

        #[test]
        fn factorial_boundaries() {
            assert_eq!(factorial(0.0).unwrap(), 1.0);
            assert_eq!(factorial(5.0).unwrap(), 120.0);
            assert!(factorial(170.0).unwrap().is_finite());
            assert_eq!(kind(factorial(171.0)), ErrorKind::InvalidOperation);
            assert_eq!(kind(factorial(-1.0)), ErrorKind::InvalidOperation);
            assert_eq!(kind(factorial(5.5)), ErrorKind::InvalidOperand);
        }

        #[test]
        fn factorial_negative_check_comes_first() {
            assert_eq!(kind(factorial(-1.5)), ErrorKind::InvalidOperation);
        }

        #[test]
        fn factorial_fraction_check_precedes_limit() {
            assert_eq!(kind(factorial(170.5)), ErrorKind::InvalidOperand);
        }

        #[test]
        fn rounding_laws() {
            assert_eq!(round(3.5).unwrap(), 4.0);
            assert_eq!(round(-3.5).unwrap(), -3.0);
            assert_eq!(round(0.5).unwrap(), 1.0);
            assert_eq!(round(2.4).unwrap(), 2.0);
            assert_eq!(round(0.499_999_999_999_999_94).unwrap(), 0.0);
            assert_eq!(ceiling(-3.2).unwrap(), -3.0);
            assert_eq!(floor(-3.1).unwrap(), -4.0);
            assert_eq!(absolute(-2.5).unwrap(), 2.5);
        }

        #[test]
        fn round_keeps_negative_zero() {
            let zero = round(-0.5).unwrap();
            assert_eq!(zero, 0.0);
            assert!(zero.is_sign_negative());
            assert!(round(-0.2).unwrap().is_sign_negative());
            assert!(round(0.2).unwrap().is_sign_positive());
        }

        #[test]
        fn round_leaves_large_integers_alone() {
            assert_eq!(round(SAFE_MAX).unwrap(), SAFE_MAX);
            assert_eq!(round(1e300).unwrap(), 1e300);
        }
    }

    proptest! {
        #[test]
        fn add_is_exact_inside_safe_range(a in -1e15f64..1e15, b in -1e15f64..1e15) {
            prop_assert_eq!(add(a, b).unwrap(), a + b);
        }

        #[test]
        fn modulo_takes_sign_of_dividend(a in -1e6f64..1e6, b in 1e-3f64..1e3) {
            let r = modulo(a, b).unwrap();
            prop_assert!(r == 0.0 || r.signum() == a.signum());
            prop_assert!(r.abs() < b);
        }

        #[test]
        fn operations_are_deterministic(a in -1e8f64..1e8, b in -1e8f64..1e8) {
            for op in Operation::ALL {
                let operands = match op.arity() {
                    Arity::Binary => Operands::binary(a, b),
                    Arity::Unary => Operands::unary(a),
                };
                let first = op.apply(operands);
                let second = op.apply(operands);
                match (first, second) {
                    (Ok(x), Ok(y)) => prop_assert_eq!(x.to_bits(), y.to_bits()),
                    (Err(x), Err(y)) => prop_assert_eq!(x.kind(), y.kind()),
                    _ => prop_assert!(false, "{op} changed outcome between calls"),
                }
            }
        }
    }
}
