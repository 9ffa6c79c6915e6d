//! The four scalar operations.
//!
//! Pure functions with no shared state; out-of-domain inputs come back as
//! [`Outcome`] variants rather than errors.

use crate::value::Outcome;

/// Square root over the non-negative reals.
pub fn square_root(x: f64) -> Outcome {
    if x < 0.0 {
        return Outcome::DomainError;
    }
    Outcome::Real(x.sqrt())
}

/// Factorial on a 64-bit signed accumulator.
///
/// Negative input reports `InvalidArgument`. The product runs left to right
/// with wrapping multiplication; inputs past 20 wrap silently instead of
/// widening.
pub fn factorial(n: i64) -> Outcome {
    if n < 0 {
        return Outcome::InvalidArgument;
    }
    let mut product: i64 = 1;
    for factor in 2..=n {
        product = product.wrapping_mul(factor);
    }
    Outcome::Integer(product)
}

/// Natural logarithm over the positive reals.
pub fn natural_log(x: f64) -> Outcome {
    if x <= 0.0 {
        return Outcome::DomainError;
    }
    Outcome::Real(x.ln())
}

/// Raises `base` to `exponent` with `f64::powf` semantics, including its
/// handling of `0^0`, negative bases, and infinities.
pub fn power(base: f64, exponent: f64) -> Outcome {
    Outcome::Real(base.powf(exponent))
}
