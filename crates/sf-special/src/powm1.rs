//! `x^y - 1`.
//!
//! Overflow is the one failure that is not recoverable here: [`powm1`]
//! reports it and then returns `Err`. [`powm1_saturating`] returns the
//! limit instead, chosen with the sign conventions of `pow` at infinity.

use sf_core::operation::{Operation, Param, Resolution, SpecialCase};
use sf_core::{ErrorKind, Real, Result};
use sf_math::special;

/// Limiting cases of `powm1`.
pub const POWM1_CASES: &[SpecialCase<2>] = &[
    SpecialCase::new("y == 0 or x == 1", |p| p[1] == 0.0 || p[0] == 1.0, |_| Resolution::Value(0.0)),
    SpecialCase::new("x == 0 and y < 0", |p| p[0] == 0.0 && p[1] < 0.0, |_| {
        Resolution::Error(ErrorKind::Domain, Real::INFINITY)
    }),
    SpecialCase::new("x == 0 and y > 0", |p| p[0] == 0.0 && p[1] > 0.0, |_| Resolution::Value(-1.0)),
    SpecialCase::new("x < 0 and y not an integer", |p| p[0] < 0.0 && p[1].trunc() != p[1], |_| {
        Resolution::Error(ErrorKind::Domain, Real::NAN)
    }),
];

/// Value returned after an overflow, following `pow(x, y)` as the result
/// leaves the representable range.
///
/// An exponent counts as even when `y mod 2 == 0`; infinite exponents are
/// therefore odd.
pub fn overflow_limit(params: &[Real; 2]) -> Real {
    let [x, y] = *params;
    let even = y % 2.0 == 0.0;
    if x > 0.0 {
        match y {
            y if y < 0.0 => 0.0,
            y if y == 0.0 => 1.0,
            _ => Real::INFINITY,
        }
    } else if x == 0.0 {
        Real::INFINITY
    } else {
        match y {
            y if y < 0.0 && even => 0.0,
            y if y < 0.0 => -0.0,
            y if y == 0.0 => 1.0,
            _ if even => Real::INFINITY,
            _ => Real::NEG_INFINITY,
        }
    }
}

/// Descriptor shared by [`powm1`] and [`powm1_saturating`].
pub static POWM1: Operation<2> = Operation::new("powm1", [Param::any("x"), Param::any("y")])
    .with_cases(POWM1_CASES)
    .with_overflow(overflow_limit)
    .escalating(&[ErrorKind::Overflow]);

/// `x^y - 1`, accurate when the result is near zero.
///
/// # Errors
/// [`Error::Raised`](sf_core::Error::Raised) with kind `Overflow` when the
/// result is too large to represent. The overflow is reported to the sink
/// before the error is returned.
pub fn powm1(x: Real, y: Real) -> Result<Real> {
    POWM1.try_evaluate([x, y], |&[x, y]| special::powm1(x, y))
}

/// `x^y - 1`, with overflow reported and the [`overflow_limit`] returned.
pub fn powm1_saturating(x: Real, y: Real) -> Real {
    POWM1.evaluate([x, y], |&[x, y]| special::powm1(x, y))
}
