//! Inverse error function.

use sf_core::operation::{Interval, Operation, Param, Resolution, SpecialCase};
use sf_core::Real;
use sf_math::special::erf_inv;

/// Limiting cases of `erfinv`: the poles at `±1`.
pub const ERFINV_CASES: &[SpecialCase<1>] = &[
    SpecialCase::new("x == -1", |p| p[0] == -1.0, |_| Resolution::Value(Real::NEG_INFINITY)),
    SpecialCase::new("x == 1", |p| p[0] == 1.0, |_| Resolution::Value(Real::INFINITY)),
];

/// Descriptor of [`erfinv`].
pub static ERFINV: Operation<1> =
    Operation::new("erfinv", [Param::new("x", Interval::closed(-1.0, 1.0))]).with_cases(ERFINV_CASES);

/// `y` such that `erf(y) == x`, for `x ∈ [-1, 1]`.
pub fn erfinv(x: Real) -> Real {
    ERFINV.evaluate([x], |&[x]| erf_inv(x))
}
