//! Beta distribution on `[0, 1]`.
//!
//! The density is infinite at an end of the support whose shape parameter
//! is below one. Those rows are resolved before the kernel is called and
//! reach past the end they name: any `x >= 1` with `b < 1`, or `x <= 0`
//! with `a < 1`, reads as `+Inf`. Only `±Inf` itself is zero.

use sf_core::operation::{Interval, Operation, Param, Range, SpecialCase};
use sf_core::Real;
use sf_math::distributions::BetaDistribution as Beta;

use crate::limits::{is_infinite, pos_inf, zero, Limits};
use crate::moments::Thresholds;

const A: Param = Param::new("a", Interval::POSITIVE_FINITE);
const B: Param = Param::new("b", Interval::POSITIVE_FINITE);

const AT_X: [Param; 3] = [Param::any("x"), A, B];
const AT_P: [Param; 3] = [Param::new("p", Interval::UNIT), A, B];
const AT_Q: [Param; 3] = [Param::new("q", Interval::UNIT), A, B];

fn upper_pole(p: &[Real; 3]) -> bool {
    p[0] >= 1.0 && p[2] < 1.0
}

fn lower_pole(p: &[Real; 3]) -> bool {
    p[0] <= 0.0 && p[1] < 1.0
}

const PDF_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("x == ±Inf", is_infinite::<3, 0>, zero::<3>),
    SpecialCase::new("x >= 1, b < 1", upper_pole, pos_inf::<3>),
    SpecialCase::new("x <= 0, a < 1", lower_pole, pos_inf::<3>),
];

/// Descriptor of [`beta_pdf`].
pub static BETA_PDF: Operation<3> = Operation::new("beta_pdf", AT_X).with_cases(PDF_CASES);
/// Descriptor of [`beta_cdf`].
pub static BETA_CDF: Operation<3> = Operation::new("beta_cdf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`beta_sf`].
pub static BETA_SF: Operation<3> = Operation::new("beta_sf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`beta_ppf`].
pub static BETA_PPF: Operation<3> = Operation::new("beta_ppf", AT_P)
    .quantile()
    .with_range(Range::UnitInterval)
    .with_cases(Limits::<3, 0>::PPF_UNIT);
/// Descriptor of [`beta_isf`].
pub static BETA_ISF: Operation<3> = Operation::new("beta_isf", AT_Q)
    .quantile()
    .with_range(Range::UnitInterval)
    .with_cases(Limits::<3, 0>::ISF_UNIT);

/// Density at `x`; zero outside `[0, 1]`.
pub fn beta_pdf(x: Real, a: Real, b: Real) -> Real {
    BETA_PDF.evaluate([x, a, b], |&[x, a, b]| Beta::new(a, b)?.pdf(x))
}

/// `I_x(a, b)`.
pub fn beta_cdf(x: Real, a: Real, b: Real) -> Real {
    BETA_CDF.evaluate([x, a, b], |&[x, a, b]| Beta::new(a, b)?.cdf(x))
}

/// `1 - I_x(a, b)`.
pub fn beta_sf(x: Real, a: Real, b: Real) -> Real {
    BETA_SF.evaluate([x, a, b], |&[x, a, b]| Beta::new(a, b)?.sf(x))
}

/// Quantile of `p`.
pub fn beta_ppf(p: Real, a: Real, b: Real) -> Real {
    BETA_PPF.evaluate([p, a, b], |&[p, a, b]| Beta::new(a, b)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn beta_isf(q: Real, a: Real, b: Real) -> Real {
    BETA_ISF.evaluate([q, a, b], |&[q, a, b]| Beta::new(a, b)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::NONE;

/// Descriptor of [`beta_mean`].
pub static BETA_MEAN: Operation<2> = Operation::new("beta_mean", [A, B]).with_cases(MOMENTS.mean);
/// Descriptor of [`beta_variance`].
pub static BETA_VARIANCE: Operation<2> = Operation::new("beta_variance", [A, B]).with_cases(MOMENTS.variance);
/// Descriptor of [`beta_skewness`].
pub static BETA_SKEWNESS: Operation<2> = Operation::new("beta_skewness", [A, B]).with_cases(MOMENTS.skewness);
/// Descriptor of [`beta_kurtosis_excess`].
pub static BETA_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("beta_kurtosis_excess", [A, B]).with_cases(MOMENTS.kurtosis_excess);

/// `a / (a + b)`.
pub fn beta_mean(a: Real, b: Real) -> Real {
    BETA_MEAN.evaluate([a, b], |&[a, b]| Ok(Beta::new(a, b)?.mean()))
}

/// Variance.
pub fn beta_variance(a: Real, b: Real) -> Real {
    BETA_VARIANCE.evaluate([a, b], |&[a, b]| Ok(Beta::new(a, b)?.variance()))
}

/// Skewness.
pub fn beta_skewness(a: Real, b: Real) -> Real {
    BETA_SKEWNESS.evaluate([a, b], |&[a, b]| Ok(Beta::new(a, b)?.skewness()))
}

/// Excess kurtosis.
pub fn beta_kurtosis_excess(a: Real, b: Real) -> Real {
    BETA_KURTOSIS_EXCESS.evaluate([a, b], |&[a, b]| Ok(Beta::new(a, b)?.kurtosis_excess()))
}
