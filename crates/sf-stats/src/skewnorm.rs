//! Skew-normal distribution.

use sf_core::operation::{Interval, Operation, Param};
use sf_core::Real;
use sf_math::distributions::SkewNormalDistribution as SkewNormal;

use crate::limits::Limits;
use crate::moments::Thresholds;

const LOC: Param = Param::new("loc", Interval::FINITE);
const SCALE: Param = Param::new("scale", Interval::POSITIVE_FINITE);
const SHAPE: Param = Param::new("shape", Interval::FINITE);

const AT_X: [Param; 4] = [Param::any("x"), LOC, SCALE, SHAPE];
const AT_P: [Param; 4] = [Param::new("p", Interval::UNIT), LOC, SCALE, SHAPE];
const AT_Q: [Param; 4] = [Param::new("q", Interval::UNIT), LOC, SCALE, SHAPE];
const FAMILY: [Param; 3] = [LOC, SCALE, SHAPE];

/// Descriptor of [`skewnorm_pdf`].
pub static SKEWNORM_PDF: Operation<4> = Operation::new("skewnorm_pdf", AT_X).with_cases(Limits::<4, 0>::DENSITY);
/// Descriptor of [`skewnorm_cdf`].
pub static SKEWNORM_CDF: Operation<4> = Operation::new("skewnorm_cdf", AT_X)
    .probability()
    .with_cases(Limits::<4, 0>::CDF);
/// Descriptor of [`skewnorm_sf`].
pub static SKEWNORM_SF: Operation<4> = Operation::new("skewnorm_sf", AT_X)
    .probability()
    .with_cases(Limits::<4, 0>::SF);
/// Descriptor of [`skewnorm_ppf`].
pub static SKEWNORM_PPF: Operation<4> = Operation::new("skewnorm_ppf", AT_P)
    .quantile()
    .with_cases(Limits::<4, 0>::PPF_REAL);
/// Descriptor of [`skewnorm_isf`].
pub static SKEWNORM_ISF: Operation<4> = Operation::new("skewnorm_isf", AT_Q)
    .quantile()
    .with_cases(Limits::<4, 0>::ISF_REAL);

/// Probability density at `x`.
pub fn skewnorm_pdf(x: Real, loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_PDF.evaluate([x, loc, scale, shape], |&[x, l, s, a]| SkewNormal::new(l, s, a)?.pdf(x))
}

/// `P(X <= x)`.
pub fn skewnorm_cdf(x: Real, loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_CDF.evaluate([x, loc, scale, shape], |&[x, l, s, a]| SkewNormal::new(l, s, a)?.cdf(x))
}

/// `P(X > x)`.
pub fn skewnorm_sf(x: Real, loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_SF.evaluate([x, loc, scale, shape], |&[x, l, s, a]| SkewNormal::new(l, s, a)?.sf(x))
}

/// Quantile of `p`.
pub fn skewnorm_ppf(p: Real, loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_PPF.evaluate([p, loc, scale, shape], |&[p, l, s, a]| SkewNormal::new(l, s, a)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn skewnorm_isf(q: Real, loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_ISF.evaluate([q, loc, scale, shape], |&[q, l, s, a]| SkewNormal::new(l, s, a)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<3> = Thresholds::NONE;

/// Descriptor of [`skewnorm_mean`].
pub static SKEWNORM_MEAN: Operation<3> = Operation::new("skewnorm_mean", FAMILY).with_cases(MOMENTS.mean);
/// Descriptor of [`skewnorm_variance`].
pub static SKEWNORM_VARIANCE: Operation<3> =
    Operation::new("skewnorm_variance", FAMILY).with_cases(MOMENTS.variance);
/// Descriptor of [`skewnorm_skewness`].
pub static SKEWNORM_SKEWNESS: Operation<3> =
    Operation::new("skewnorm_skewness", FAMILY).with_cases(MOMENTS.skewness);
/// Descriptor of [`skewnorm_kurtosis_excess`].
pub static SKEWNORM_KURTOSIS_EXCESS: Operation<3> =
    Operation::new("skewnorm_kurtosis_excess", FAMILY).with_cases(MOMENTS.kurtosis_excess);

/// Mean.
pub fn skewnorm_mean(loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_MEAN.evaluate([loc, scale, shape], |&[l, s, a]| Ok(SkewNormal::new(l, s, a)?.mean()))
}

/// Variance.
pub fn skewnorm_variance(loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_VARIANCE.evaluate([loc, scale, shape], |&[l, s, a]| Ok(SkewNormal::new(l, s, a)?.variance()))
}

/// Skewness.
pub fn skewnorm_skewness(loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_SKEWNESS.evaluate([loc, scale, shape], |&[l, s, a]| Ok(SkewNormal::new(l, s, a)?.skewness()))
}

/// Excess kurtosis.
pub fn skewnorm_kurtosis_excess(loc: Real, scale: Real, shape: Real) -> Real {
    SKEWNORM_KURTOSIS_EXCESS.evaluate([loc, scale, shape], |&[l, s, a]| {
        Ok(SkewNormal::new(l, s, a)?.kurtosis_excess())
    })
}
