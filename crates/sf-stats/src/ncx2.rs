//! Non-central chi-squared distribution with `k` degrees of freedom and
//! non-centrality `λ`.

use sf_core::operation::{Interval, Operation, Param, Range};
use sf_core::Real;
use sf_math::distributions::NonCentralChiSquaredDistribution as Ncx2;

use crate::limits::Limits;
use crate::moments::Thresholds;

const K: Param = Param::new("k", Interval::POSITIVE_FINITE);
const NC: Param = Param::new("nc", Interval::NON_NEGATIVE_FINITE);

const AT_X: [Param; 3] = [Param::any("x"), K, NC];
const AT_P: [Param; 3] = [Param::new("p", Interval::UNIT), K, NC];
const AT_Q: [Param; 3] = [Param::new("q", Interval::UNIT), K, NC];

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`ncx2_pdf`].
pub static NCX2_PDF: Operation<3> = Operation::new("ncx2_pdf", AT_X).with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`ncx2_cdf`].
pub static NCX2_CDF: Operation<3> = Operation::new("ncx2_cdf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`ncx2_sf`].
pub static NCX2_SF: Operation<3> = Operation::new("ncx2_sf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`ncx2_ppf`].
pub static NCX2_PPF: Operation<3> = Operation::new("ncx2_ppf", AT_P)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 0>::PPF_POSITIVE);
/// Descriptor of [`ncx2_isf`].
pub static NCX2_ISF: Operation<3> = Operation::new("ncx2_isf", AT_Q)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 0>::ISF_POSITIVE);

/// Probability density at `x`.
pub fn ncx2_pdf(x: Real, k: Real, nc: Real) -> Real {
    NCX2_PDF.evaluate([x, k, nc], |&[x, k, nc]| Ncx2::new(k, nc)?.pdf(x))
}

/// `P(X <= x)`.
pub fn ncx2_cdf(x: Real, k: Real, nc: Real) -> Real {
    NCX2_CDF.evaluate([x, k, nc], |&[x, k, nc]| Ncx2::new(k, nc)?.cdf(x))
}

/// `P(X > x)`, computed without forming `1 - cdf`.
pub fn ncx2_sf(x: Real, k: Real, nc: Real) -> Real {
    NCX2_SF.evaluate([x, k, nc], |&[x, k, nc]| Ncx2::new(k, nc)?.sf(x))
}

/// Quantile of `p`.
pub fn ncx2_ppf(p: Real, k: Real, nc: Real) -> Real {
    NCX2_PPF.evaluate([p, k, nc], |&[p, k, nc]| Ncx2::new(k, nc)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn ncx2_isf(q: Real, k: Real, nc: Real) -> Real {
    NCX2_ISF.evaluate([q, k, nc], |&[q, k, nc]| Ncx2::new(k, nc)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::NONE;

/// Descriptor of [`ncx2_mean`].
pub static NCX2_MEAN: Operation<2> = Operation::new("ncx2_mean", [K, NC]).with_cases(MOMENTS.mean);
/// Descriptor of [`ncx2_variance`].
pub static NCX2_VARIANCE: Operation<2> = Operation::new("ncx2_variance", [K, NC]).with_cases(MOMENTS.variance);
/// Descriptor of [`ncx2_skewness`].
pub static NCX2_SKEWNESS: Operation<2> = Operation::new("ncx2_skewness", [K, NC]).with_cases(MOMENTS.skewness);
/// Descriptor of [`ncx2_kurtosis_excess`].
pub static NCX2_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("ncx2_kurtosis_excess", [K, NC]).with_cases(MOMENTS.kurtosis_excess);

/// `k + λ`.
pub fn ncx2_mean(k: Real, nc: Real) -> Real {
    NCX2_MEAN.evaluate([k, nc], |&[k, nc]| Ok(Ncx2::new(k, nc)?.mean()))
}

/// `2 (k + 2λ)`.
pub fn ncx2_variance(k: Real, nc: Real) -> Real {
    NCX2_VARIANCE.evaluate([k, nc], |&[k, nc]| Ok(Ncx2::new(k, nc)?.variance()))
}

/// Skewness.
pub fn ncx2_skewness(k: Real, nc: Real) -> Real {
    NCX2_SKEWNESS.evaluate([k, nc], |&[k, nc]| Ok(Ncx2::new(k, nc)?.skewness()))
}

/// Excess kurtosis.
pub fn ncx2_kurtosis_excess(k: Real, nc: Real) -> Real {
    NCX2_KURTOSIS_EXCESS.evaluate([k, nc], |&[k, nc]| Ok(Ncx2::new(k, nc)?.kurtosis_excess()))
}
