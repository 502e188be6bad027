//! Non-central F distribution.
//!
//! The CDF and quantile keep their legacy names and argument order,
//! `ncfdtr(dfn, dfd, nc, f)` and `ncfdtri(dfn, dfd, nc, p)`, with the
//! argument last. The remaining operations take it first.

use sf_core::operation::{Interval, Operation, Param, Range};
use sf_core::Real;
use sf_math::distributions::NonCentralFDistribution as Ncf;

use crate::limits::Limits;
use crate::moments::{requires_above, Thresholds};

const DFN: Param = Param::new("dfn", Interval::POSITIVE_FINITE);
const DFD: Param = Param::new("dfd", Interval::POSITIVE_FINITE);
const NC: Param = Param::new("nc", Interval::NON_NEGATIVE_FINITE);

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`ncf_pdf`].
pub static NCF_PDF: Operation<4> =
    Operation::new("ncf_pdf", [Param::any("x"), DFN, DFD, NC]).with_cases(Limits::<4, 0>::DENSITY);

/// Descriptor of [`ncfdtr`]. A negative `f` is a domain violation.
pub static NCFDTR: Operation<4> = Operation::new("ncfdtr", [DFN, DFD, NC, Param::new("f", Interval::NON_NEGATIVE)])
    .probability()
    .with_cases(Limits::<4, 3>::CDF);

/// Descriptor of [`ncf_sf`].
pub static NCF_SF: Operation<4> = Operation::new("ncf_sf", [Param::any("x"), DFN, DFD, NC])
    .probability()
    .with_cases(Limits::<4, 0>::SF);

/// Descriptor of [`ncfdtri`].
pub static NCFDTRI: Operation<4> = Operation::new("ncfdtri", [DFN, DFD, NC, Param::new("p", Interval::UNIT)])
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<4, 3>::PPF_POSITIVE);

/// Descriptor of [`ncf_isf`].
pub static NCF_ISF: Operation<4> = Operation::new("ncf_isf", [Param::new("q", Interval::UNIT), DFN, DFD, NC])
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<4, 0>::ISF_POSITIVE);

/// Probability density at `x`.
pub fn ncf_pdf(x: Real, dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_PDF.evaluate([x, dfn, dfd, nc], |&[x, dfn, dfd, nc]| Ncf::new(dfn, dfd, nc)?.pdf(x))
}

/// `P(F <= f)`.
pub fn ncfdtr(dfn: Real, dfd: Real, nc: Real, f: Real) -> Real {
    NCFDTR.evaluate([dfn, dfd, nc, f], |&[dfn, dfd, nc, f]| Ncf::new(dfn, dfd, nc)?.cdf(f))
}

/// `P(F > x)`.
pub fn ncf_sf(x: Real, dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_SF.evaluate([x, dfn, dfd, nc], |&[x, dfn, dfd, nc]| Ncf::new(dfn, dfd, nc)?.sf(x))
}

/// The `f` with `ncfdtr(dfn, dfd, nc, f) == p`.
pub fn ncfdtri(dfn: Real, dfd: Real, nc: Real, p: Real) -> Real {
    NCFDTRI.evaluate([dfn, dfd, nc, p], |&[dfn, dfd, nc, p]| Ncf::new(dfn, dfd, nc)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn ncf_isf(q: Real, dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_ISF.evaluate([q, dfn, dfd, nc], |&[q, dfn, dfd, nc]| Ncf::new(dfn, dfd, nc)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<3> = Thresholds {
    mean: &[requires_above::<3, 1, 2>("dfd <= 2")],
    variance: &[requires_above::<3, 1, 4>("dfd <= 4")],
    skewness: &[requires_above::<3, 1, 6>("dfd <= 6")],
    kurtosis_excess: &[requires_above::<3, 1, 8>("dfd <= 8")],
};

/// Descriptor of [`ncf_mean`].
pub static NCF_MEAN: Operation<3> = Operation::new("ncf_mean", [DFN, DFD, NC]).with_cases(MOMENTS.mean);
/// Descriptor of [`ncf_variance`].
pub static NCF_VARIANCE: Operation<3> = Operation::new("ncf_variance", [DFN, DFD, NC]).with_cases(MOMENTS.variance);
/// Descriptor of [`ncf_skewness`].
pub static NCF_SKEWNESS: Operation<3> = Operation::new("ncf_skewness", [DFN, DFD, NC]).with_cases(MOMENTS.skewness);
/// Descriptor of [`ncf_kurtosis_excess`].
pub static NCF_KURTOSIS_EXCESS: Operation<3> =
    Operation::new("ncf_kurtosis_excess", [DFN, DFD, NC]).with_cases(MOMENTS.kurtosis_excess);

/// Mean; NaN unless `dfd > 2`.
pub fn ncf_mean(dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_MEAN.evaluate([dfn, dfd, nc], |&[dfn, dfd, nc]| Ok(Ncf::new(dfn, dfd, nc)?.mean()))
}

/// Variance; NaN unless `dfd > 4`.
pub fn ncf_variance(dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_VARIANCE.evaluate([dfn, dfd, nc], |&[dfn, dfd, nc]| Ok(Ncf::new(dfn, dfd, nc)?.variance()))
}

/// Skewness; NaN unless `dfd > 6`.
pub fn ncf_skewness(dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_SKEWNESS.evaluate([dfn, dfd, nc], |&[dfn, dfd, nc]| Ok(Ncf::new(dfn, dfd, nc)?.skewness()))
}

/// Excess kurtosis; NaN unless `dfd > 8`.
pub fn ncf_kurtosis_excess(dfn: Real, dfd: Real, nc: Real) -> Real {
    NCF_KURTOSIS_EXCESS.evaluate([dfn, dfd, nc], |&[dfn, dfd, nc]| Ok(Ncf::new(dfn, dfd, nc)?.kurtosis_excess()))
}
