//! Fisher-Snedecor F distribution.
//!
//! `fdtr(dfn, dfd, x)`, `fdtrc(dfn, dfd, x)` and `fdtri(dfn, dfd, p)` keep
//! the legacy argument order and reject a negative `x`.

use sf_core::operation::{Interval, Operation, Param, Range};
use sf_core::Real;
use sf_math::distributions::FisherFDistribution as FisherF;

use crate::limits::Limits;
use crate::moments::{requires_above, Thresholds};

const DFN: Param = Param::new("dfn", Interval::POSITIVE_FINITE);
const DFD: Param = Param::new("dfd", Interval::POSITIVE_FINITE);

const LEGACY_X: [Param; 3] = [DFN, DFD, Param::new("x", Interval::NON_NEGATIVE)];

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`fdist_pdf`].
pub static FDIST_PDF: Operation<3> =
    Operation::new("fdist_pdf", [Param::any("x"), DFN, DFD]).with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`fdtr`].
pub static FDTR: Operation<3> = Operation::new("fdtr", LEGACY_X)
    .probability()
    .with_cases(Limits::<3, 2>::CDF);
/// Descriptor of [`fdtrc`].
pub static FDTRC: Operation<3> = Operation::new("fdtrc", LEGACY_X)
    .probability()
    .with_cases(Limits::<3, 2>::SF);
/// Descriptor of [`fdtri`].
pub static FDTRI: Operation<3> = Operation::new("fdtri", [DFN, DFD, Param::new("p", Interval::UNIT)])
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 2>::PPF_POSITIVE);
/// Descriptor of [`fdist_isf`].
pub static FDIST_ISF: Operation<3> = Operation::new("fdist_isf", [Param::new("q", Interval::UNIT), DFN, DFD])
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 0>::ISF_POSITIVE);

/// Probability density at `x`.
pub fn fdist_pdf(x: Real, dfn: Real, dfd: Real) -> Real {
    FDIST_PDF.evaluate([x, dfn, dfd], |&[x, dfn, dfd]| FisherF::new(dfn, dfd)?.pdf(x))
}

/// `P(F <= x)`.
pub fn fdtr(dfn: Real, dfd: Real, x: Real) -> Real {
    FDTR.evaluate([dfn, dfd, x], |&[dfn, dfd, x]| FisherF::new(dfn, dfd)?.cdf(x))
}

/// `P(F > x)`.
pub fn fdtrc(dfn: Real, dfd: Real, x: Real) -> Real {
    FDTRC.evaluate([dfn, dfd, x], |&[dfn, dfd, x]| FisherF::new(dfn, dfd)?.sf(x))
}

/// The `x` with `fdtr(dfn, dfd, x) == p`.
pub fn fdtri(dfn: Real, dfd: Real, p: Real) -> Real {
    FDTRI.evaluate([dfn, dfd, p], |&[dfn, dfd, p]| FisherF::new(dfn, dfd)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn fdist_isf(q: Real, dfn: Real, dfd: Real) -> Real {
    FDIST_ISF.evaluate([q, dfn, dfd], |&[q, dfn, dfd]| FisherF::new(dfn, dfd)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds {
    mean: &[requires_above::<2, 1, 2>("dfd <= 2")],
    variance: &[requires_above::<2, 1, 4>("dfd <= 4")],
    skewness: &[requires_above::<2, 1, 6>("dfd <= 6")],
    kurtosis_excess: &[requires_above::<2, 1, 8>("dfd <= 8")],
};

/// Descriptor of [`fdist_mean`].
pub static FDIST_MEAN: Operation<2> = Operation::new("fdist_mean", [DFN, DFD]).with_cases(MOMENTS.mean);
/// Descriptor of [`fdist_variance`].
pub static FDIST_VARIANCE: Operation<2> = Operation::new("fdist_variance", [DFN, DFD]).with_cases(MOMENTS.variance);
/// Descriptor of [`fdist_skewness`].
pub static FDIST_SKEWNESS: Operation<2> = Operation::new("fdist_skewness", [DFN, DFD]).with_cases(MOMENTS.skewness);
/// Descriptor of [`fdist_kurtosis_excess`].
pub static FDIST_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("fdist_kurtosis_excess", [DFN, DFD]).with_cases(MOMENTS.kurtosis_excess);

/// `dfd / (dfd - 2)`; NaN unless `dfd > 2`.
pub fn fdist_mean(dfn: Real, dfd: Real) -> Real {
    FDIST_MEAN.evaluate([dfn, dfd], |&[dfn, dfd]| Ok(FisherF::new(dfn, dfd)?.mean()))
}

/// Variance; NaN unless `dfd > 4`.
pub fn fdist_variance(dfn: Real, dfd: Real) -> Real {
    FDIST_VARIANCE.evaluate([dfn, dfd], |&[dfn, dfd]| Ok(FisherF::new(dfn, dfd)?.variance()))
}

/// Skewness; NaN unless `dfd > 6`.
pub fn fdist_skewness(dfn: Real, dfd: Real) -> Real {
    FDIST_SKEWNESS.evaluate([dfn, dfd], |&[dfn, dfd]| Ok(FisherF::new(dfn, dfd)?.skewness()))
}

/// Excess kurtosis; NaN unless `dfd > 8`.
pub fn fdist_kurtosis_excess(dfn: Real, dfd: Real) -> Real {
    FDIST_KURTOSIS_EXCESS.evaluate([dfn, dfd], |&[dfn, dfd]| Ok(FisherF::new(dfn, dfd)?.kurtosis_excess()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn two_two_closed_form() {
        assert!(rel(fdtr(2.0, 2.0, 3.0), 0.75) < 1e-15);
        assert!(rel(fdtrc(2.0, 2.0, 3.0), 0.25) < 1e-15);
        assert!(rel(fdist_pdf(3.0, 2.0, 2.0), 1.0 / 16.0) < 1e-14);
        assert!(rel(fdtri(2.0, 2.0, 0.75), 3.0) < 1e-13);
        assert!(rel(fdist_isf(0.25, 2.0, 2.0), 3.0) < 1e-13);
    }

    #[test]
    fn legacy_argument_checks() {
        assert_eq!(fdtr(2.0, 5.0, Real::INFINITY), 1.0);
        assert_eq!(fdtrc(2.0, 5.0, Real::INFINITY), 0.0);
        let (v, reports) = capture(|| fdtr(2.0, 5.0, -0.5));
        assert!(v.is_nan());
        assert_eq!(reports[0].function, "fdtr");
        assert_eq!(reports[0].kind, ErrorKind::Domain);
        assert_eq!(fdtri(2.0, 5.0, 0.0), 0.0);
        assert_eq!(fdtri(2.0, 5.0, 1.0), Real::INFINITY);
    }

    #[test]
    fn far_right_tail() {
        let sf = fdtrc(2.0, 2.0, 1e17);
        assert!(rel(sf, 1e-17) < 1e-12, "sf = {sf}");
        assert_eq!(fdtr(2.0, 2.0, 1e17), 1.0);
    }

    #[test]
    fn moment_thresholds() {
        assert!(fdist_mean(4.0, 2.0).is_nan());
        assert!(rel(fdist_mean(4.0, 12.0), 1.2) < 1e-15);
        assert!(fdist_variance(4.0, 4.0).is_nan());
        assert!(fdist_skewness(4.0, 6.0).is_nan());
        assert!(fdist_kurtosis_excess(4.0, 8.0).is_nan());
        assert!(rel(fdist_kurtosis_excess(4.0, 12.0), 26.142_857_142_857_142) < 1e-14);
    }
}
