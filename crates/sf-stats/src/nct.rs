//! Non-central Student t distribution.
//!
//! `nctdtr(df, nc, t)` and `nctdtrit(df, nc, p)` keep the legacy argument
//! order.

use sf_core::operation::{Interval, Operation, Param};
use sf_core::Real;
use sf_math::distributions::NonCentralTDistribution as Nct;

use crate::limits::Limits;
use crate::moments::{requires_above, Thresholds};

const DF: Param = Param::new("df", Interval::POSITIVE_FINITE);
const NC: Param = Param::new("nc", Interval::FINITE);

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`nct_pdf`].
pub static NCT_PDF: Operation<3> =
    Operation::new("nct_pdf", [Param::any("t"), DF, NC]).with_cases(Limits::<3, 0>::DENSITY);

/// Descriptor of [`nctdtr`].
pub static NCTDTR: Operation<3> = Operation::new("nctdtr", [DF, NC, Param::any("t")])
    .probability()
    .with_cases(Limits::<3, 2>::CDF);

/// Descriptor of [`nct_sf`].
pub static NCT_SF: Operation<3> = Operation::new("nct_sf", [Param::any("t"), DF, NC])
    .probability()
    .with_cases(Limits::<3, 0>::SF);

/// Descriptor of [`nctdtrit`].
pub static NCTDTRIT: Operation<3> = Operation::new("nctdtrit", [DF, NC, Param::new("p", Interval::UNIT)])
    .quantile()
    .with_cases(Limits::<3, 2>::PPF_REAL);

/// Descriptor of [`nct_isf`].
pub static NCT_ISF: Operation<3> = Operation::new("nct_isf", [Param::new("q", Interval::UNIT), DF, NC])
    .quantile()
    .with_cases(Limits::<3, 0>::ISF_REAL);

/// Probability density at `t`.
pub fn nct_pdf(t: Real, df: Real, nc: Real) -> Real {
    NCT_PDF.evaluate([t, df, nc], |&[t, df, nc]| Nct::new(df, nc)?.pdf(t))
}

/// `P(T <= t)`.
pub fn nctdtr(df: Real, nc: Real, t: Real) -> Real {
    NCTDTR.evaluate([df, nc, t], |&[df, nc, t]| Nct::new(df, nc)?.cdf(t))
}

/// `P(T > t)`.
pub fn nct_sf(t: Real, df: Real, nc: Real) -> Real {
    NCT_SF.evaluate([t, df, nc], |&[t, df, nc]| Nct::new(df, nc)?.sf(t))
}

/// The `t` with `nctdtr(df, nc, t) == p`.
pub fn nctdtrit(df: Real, nc: Real, p: Real) -> Real {
    NCTDTRIT.evaluate([df, nc, p], |&[df, nc, p]| Nct::new(df, nc)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn nct_isf(q: Real, df: Real, nc: Real) -> Real {
    NCT_ISF.evaluate([q, df, nc], |&[q, df, nc]| Nct::new(df, nc)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds {
    mean: &[requires_above::<2, 0, 1>("df <= 1")],
    variance: &[requires_above::<2, 0, 2>("df <= 2")],
    skewness: &[requires_above::<2, 0, 3>("df <= 3")],
    kurtosis_excess: &[requires_above::<2, 0, 4>("df <= 4")],
};

/// Descriptor of [`nct_mean`].
pub static NCT_MEAN: Operation<2> = Operation::new("nct_mean", [DF, NC]).with_cases(MOMENTS.mean);
/// Descriptor of [`nct_variance`].
pub static NCT_VARIANCE: Operation<2> = Operation::new("nct_variance", [DF, NC]).with_cases(MOMENTS.variance);
/// Descriptor of [`nct_skewness`].
pub static NCT_SKEWNESS: Operation<2> = Operation::new("nct_skewness", [DF, NC]).with_cases(MOMENTS.skewness);
/// Descriptor of [`nct_kurtosis_excess`].
pub static NCT_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("nct_kurtosis_excess", [DF, NC]).with_cases(MOMENTS.kurtosis_excess);

/// Mean; NaN unless `df > 1`.
pub fn nct_mean(df: Real, nc: Real) -> Real {
    NCT_MEAN.evaluate([df, nc], |&[df, nc]| Ok(Nct::new(df, nc)?.mean()))
}

/// Variance; NaN unless `df > 2`.
pub fn nct_variance(df: Real, nc: Real) -> Real {
    NCT_VARIANCE.evaluate([df, nc], |&[df, nc]| Ok(Nct::new(df, nc)?.variance()))
}

/// Skewness; NaN unless `df > 3`.
pub fn nct_skewness(df: Real, nc: Real) -> Real {
    NCT_SKEWNESS.evaluate([df, nc], |&[df, nc]| Ok(Nct::new(df, nc)?.skewness()))
}

/// Excess kurtosis; NaN unless `df > 4`.
pub fn nct_kurtosis_excess(df: Real, nc: Real) -> Real {
    NCT_KURTOSIS_EXCESS.evaluate([df, nc], |&[df, nc]| Ok(Nct::new(df, nc)?.kurtosis_excess()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};
    use std::f64::consts::PI;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn central_t_with_one_degree_is_cauchy() {
        assert!(rel(nctdtr(1.0, 0.0, 2.0), 0.5 + 2.0_f64.atan() / PI) < 1e-14);
        assert!(rel(nct_sf(2.0, 1.0, 0.0), 0.5 - 2.0_f64.atan() / PI) < 1e-13);
        assert!(rel(nct_pdf(2.0, 1.0, 0.0), 1.0 / (5.0 * PI)) < 1e-13);
    }

    #[test]
    fn infinite_t() {
        assert_eq!(nctdtr(3.0, 1.0, Real::INFINITY), 1.0);
        assert_eq!(nctdtr(3.0, 1.0, Real::NEG_INFINITY), 0.0);
        assert_eq!(nct_sf(Real::NEG_INFINITY, 3.0, 1.0), 1.0);
        assert_eq!(nct_pdf(Real::INFINITY, 3.0, 1.0), 0.0);
    }

    #[test]
    fn legacy_quantile() {
        for p in [1e-6, 0.25, 0.5, 0.9] {
            let t = nctdtrit(4.0, -2.0, p);
            assert!(rel(nctdtr(4.0, -2.0, t), p) < 1e-9, "p = {p}");
        }
        assert_eq!(nctdtrit(4.0, 1.0, 0.0), Real::NEG_INFINITY);
        assert_eq!(nctdtrit(4.0, 1.0, 1.0), Real::INFINITY);
        assert_eq!(nct_isf(1.0, 4.0, 1.0), Real::NEG_INFINITY);
    }

    #[test]
    fn legacy_names_reach_the_sink() {
        let (v, reports) = capture(|| nctdtr(0.0, 1.0, 1.0));
        assert!(v.is_nan());
        assert_eq!(reports[0].function, "nctdtr");
        let (v, reports) = capture(|| nctdtrit(3.0, 1.0, 2.0));
        assert!(v.is_nan());
        assert_eq!(reports[0].function, "nctdtrit");
        assert_eq!(reports[0].kind, ErrorKind::Domain);
    }

    #[test]
    fn moment_thresholds() {
        assert!(nct_variance(1.0, 0.0).is_nan());
        assert!(rel(nct_variance(3.0, 0.0), 3.0) < 1e-14);
        assert!(nct_mean(1.0, 2.0).is_nan());
        assert!(rel(nct_mean(3.0, 2.0), 2.0 * (6.0 / PI).sqrt()) < 1e-13);
        assert!(nct_skewness(3.0, 1.0).is_nan());
        assert!(nct_kurtosis_excess(4.0, 1.0).is_nan());
        assert!(rel(nct_kurtosis_excess(6.0, 0.0), 3.0) < 1e-13);
    }
}
