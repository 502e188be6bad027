//! Cauchy distribution. No moment exists.

use sf_core::operation::{BackendResult, Interval, Operation, Param};
use sf_core::Real;
use sf_math::distributions::CauchyDistribution as Cauchy;

use crate::limits::Limits;
use crate::moments::Thresholds;

const LOC: Param = Param::new("loc", Interval::FINITE);
const SCALE: Param = Param::new("scale", Interval::POSITIVE_FINITE);

const AT_X: [Param; 3] = [Param::any("x"), LOC, SCALE];
const AT_P: [Param; 3] = [Param::new("p", Interval::UNIT), LOC, SCALE];
const AT_Q: [Param; 3] = [Param::new("q", Interval::UNIT), LOC, SCALE];

/// Descriptor of [`cauchy_pdf`].
pub static CAUCHY_PDF: Operation<3> = Operation::new("cauchy_pdf", AT_X).with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`cauchy_cdf`].
pub static CAUCHY_CDF: Operation<3> = Operation::new("cauchy_cdf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`cauchy_sf`].
pub static CAUCHY_SF: Operation<3> = Operation::new("cauchy_sf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`cauchy_ppf`].
pub static CAUCHY_PPF: Operation<3> = Operation::new("cauchy_ppf", AT_P)
    .quantile()
    .with_cases(Limits::<3, 0>::PPF_REAL);
/// Descriptor of [`cauchy_isf`].
pub static CAUCHY_ISF: Operation<3> = Operation::new("cauchy_isf", AT_Q)
    .quantile()
    .with_cases(Limits::<3, 0>::ISF_REAL);

/// Probability density at `x`.
pub fn cauchy_pdf(x: Real, loc: Real, scale: Real) -> Real {
    CAUCHY_PDF.evaluate([x, loc, scale], |&[x, loc, scale]| Cauchy::new(loc, scale)?.pdf(x))
}

/// `P(X <= x)`.
pub fn cauchy_cdf(x: Real, loc: Real, scale: Real) -> Real {
    CAUCHY_CDF.evaluate([x, loc, scale], |&[x, loc, scale]| Cauchy::new(loc, scale)?.cdf(x))
}

/// `P(X > x)`.
pub fn cauchy_sf(x: Real, loc: Real, scale: Real) -> Real {
    CAUCHY_SF.evaluate([x, loc, scale], |&[x, loc, scale]| Cauchy::new(loc, scale)?.sf(x))
}

/// `loc + scale · tan(π (p - ½))`.
pub fn cauchy_ppf(p: Real, loc: Real, scale: Real) -> Real {
    CAUCHY_PPF.evaluate([p, loc, scale], |&[p, loc, scale]| Cauchy::new(loc, scale)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn cauchy_isf(q: Real, loc: Real, scale: Real) -> Real {
    CAUCHY_ISF.evaluate([q, loc, scale], |&[q, loc, scale]| Cauchy::new(loc, scale)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::UNDEFINED;

/// Descriptor of [`cauchy_mean`].
pub static CAUCHY_MEAN: Operation<2> = Operation::new("cauchy_mean", [LOC, SCALE]).with_cases(MOMENTS.mean);
/// Descriptor of [`cauchy_variance`].
pub static CAUCHY_VARIANCE: Operation<2> =
    Operation::new("cauchy_variance", [LOC, SCALE]).with_cases(MOMENTS.variance);
/// Descriptor of [`cauchy_skewness`].
pub static CAUCHY_SKEWNESS: Operation<2> =
    Operation::new("cauchy_skewness", [LOC, SCALE]).with_cases(MOMENTS.skewness);
/// Descriptor of [`cauchy_kurtosis_excess`].
pub static CAUCHY_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("cauchy_kurtosis_excess", [LOC, SCALE]).with_cases(MOMENTS.kurtosis_excess);

fn undefined(_: &[Real; 2]) -> BackendResult {
    Ok(Real::NAN)
}

/// NaN. Invalid parameters are still reported.
pub fn cauchy_mean(loc: Real, scale: Real) -> Real {
    CAUCHY_MEAN.evaluate([loc, scale], undefined)
}

/// NaN.
pub fn cauchy_variance(loc: Real, scale: Real) -> Real {
    CAUCHY_VARIANCE.evaluate([loc, scale], undefined)
}

/// NaN.
pub fn cauchy_skewness(loc: Real, scale: Real) -> Real {
    CAUCHY_SKEWNESS.evaluate([loc, scale], undefined)
}

/// NaN.
pub fn cauchy_kurtosis_excess(loc: Real, scale: Real) -> Real {
    CAUCHY_KURTOSIS_EXCESS.evaluate([loc, scale], undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};
    use std::f64::consts::FRAC_1_PI;

    #[test]
    fn standard_values() {
        assert_eq!(cauchy_cdf(0.0, 0.0, 1.0), 0.5);
        assert!((cauchy_cdf(1.0, 0.0, 1.0) - 0.75).abs() < 1e-15);
        assert!((cauchy_pdf(1.0, 0.0, 1.0) - 0.5 * FRAC_1_PI).abs() < 1e-15);
    }

    #[test]
    fn far_tail_keeps_its_digits() {
        let sf = cauchy_sf(1e20, 0.0, 1.0);
        assert!((sf / (FRAC_1_PI * 1e-20) - 1.0).abs() < 1e-14, "sf = {sf}");
        let x = cauchy_isf(1e-30, 0.0, 1.0);
        assert!((cauchy_sf(x, 0.0, 1.0) / 1e-30 - 1.0).abs() < 1e-13);
    }

    #[test]
    fn quantiles() {
        assert!((cauchy_ppf(0.75, 2.0, 3.0) - 5.0).abs() < 1e-14);
        assert_eq!(cauchy_ppf(0.0, 2.0, 3.0), Real::NEG_INFINITY);
        assert_eq!(cauchy_isf(0.0, 2.0, 3.0), Real::INFINITY);
    }

    #[test]
    fn moments_are_undefined() {
        let (values, reports) = capture(|| {
            [
                cauchy_mean(0.0, 1.0),
                cauchy_variance(0.0, 1.0),
                cauchy_skewness(0.0, 1.0),
                cauchy_kurtosis_excess(0.0, 1.0),
            ]
        });
        assert!(values.iter().all(|v| v.is_nan()));
        assert!(reports.is_empty());
        let (_, reports) = capture(|| cauchy_mean(0.0, -1.0));
        assert_eq!(reports[0].kind, ErrorKind::Domain);
    }
}
