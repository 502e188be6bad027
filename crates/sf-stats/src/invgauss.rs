//! Inverse Gaussian (Wald) distribution with mean `mu` and shape `lambda`.

use sf_core::operation::{Interval, Operation, Param, Range};
use sf_core::Real;
use sf_math::distributions::InverseGaussianDistribution as InverseGaussian;

use crate::limits::Limits;
use crate::moments::Thresholds;

const MU: Param = Param::new("mu", Interval::POSITIVE_FINITE);
const LAMBDA: Param = Param::new("lambda", Interval::POSITIVE_FINITE);

const AT_X: [Param; 3] = [Param::any("x"), MU, LAMBDA];
const AT_P: [Param; 3] = [Param::new("p", Interval::UNIT), MU, LAMBDA];
const AT_Q: [Param; 3] = [Param::new("q", Interval::UNIT), MU, LAMBDA];

/// Descriptor of [`invgauss_pdf`].
pub static INVGAUSS_PDF: Operation<3> = Operation::new("invgauss_pdf", AT_X).with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`invgauss_cdf`].
pub static INVGAUSS_CDF: Operation<3> = Operation::new("invgauss_cdf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`invgauss_sf`].
pub static INVGAUSS_SF: Operation<3> = Operation::new("invgauss_sf", AT_X)
    .probability()
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`invgauss_ppf`].
pub static INVGAUSS_PPF: Operation<3> = Operation::new("invgauss_ppf", AT_P)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 0>::PPF_POSITIVE);
/// Descriptor of [`invgauss_isf`].
pub static INVGAUSS_ISF: Operation<3> = Operation::new("invgauss_isf", AT_Q)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(Limits::<3, 0>::ISF_POSITIVE);

/// Probability density at `x`.
pub fn invgauss_pdf(x: Real, mu: Real, lambda: Real) -> Real {
    INVGAUSS_PDF.evaluate([x, mu, lambda], |&[x, m, l]| InverseGaussian::new(m, l)?.pdf(x))
}

/// `P(X <= x)`.
pub fn invgauss_cdf(x: Real, mu: Real, lambda: Real) -> Real {
    INVGAUSS_CDF.evaluate([x, mu, lambda], |&[x, m, l]| InverseGaussian::new(m, l)?.cdf(x))
}

/// `P(X > x)`.
pub fn invgauss_sf(x: Real, mu: Real, lambda: Real) -> Real {
    INVGAUSS_SF.evaluate([x, mu, lambda], |&[x, m, l]| InverseGaussian::new(m, l)?.sf(x))
}

/// Quantile of `p`.
pub fn invgauss_ppf(p: Real, mu: Real, lambda: Real) -> Real {
    INVGAUSS_PPF.evaluate([p, mu, lambda], |&[p, m, l]| InverseGaussian::new(m, l)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn invgauss_isf(q: Real, mu: Real, lambda: Real) -> Real {
    INVGAUSS_ISF.evaluate([q, mu, lambda], |&[q, m, l]| InverseGaussian::new(m, l)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::NONE;

/// Descriptor of [`invgauss_mean`].
pub static INVGAUSS_MEAN: Operation<2> = Operation::new("invgauss_mean", [MU, LAMBDA]).with_cases(MOMENTS.mean);
/// Descriptor of [`invgauss_variance`].
pub static INVGAUSS_VARIANCE: Operation<2> =
    Operation::new("invgauss_variance", [MU, LAMBDA]).with_cases(MOMENTS.variance);
/// Descriptor of [`invgauss_skewness`].
pub static INVGAUSS_SKEWNESS: Operation<2> =
    Operation::new("invgauss_skewness", [MU, LAMBDA]).with_cases(MOMENTS.skewness);
/// Descriptor of [`invgauss_kurtosis_excess`].
pub static INVGAUSS_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("invgauss_kurtosis_excess", [MU, LAMBDA]).with_cases(MOMENTS.kurtosis_excess);

/// `mu`.
pub fn invgauss_mean(mu: Real, lambda: Real) -> Real {
    INVGAUSS_MEAN.evaluate([mu, lambda], |&[m, l]| Ok(InverseGaussian::new(m, l)?.mean()))
}

/// `mu³ / lambda`.
pub fn invgauss_variance(mu: Real, lambda: Real) -> Real {
    INVGAUSS_VARIANCE.evaluate([mu, lambda], |&[m, l]| Ok(InverseGaussian::new(m, l)?.variance()))
}

/// `3 √(mu / lambda)`.
pub fn invgauss_skewness(mu: Real, lambda: Real) -> Real {
    INVGAUSS_SKEWNESS.evaluate([mu, lambda], |&[m, l]| Ok(InverseGaussian::new(m, l)?.skewness()))
}

/// `15 mu / lambda`.
pub fn invgauss_kurtosis_excess(mu: Real, lambda: Real) -> Real {
    INVGAUSS_KURTOSIS_EXCESS.evaluate([mu, lambda], |&[m, l]| Ok(InverseGaussian::new(m, l)?.kurtosis_excess()))
}
