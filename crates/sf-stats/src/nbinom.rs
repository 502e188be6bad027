//! Negative binomial distribution: failures before the `r`-th success.

use sf_core::operation::{Interval, Operation, Param, Range, Resolution, SpecialCase};
use sf_core::Real;
use sf_math::distributions::NegativeBinomialDistribution as NegativeBinomial;

use crate::limits::{is_one, is_zero, zero, Limits};
use crate::moments::Thresholds;

const R: Param = Param::new("r", Interval::POSITIVE_FINITE);
const P: Param = Param::new("p", Interval::left_open(0.0, 1.0));

const AT_K: [Param; 3] = [Param::any("k"), R, P];
const AT_PROB: [Param; 3] = [Param::new("q", Interval::UNIT), R, P];

/// Unbounded unless every trial succeeds.
fn support_top(p: &[Real; 3]) -> Resolution<3> {
    Resolution::Value(if p[2] == 1.0 { 0.0 } else { Real::INFINITY })
}

const PPF_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("q == 0", is_zero::<3, 0>, zero::<3>),
    SpecialCase::new("q == 1", is_one::<3, 0>, support_top),
];

const ISF_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("q == 0", is_zero::<3, 0>, support_top),
    SpecialCase::new("q == 1", is_one::<3, 0>, zero::<3>),
];

/// Descriptor of [`nbinom_pmf`].
pub static NBINOM_PMF: Operation<3> = Operation::new("nbinom_pmf", AT_K).with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`nbinom_cdf`].
pub static NBINOM_CDF: Operation<3> = Operation::new("nbinom_cdf", AT_K)
    .probability()
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`nbinom_sf`].
pub static NBINOM_SF: Operation<3> = Operation::new("nbinom_sf", AT_K)
    .probability()
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`nbinom_ppf`].
pub static NBINOM_PPF: Operation<3> = Operation::new("nbinom_ppf", AT_PROB)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(PPF_CASES);
/// Descriptor of [`nbinom_isf`].
pub static NBINOM_ISF: Operation<3> = Operation::new("nbinom_isf", AT_PROB)
    .quantile()
    .with_range(Range::NonNegative)
    .with_cases(ISF_CASES);

/// `P(X = k)`.
pub fn nbinom_pmf(k: Real, r: Real, p: Real) -> Real {
    NBINOM_PMF.evaluate([k, r, p], |&[k, r, p]| NegativeBinomial::new(r, p)?.pmf(k))
}

/// `P(X <= k)`.
pub fn nbinom_cdf(k: Real, r: Real, p: Real) -> Real {
    NBINOM_CDF.evaluate([k, r, p], |&[k, r, p]| NegativeBinomial::new(r, p)?.cdf(k))
}

/// `P(X > k)`.
pub fn nbinom_sf(k: Real, r: Real, p: Real) -> Real {
    NBINOM_SF.evaluate([k, r, p], |&[k, r, p]| NegativeBinomial::new(r, p)?.sf(k))
}

/// Smallest `k` with `cdf(k) >= q`.
pub fn nbinom_ppf(q: Real, r: Real, p: Real) -> Real {
    NBINOM_PPF.evaluate([q, r, p], |&[q, r, p]| NegativeBinomial::new(r, p)?.ppf(q))
}

/// Smallest `k` with `sf(k) <= q`.
pub fn nbinom_isf(q: Real, r: Real, p: Real) -> Real {
    NBINOM_ISF.evaluate([q, r, p], |&[q, r, p]| NegativeBinomial::new(r, p)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::NONE;

/// Descriptor of [`nbinom_mean`].
pub static NBINOM_MEAN: Operation<2> = Operation::new("nbinom_mean", [R, P]).with_cases(MOMENTS.mean);
/// Descriptor of [`nbinom_variance`].
pub static NBINOM_VARIANCE: Operation<2> = Operation::new("nbinom_variance", [R, P]).with_cases(MOMENTS.variance);
/// Descriptor of [`nbinom_skewness`].
pub static NBINOM_SKEWNESS: Operation<2> = Operation::new("nbinom_skewness", [R, P]).with_cases(MOMENTS.skewness);
/// Descriptor of [`nbinom_kurtosis_excess`].
pub static NBINOM_KURTOSIS_EXCESS: Operation<2> =
    Operation::new("nbinom_kurtosis_excess", [R, P]).with_cases(MOMENTS.kurtosis_excess);

/// `r (1 - p) / p`.
pub fn nbinom_mean(r: Real, p: Real) -> Real {
    NBINOM_MEAN.evaluate([r, p], |&[r, p]| Ok(NegativeBinomial::new(r, p)?.mean()))
}

/// `r (1 - p) / p²`.
pub fn nbinom_variance(r: Real, p: Real) -> Real {
    NBINOM_VARIANCE.evaluate([r, p], |&[r, p]| Ok(NegativeBinomial::new(r, p)?.variance()))
}

/// Skewness.
pub fn nbinom_skewness(r: Real, p: Real) -> Real {
    NBINOM_SKEWNESS.evaluate([r, p], |&[r, p]| Ok(NegativeBinomial::new(r, p)?.skewness()))
}

/// Excess kurtosis.
pub fn nbinom_kurtosis_excess(r: Real, p: Real) -> Real {
    NBINOM_KURTOSIS_EXCESS.evaluate([r, p], |&[r, p]| Ok(NegativeBinomial::new(r, p)?.kurtosis_excess()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};

    #[test]
    fn geometric_case() {
        assert!((nbinom_pmf(3.0, 1.0, 0.25) - 0.25 * 0.75_f64.powi(3)).abs() < 1e-15);
        assert!((nbinom_sf(3.0, 1.0, 0.25) / 0.75_f64.powi(4) - 1.0).abs() < 1e-14);
        assert!((nbinom_sf(200.0, 1.0, 0.25) / 0.75_f64.powi(201) - 1.0).abs() < 1e-11);
    }

    #[test]
    fn quantile_ends() {
        assert_eq!(nbinom_ppf(0.0, 3.0, 0.3), 0.0);
        assert_eq!(nbinom_ppf(1.0, 3.0, 0.3), Real::INFINITY);
        assert_eq!(nbinom_ppf(1.0, 3.0, 1.0), 0.0);
        assert_eq!(nbinom_isf(0.0, 3.0, 0.3), Real::INFINITY);
        assert_eq!(nbinom_isf(1.0, 3.0, 0.3), 0.0);
    }

    #[test]
    fn quantiles_round_up() {
        for k in 0..30 {
            let k = k as Real;
            let c = nbinom_cdf(k, 3.0, 0.3);
            if c <= 0.5 {
                assert_eq!(nbinom_ppf(c, 3.0, 0.3), k, "ppf, k = {k}");
            }
            let s = nbinom_sf(k, 3.0, 0.3);
            if s < 0.5 {
                assert_eq!(nbinom_isf(s, 3.0, 0.3), k, "isf, k = {k}");
            }
        }
    }

    #[test]
    fn zero_success_probability_is_rejected() {
        let (v, reports) = capture(|| nbinom_mean(2.0, 0.0));
        assert!(v.is_nan());
        assert_eq!(reports[0].kind, ErrorKind::Domain);
        assert_eq!(nbinom_mean(4.0, 0.5), 4.0);
        assert_eq!(nbinom_variance(4.0, 0.5), 8.0);
    }
}
