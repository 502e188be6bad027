//! Binomial distribution with `n` trials and success probability `p`.
//!
//! Quantiles round up: `binom_ppf(p)` is the smallest `k` with
//! `binom_cdf(k) >= p`, so `binom_ppf(binom_cdf(k)) == k`.

use sf_core::operation::{Interval, Operation, Param, Range, Resolution, SpecialCase};
use sf_core::Real;
use sf_math::distributions::BinomialDistribution as Binomial;

use crate::limits::{is_one, is_zero, zero, Limits};
use crate::moments::Thresholds;

const N: Param = Param::new("n", Interval::NON_NEGATIVE_FINITE);
const P: Param = Param::new("p", Interval::UNIT);

const AT_K: [Param; 3] = [Param::any("k"), N, P];
const AT_PROB: [Param; 3] = [Param::new("q", Interval::UNIT), N, P];

fn integral_trials<const A: usize, const I: usize>(p: &[Real; A]) -> bool {
    p[I].fract() == 0.0
}

/// Largest reachable count: `n`, or `0` when successes are impossible.
fn support_top(p: &[Real; 3]) -> Resolution<3> {
    Resolution::Value(if p[2] == 0.0 { 0.0 } else { p[1] })
}

const PPF_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("q == 0", is_zero::<3, 0>, zero::<3>),
    SpecialCase::new("q == 1", is_one::<3, 0>, support_top),
];

const ISF_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("q == 0", is_zero::<3, 0>, support_top),
    SpecialCase::new("q == 1", is_one::<3, 0>, zero::<3>),
];

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`binom_pmf`].
pub static BINOM_PMF: Operation<3> = Operation::new("binom_pmf", AT_K)
    .with_constraint("n must be an integer", integral_trials::<3, 1>)
    .with_cases(Limits::<3, 0>::DENSITY);
/// Descriptor of [`binom_cdf`].
pub static BINOM_CDF: Operation<3> = Operation::new("binom_cdf", AT_K)
    .probability()
    .with_constraint("n must be an integer", integral_trials::<3, 1>)
    .with_cases(Limits::<3, 0>::CDF);
/// Descriptor of [`binom_sf`].
pub static BINOM_SF: Operation<3> = Operation::new("binom_sf", AT_K)
    .probability()
    .with_constraint("n must be an integer", integral_trials::<3, 1>)
    .with_cases(Limits::<3, 0>::SF);
/// Descriptor of [`binom_ppf`].
pub static BINOM_PPF: Operation<3> = Operation::new("binom_ppf", AT_PROB)
    .quantile()
    .with_range(Range::NonNegative)
    .with_constraint("n must be an integer", integral_trials::<3, 1>)
    .with_cases(PPF_CASES);
/// Descriptor of [`binom_isf`].
pub static BINOM_ISF: Operation<3> = Operation::new("binom_isf", AT_PROB)
    .quantile()
    .with_range(Range::NonNegative)
    .with_constraint("n must be an integer", integral_trials::<3, 1>)
    .with_cases(ISF_CASES);

/// `P(X = k)`; zero off the integers.
pub fn binom_pmf(k: Real, n: Real, p: Real) -> Real {
    BINOM_PMF.evaluate([k, n, p], |&[k, n, p]| Binomial::new(n, p)?.pmf(k))
}

/// `P(X <= k)`.
pub fn binom_cdf(k: Real, n: Real, p: Real) -> Real {
    BINOM_CDF.evaluate([k, n, p], |&[k, n, p]| Binomial::new(n, p)?.cdf(k))
}

/// `P(X > k)`.
pub fn binom_sf(k: Real, n: Real, p: Real) -> Real {
    BINOM_SF.evaluate([k, n, p], |&[k, n, p]| Binomial::new(n, p)?.sf(k))
}

/// Smallest `k` with `cdf(k) >= q`.
pub fn binom_ppf(q: Real, n: Real, p: Real) -> Real {
    BINOM_PPF.evaluate([q, n, p], |&[q, n, p]| Binomial::new(n, p)?.ppf(q))
}

/// Smallest `k` with `sf(k) <= q`.
pub fn binom_isf(q: Real, n: Real, p: Real) -> Real {
    BINOM_ISF.evaluate([q, n, p], |&[q, n, p]| Binomial::new(n, p)?.isf(q))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MOMENTS: Thresholds<2> = Thresholds::NONE;

/// Descriptor of [`binom_mean`].
pub static BINOM_MEAN: Operation<2> = Operation::new("binom_mean", [N, P])
    .with_constraint("n must be an integer", integral_trials::<2, 0>)
    .with_cases(MOMENTS.mean);
/// Descriptor of [`binom_variance`].
pub static BINOM_VARIANCE: Operation<2> = Operation::new("binom_variance", [N, P])
    .with_constraint("n must be an integer", integral_trials::<2, 0>)
    .with_cases(MOMENTS.variance);
/// Descriptor of [`binom_skewness`].
pub static BINOM_SKEWNESS: Operation<2> = Operation::new("binom_skewness", [N, P])
    .with_constraint("n must be an integer", integral_trials::<2, 0>)
    .with_cases(MOMENTS.skewness);
/// Descriptor of [`binom_kurtosis_excess`].
pub static BINOM_KURTOSIS_EXCESS: Operation<2> = Operation::new("binom_kurtosis_excess", [N, P])
    .with_constraint("n must be an integer", integral_trials::<2, 0>)
    .with_cases(MOMENTS.kurtosis_excess);

/// `n p`.
pub fn binom_mean(n: Real, p: Real) -> Real {
    BINOM_MEAN.evaluate([n, p], |&[n, p]| Ok(Binomial::new(n, p)?.mean()))
}

/// `n p (1 - p)`.
pub fn binom_variance(n: Real, p: Real) -> Real {
    BINOM_VARIANCE.evaluate([n, p], |&[n, p]| Ok(Binomial::new(n, p)?.variance()))
}

/// Skewness.
pub fn binom_skewness(n: Real, p: Real) -> Real {
    BINOM_SKEWNESS.evaluate([n, p], |&[n, p]| Ok(Binomial::new(n, p)?.skewness()))
}

/// Excess kurtosis.
pub fn binom_kurtosis_excess(n: Real, p: Real) -> Real {
    BINOM_KURTOSIS_EXCESS.evaluate([n, p], |&[n, p]| Ok(Binomial::new(n, p)?.kurtosis_excess()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};

    #[test]
    fn four_fair_coins() {
        assert!((binom_pmf(2.0, 4.0, 0.5) - 6.0 / 16.0).abs() < 1e-15);
        assert!((binom_cdf(1.0, 4.0, 0.5) - 5.0 / 16.0).abs() < 1e-15);
        assert!((binom_sf(2.0, 4.0, 0.5) - 5.0 / 16.0).abs() < 1e-15);
        assert_eq!(binom_pmf(1.5, 4.0, 0.5), 0.0);
    }

    #[test]
    fn fractional_trials_are_rejected() {
        let (v, reports) = capture(|| binom_cdf(1.0, 2.5, 0.5));
        assert!(v.is_nan());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ErrorKind::Domain);
        assert_eq!(reports[0].detail.as_deref(), Some("n must be an integer"));
    }

    #[test]
    fn quantile_ends() {
        assert_eq!(binom_ppf(0.0, 10.0, 0.3), 0.0);
        assert_eq!(binom_ppf(1.0, 10.0, 0.3), 10.0);
        assert_eq!(binom_ppf(1.0, 10.0, 0.0), 0.0);
        assert_eq!(binom_isf(0.0, 10.0, 0.3), 10.0);
        assert_eq!(binom_isf(1.0, 10.0, 0.3), 0.0);
    }

    #[test]
    fn quantiles_round_up() {
        for k in 0..20 {
            let k = k as Real;
            let c = binom_cdf(k, 20.0, 0.3);
            if c <= 0.5 {
                assert_eq!(binom_ppf(c, 20.0, 0.3), k, "ppf, k = {k}");
            }
            let s = binom_sf(k, 20.0, 0.3);
            if s < 0.5 {
                assert_eq!(binom_isf(s, 20.0, 0.3), k, "isf, k = {k}");
            }
        }
        let k = binom_ppf(0.95, 20.0, 0.3);
        assert!(binom_cdf(k, 20.0, 0.3) >= 0.95);
        assert!(binom_cdf(k - 1.0, 20.0, 0.3) < 0.95);
    }

    #[test]
    fn moments() {
        assert_eq!(binom_mean(10.0, 0.25), 2.5);
        assert_eq!(binom_variance(10.0, 0.5), 2.5);
        assert_eq!(binom_skewness(10.0, 0.5), 0.0);
        assert!(binom_mean(10.5, 0.5).is_nan());
    }
}
