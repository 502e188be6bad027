//! Hypergeometric distribution: `k` successes in `N` draws without
//! replacement from `M` items of which `n` are successes.
//!
//! Arguments are `(k, n, N, M)`. All three counts must be integers with
//! `n <= M` and `N <= M`.

use sf_core::operation::{Interval, Operation, Param, SpecialCase};
use sf_core::Real;
use sf_math::distributions::HypergeometricDistribution as Hypergeometric;

use crate::limits::Limits;
use crate::moments::requires_above;

const SUCCESSES: Param = Param::new("n", Interval::NON_NEGATIVE_FINITE);
const DRAWS: Param = Param::new("N", Interval::NON_NEGATIVE_FINITE);
const TOTAL: Param = Param::new("M", Interval::NON_NEGATIVE_FINITE);

const AT_K: [Param; 4] = [Param::any("k"), SUCCESSES, DRAWS, TOTAL];
const FAMILY: [Param; 3] = [SUCCESSES, DRAWS, TOTAL];

const COUNTS: &str = "n, N and M must be integers with n <= M and N <= M";

/// The counts occupy the last three slots.
fn valid_counts<const A: usize>(p: &[Real; A]) -> bool {
    let [n, draws, total] = [p[A - 3], p[A - 2], p[A - 1]];
    let integral = [n, draws, total].iter().all(|v| v.fract() == 0.0);
    integral && n <= total && draws <= total
}

// ── Tails ────────────────────────────────────────────────────────────────────

/// Descriptor of [`hypergeom_pmf`].
pub static HYPERGEOM_PMF: Operation<4> = Operation::new("hypergeom_pmf", AT_K)
    .with_constraint(COUNTS, valid_counts::<4>)
    .with_cases(Limits::<4, 0>::DENSITY);
/// Descriptor of [`hypergeom_cdf`].
pub static HYPERGEOM_CDF: Operation<4> = Operation::new("hypergeom_cdf", AT_K)
    .probability()
    .with_constraint(COUNTS, valid_counts::<4>)
    .with_cases(Limits::<4, 0>::CDF);
/// Descriptor of [`hypergeom_sf`].
pub static HYPERGEOM_SF: Operation<4> = Operation::new("hypergeom_sf", AT_K)
    .probability()
    .with_constraint(COUNTS, valid_counts::<4>)
    .with_cases(Limits::<4, 0>::SF);

/// `P(X = k)`.
pub fn hypergeom_pmf(k: Real, successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_PMF.evaluate([k, successes, draws, total], |&[k, n, m, t]| Hypergeometric::new(n, m, t)?.pmf(k))
}

/// `P(X <= k)`.
pub fn hypergeom_cdf(k: Real, successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_CDF.evaluate([k, successes, draws, total], |&[k, n, m, t]| Hypergeometric::new(n, m, t)?.cdf(k))
}

/// `P(X > k)`.
pub fn hypergeom_sf(k: Real, successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_SF.evaluate([k, successes, draws, total], |&[k, n, m, t]| Hypergeometric::new(n, m, t)?.sf(k))
}

// ── Moments ──────────────────────────────────────────────────────────────────

const MEAN_CASES: &[SpecialCase<3>] = &[requires_above::<3, 2, 0>("M == 0")];
const VARIANCE_CASES: &[SpecialCase<3>] = &[requires_above::<3, 2, 1>("M <= 1")];
const SKEWNESS_CASES: &[SpecialCase<3>] = &[requires_above::<3, 2, 2>("M <= 2")];

/// Descriptor of [`hypergeom_mean`].
pub static HYPERGEOM_MEAN: Operation<3> = Operation::new("hypergeom_mean", FAMILY)
    .with_constraint(COUNTS, valid_counts::<3>)
    .with_cases(MEAN_CASES);
/// Descriptor of [`hypergeom_variance`].
pub static HYPERGEOM_VARIANCE: Operation<3> = Operation::new("hypergeom_variance", FAMILY)
    .with_constraint(COUNTS, valid_counts::<3>)
    .with_cases(VARIANCE_CASES);
/// Descriptor of [`hypergeom_skewness`].
pub static HYPERGEOM_SKEWNESS: Operation<3> = Operation::new("hypergeom_skewness", FAMILY)
    .with_constraint(COUNTS, valid_counts::<3>)
    .with_cases(SKEWNESS_CASES);

/// `N n / M`.
pub fn hypergeom_mean(successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_MEAN.evaluate([successes, draws, total], |&[n, m, t]| Ok(Hypergeometric::new(n, m, t)?.mean()))
}

/// Variance; NaN unless `M > 1`.
pub fn hypergeom_variance(successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_VARIANCE.evaluate([successes, draws, total], |&[n, m, t]| {
        Ok(Hypergeometric::new(n, m, t)?.variance())
    })
}

/// Skewness; NaN unless `M > 2`.
pub fn hypergeom_skewness(successes: Real, draws: Real, total: Real) -> Real {
    HYPERGEOM_SKEWNESS.evaluate([successes, draws, total], |&[n, m, t]| {
        Ok(Hypergeometric::new(n, m, t)?.skewness())
    })
}
