//! Hypergeometric distribution.
//!
//! `k` successes in `draws` draws without replacement from a population of
//! `total` items of which `successes` are successes. Support is
//! `max(0, draws + successes - total) ..= min(successes, draws)`.
//!
//! The mass is a ratio of three binomial masses at `p = draws/total`, each
//! in saddle-point form (Stirling remainders plus the deviance
//! `x ln(x/np) + np - x`), so it keeps its relative precision for counts
//! far beyond where `ln C(n, k)` differences cancel. Tails are summed away
//! from the mode with the ratio of neighbouring masses, starting at `k`;
//! the tail containing the mode is one minus the other.

use std::f64::consts::PI;

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::gamma::ln_gamma;

use crate::special::gamma::stirling_correction;

/// Terms allowed in one tail sum.
const MAX_TAIL_TERMS: u64 = 10_000_000;

/// Hypergeometric distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HypergeometricDistribution {
    successes: u64,
    draws: u64,
    total: u64,
}

fn to_count(v: Real) -> Option<u64> {
    if v >= 0.0 && v.is_finite() && v.fract() == 0.0 && v < u64::MAX as Real {
        Some(v as u64)
    } else {
        None
    }
}

fn unfinished(k: Real) -> Signal {
    Signal::Evaluation(format!(
        "hypergeometric tail at k = {k} still growing after {MAX_TAIL_TERMS} terms"
    ))
}

// ── Saddle-point binomial mass ────────────────────────────────────────────────

/// `ln n! - ln(√(2π) n^{n+½} e^{-n})`.
fn stirling_remainder(n: Real) -> Real {
    if n >= 20.0 {
        stirling_correction(n)
    } else {
        ln_gamma(n + 1.0) - (n + 0.5) * n.ln() + n - 0.5 * (2.0 * PI).ln()
    }
}

/// `x ln(x/np) + np - x`, by its series when `x` is close to `np`.
fn deviance(x: Real, np: Real) -> Real {
    let d = x - np;
    if d.abs() < 0.1 * (x + np) {
        let v = d / (x + np);
        let mut s = d * v;
        let mut ej = 2.0 * x * v;
        let v2 = v * v;
        for j in 1..1000 {
            ej *= v2;
            let next = s + ej / Real::from(2 * j + 1);
            if next == s {
                break;
            }
            s = next;
        }
        return s;
    }
    x * (x / np).ln() + np - x
}

/// `ln P(Bin(n, p) = x)` for integer `0 <= x <= n`, with `q = 1 - p`.
fn ln_binomial_mass(x: Real, n: Real, p: Real, q: Real) -> Real {
    if x == 0.0 {
        return if n == 0.0 {
            0.0
        } else if p < 0.1 {
            -deviance(n, n * q) - n * p
        } else {
            n * q.ln()
        };
    }
    if x == n {
        return if q < 0.1 { -deviance(n, n * p) - n * q } else { n * p.ln() };
    }
    let y = n - x;
    let lc = stirling_remainder(n)
        - stirling_remainder(x)
        - stirling_remainder(y)
        - deviance(x, n * p)
        - deviance(y, n * q);
    let lf = (2.0 * PI).ln() + x.ln() + (-x / n).ln_1p();
    lc - 0.5 * lf
}

impl HypergeometricDistribution {
    /// Requires integers `0 <= successes <= total` and `0 <= draws <= total`.
    pub fn new(successes: Real, draws: Real, total: Real) -> Result<Self, Signal> {
        match (to_count(successes), to_count(draws), to_count(total)) {
            (Some(n), Some(m), Some(t)) if n <= t && m <= t => Ok(Self {
                successes: n,
                draws: m,
                total: t,
            }),
            _ => Err(Signal::Domain),
        }
    }

    /// Smallest value in the support.
    pub fn lower(&self) -> u64 {
        self.draws.saturating_sub(self.total - self.successes)
    }

    /// Largest value in the support.
    pub fn upper(&self) -> u64 {
        self.successes.min(self.draws)
    }

    fn parameters(&self) -> (Real, Real, Real) {
        (self.successes as Real, self.draws as Real, self.total as Real)
    }

    /// Most likely value, `⌊(m + 1)(n + 1)/(t + 2)⌋` on the support.
    fn mode(&self) -> Real {
        let (n, m, t) = self.parameters();
        ((m + 1.0) * (n + 1.0) / (t + 2.0))
            .floor()
            .clamp(self.lower() as Real, self.upper() as Real)
    }

    /// Mass at a point of the support.
    fn mass(&self, k: Real) -> Real {
        let (n, m, t) = self.parameters();
        if t == 0.0 {
            return 1.0;
        }
        let p = m / t;
        let q = (t - m) / t;
        let log = ln_binomial_mass(k, n, p, q) + ln_binomial_mass(m - k, t - n, p, q)
            - ln_binomial_mass(m, t, p, q);
        log.exp()
    }

    /// `P(X <= k)` summed downward from `k <= mode`.
    fn lower_tail(&self, k: Real) -> BackendResult {
        let (n, m, t) = self.parameters();
        let floor = self.lower() as Real;
        let mut term = self.mass(k);
        let mut sum = term;
        let mut j = k;
        let mut steps = 0;
        while j > floor && term > 0.0 {
            let ratio = j * (t - n - m + j) / ((n - j + 1.0) * (m - j + 1.0));
            term *= ratio;
            sum += term;
            j -= 1.0;
            if term <= 0.5 * Real::EPSILON * sum * (1.0 - ratio) {
                break;
            }
            steps += 1;
            if steps > MAX_TAIL_TERMS {
                return Err(unfinished(k));
            }
        }
        Ok(sum.min(1.0))
    }

    /// `P(X > k)` summed upward from `k + 1 > mode`.
    fn upper_tail(&self, k: Real) -> BackendResult {
        let (n, m, t) = self.parameters();
        let ceiling = self.upper() as Real;
        let mut j = k + 1.0;
        let mut term = self.mass(j);
        let mut sum = term;
        let mut steps = 0;
        while j < ceiling && term > 0.0 {
            let ratio = (n - j) * (m - j) / ((j + 1.0) * (t - n - m + j + 1.0));
            term *= ratio;
            sum += term;
            j += 1.0;
            if term <= 0.5 * Real::EPSILON * sum * (1.0 - ratio) {
                break;
            }
            steps += 1;
            if steps > MAX_TAIL_TERMS {
                return Err(unfinished(k));
            }
        }
        Ok(sum.min(1.0))
    }

    /// Probability mass function. Zero off the support.
    pub fn pmf(&self, k: Real) -> BackendResult {
        match to_count(k) {
            Some(c) if (self.lower()..=self.upper()).contains(&c) => Ok(self.mass(k)),
            _ => Ok(0.0),
        }
    }

    /// `P(X <= k)`.
    pub fn cdf(&self, k: Real) -> BackendResult {
        let k = k.floor();
        if k < self.lower() as Real {
            return Ok(0.0);
        }
        if k >= self.upper() as Real {
            return Ok(1.0);
        }
        if k < self.mode() {
            self.lower_tail(k)
        } else {
            Ok(1.0 - self.upper_tail(k)?)
        }
    }

    /// `P(X > k)`.
    pub fn sf(&self, k: Real) -> BackendResult {
        let k = k.floor();
        if k < self.lower() as Real {
            return Ok(1.0);
        }
        if k >= self.upper() as Real {
            return Ok(0.0);
        }
        if k < self.mode() {
            Ok(1.0 - self.lower_tail(k)?)
        } else {
            self.upper_tail(k)
        }
    }

    /// `draws · successes / total`.
    pub fn mean(&self) -> Real {
        self.draws as Real * self.successes as Real / self.total as Real
    }

    /// Variance, defined for `total > 1`.
    pub fn variance(&self) -> Real {
        let (n, m, t) = (self.successes as Real, self.draws as Real, self.total as Real);
        m * n * (t - n) * (t - m) / (t * t * (t - 1.0))
    }

    /// Skewness, defined for `total > 2`.
    pub fn skewness(&self) -> Real {
        let (n, m, t) = (self.successes as Real, self.draws as Real, self.total as Real);
        (t - 2.0 * n) * (t - 1.0).sqrt() * (t - 2.0 * m) / ((m * n * (t - n) * (t - m)).sqrt() * (t - 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn urn_by_hand() {
        // 5 successes in 12, draw 4: pmf(2) = C(5,2) C(7,2) / C(12,4) = 210/495
        let d = HypergeometricDistribution::new(5.0, 4.0, 12.0).unwrap();
        assert!(rel(d.pmf(2.0).unwrap(), 210.0 / 495.0) < 1e-13);
        // pmf(0) = 35/495, pmf(1) = 175/495
        assert!(rel(d.cdf(1.0).unwrap(), 210.0 / 495.0) < 1e-13);
        assert!(rel(d.sf(1.0).unwrap(), 285.0 / 495.0) < 1e-13);
        assert_eq!(d.cdf(4.0), Ok(1.0));
        assert_eq!(d.pmf(2.5), Ok(0.0));
    }

    #[test]
    fn support_ends() {
        // Drawing 9 of 12 with 5 successes forces at least 2.
        let d = HypergeometricDistribution::new(5.0, 9.0, 12.0).unwrap();
        assert_eq!(d.lower(), 2);
        assert_eq!(d.upper(), 5);
        assert_eq!(d.cdf(1.0), Ok(0.0));
        assert_eq!(d.sf(1.0), Ok(1.0));
        assert_eq!(d.pmf(1.0), Ok(0.0));
    }

    #[test]
    fn tails_against_exact_sums() {
        let d = HypergeometricDistribution::new(4000.0, 3000.0, 10000.0).unwrap();
        assert!(rel(d.pmf(1230.0).unwrap(), 0.007_270_467_142_235_896_7) < 1e-13);
        assert!(rel(d.cdf(1230.0).unwrap(), 0.912_783_354_374_692_6) < 1e-13);
        assert!(rel(d.sf(1230.0).unwrap(), 0.087_216_645_625_307_39) < 1e-12);
        assert!(rel(d.cdf(1100.0).unwrap(), 4.402_842_686_702_445e-6) < 1e-12);
        assert!(rel(d.sf(1330.0).unwrap(), 3.383_745_004_558_137e-9) < 1e-12);
    }

    #[test]
    fn huge_populations_stay_fast_and_precise() {
        let d = HypergeometricDistribution::new(1e9, 1e9, 2e9).unwrap();
        assert!(rel(d.pmf(5e8).unwrap(), 3.568_248_230_967_449e-5) < 1e-12);
        assert!(rel(d.pmf(500_030_000.0).unwrap(), 9.749_782_442_639_413e-7) < 1e-10);
        assert_eq!(d.cdf(3e8), Ok(0.0));
        assert_eq!(d.sf(3e8), Ok(1.0));
        let c = d.cdf(5e8).unwrap();
        assert!((c - 0.5).abs() < 1e-4, "cdf = {c}");
    }

    #[test]
    fn support_of_counts_near_the_integer_limit() {
        let d = HypergeometricDistribution::new(1e19, 1e19, 1.5e19).unwrap();
        assert_eq!(d.lower(), 5_000_000_000_000_000_000);
        assert_eq!(d.pmf(1.0), Ok(0.0));
        assert_eq!(d.cdf(1.0), Ok(0.0));
    }

    #[test]
    fn moments() {
        let d = HypergeometricDistribution::new(5.0, 4.0, 12.0).unwrap();
        assert!(rel(d.mean(), 20.0 / 12.0) < 1e-15);
        let mean: f64 = (0..=4).map(|k| k as f64 * d.pmf(k as f64).unwrap()).sum();
        let var: f64 = (0..=4).map(|k| (k as f64 - mean).powi(2) * d.pmf(k as f64).unwrap()).sum();
        assert!(rel(d.variance(), var) < 1e-12);
        let m3: f64 = (0..=4).map(|k| (k as f64 - mean).powi(3) * d.pmf(k as f64).unwrap()).sum();
        assert!(rel(d.skewness(), m3 / var.powf(1.5)) < 1e-11);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(HypergeometricDistribution::new(13.0, 4.0, 12.0), Err(Signal::Domain));
        assert_eq!(HypergeometricDistribution::new(5.0, 4.5, 12.0), Err(Signal::Domain));
    }
}
