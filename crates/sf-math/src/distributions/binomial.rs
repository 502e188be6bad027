//! Binomial distribution.
//!
//! Tails come from the incomplete beta identity
//! `P(X <= k) = I_{1-p}(n - k, k + 1)`; the survival function is the same
//! function with the arguments swapped rather than `1 - cdf`.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::factorial::ln_binomial;

use super::quantile::{discrete_quantile, Target};
use crate::special::{ibeta, ibetac};

/// Binomial distribution with `n` trials and success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialDistribution {
    n: Real,
    p: Real,
}

impl BinomialDistribution {
    /// Requires a non-negative integer `n` and `p ∈ [0, 1]`.
    pub fn new(n: Real, p: Real) -> Result<Self, Signal> {
        let integral = n >= 0.0 && n.is_finite() && n.fract() == 0.0;
        if integral && (0.0..=1.0).contains(&p) {
            Ok(Self { n, p })
        } else {
            Err(Signal::Domain)
        }
    }

    /// Probability mass function. Zero off the integers.
    pub fn pmf(&self, k: Real) -> BackendResult {
        let (n, p) = (self.n, self.p);
        if k < 0.0 || k > n || k.fract() != 0.0 {
            return Ok(0.0);
        }
        if p == 0.0 {
            return Ok(if k == 0.0 { 1.0 } else { 0.0 });
        }
        if p == 1.0 {
            return Ok(if k == n { 1.0 } else { 0.0 });
        }
        let log = ln_binomial(n as u64, k as u64) + k * p.ln() + (n - k) * (-p).ln_1p();
        Ok(log.exp())
    }

    /// `P(X <= k)`.
    pub fn cdf(&self, k: Real) -> BackendResult {
        if k < 0.0 {
            return Ok(0.0);
        }
        let k = k.floor();
        if k >= self.n || self.p == 0.0 {
            return Ok(1.0);
        }
        if self.p == 1.0 {
            return Ok(0.0);
        }
        ibetac(k + 1.0, self.n - k, self.p)
    }

    /// `P(X > k)`.
    pub fn sf(&self, k: Real) -> BackendResult {
        if k < 0.0 {
            return Ok(1.0);
        }
        let k = k.floor();
        if k >= self.n || self.p == 0.0 {
            return Ok(0.0);
        }
        if self.p == 1.0 {
            return Ok(1.0);
        }
        ibeta(k + 1.0, self.n - k, self.p)
    }

    /// Smallest `k` with `cdf(k) >= p`.
    pub fn ppf(&self, p: Real) -> BackendResult {
        self.quantile(Target::lower(p))
    }

    /// Smallest `k` with `sf(k) <= q`.
    pub fn isf(&self, q: Real) -> BackendResult {
        self.quantile(Target::upper(q))
    }

    fn quantile(&self, target: Target) -> BackendResult {
        discrete_quantile(|k| self.cdf(k), |k| self.sf(k), target, 0.0, self.n, self.mean())
    }

    /// `n p`.
    pub fn mean(&self) -> Real {
        self.n * self.p
    }

    /// `n p (1 - p)`.
    pub fn variance(&self) -> Real {
        self.n * self.p * (1.0 - self.p)
    }

    /// `(1 - 2p) / √(n p (1 - p))`.
    pub fn skewness(&self) -> Real {
        (1.0 - 2.0 * self.p) / self.variance().sqrt()
    }

    /// `(1 - 6 p (1 - p)) / (n p (1 - p))`.
    pub fn kurtosis_excess(&self) -> Real {
        let pq = self.p * (1.0 - self.p);
        (1.0 - 6.0 * pq) / (self.n * pq)
    }
}
