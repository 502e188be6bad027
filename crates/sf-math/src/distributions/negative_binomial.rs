//! Negative binomial distribution: failures before the `r`-th success.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::gamma::ln_gamma;

use super::quantile::{discrete_quantile, Target};
use crate::special::{ibeta, ibetac};

/// Negative binomial distribution with `r` successes and success
/// probability `p`. `r` need not be an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomialDistribution {
    r: Real,
    p: Real,
}

impl NegativeBinomialDistribution {
    /// Requires finite `r > 0` and `p ∈ (0, 1]`.
    pub fn new(r: Real, p: Real) -> Result<Self, Signal> {
        if r > 0.0 && r.is_finite() && p > 0.0 && p <= 1.0 {
            Ok(Self { r, p })
        } else {
            Err(Signal::Domain)
        }
    }

    /// Probability mass function. Zero off the non-negative integers.
    pub fn pmf(&self, k: Real) -> BackendResult {
        if k < 0.0 || k.fract() != 0.0 || k.is_infinite() {
            return Ok(0.0);
        }
        if self.p == 1.0 {
            return Ok(if k == 0.0 { 1.0 } else { 0.0 });
        }
        let r = self.r;
        let log = ln_gamma(k + r) - ln_gamma(k + 1.0) - ln_gamma(r) + r * self.p.ln() + k * (-self.p).ln_1p();
        Ok(log.exp())
    }

    /// `P(X <= k) = I_p(r, k + 1)`.
    pub fn cdf(&self, k: Real) -> BackendResult {
        if k < 0.0 {
            return Ok(0.0);
        }
        if k.is_infinite() {
            return Ok(1.0);
        }
        ibeta(self.r, k.floor() + 1.0, self.p)
    }

    /// `P(X > k)`.
    pub fn sf(&self, k: Real) -> BackendResult {
        if k < 0.0 {
            return Ok(1.0);
        }
        if k.is_infinite() {
            return Ok(0.0);
        }
        ibetac(self.r, k.floor() + 1.0, self.p)
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
        discrete_quantile(
            |k| self.cdf(k),
            |k| self.sf(k),
            target,
            0.0,
            Real::INFINITY,
            self.mean(),
        )
    }

    /// `r (1 - p) / p`.
    pub fn mean(&self) -> Real {
        self.r * (1.0 - self.p) / self.p
    }

    /// `r (1 - p) / p²`.
    pub fn variance(&self) -> Real {
        self.mean() / self.p
    }

    /// `(2 - p) / √(r (1 - p))`.
    pub fn skewness(&self) -> Real {
        (2.0 - self.p) / (self.r * (1.0 - self.p)).sqrt()
    }

    /// `6/r + p² / (r (1 - p))`.
    pub fn kurtosis_excess(&self) -> Real {
        6.0 / self.r + self.p * self.p / (self.r * (1.0 - self.p))
    }
}
