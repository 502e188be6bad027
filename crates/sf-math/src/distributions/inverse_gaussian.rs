//! Inverse Gaussian (Wald) distribution with mean `μ` and shape `λ`.
//!
//! ```text
//! cdf = Φ(r₁) + exp(2λ/μ) Φ(-r₂)
//! r₁ = √(λ/x) (x/μ - 1),   r₂ = √(λ/x) (x/μ + 1)
//! ```
//!
//! The second term is formed in log space: `exp(2λ/μ)` overflows long
//! before the product does.

use std::f64::consts::PI;

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use super::quantile::{positive_quantile, Target};
use crate::special::{normal_cdf, normal_ln_sf, normal_sf};

/// Inverse Gaussian distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseGaussianDistribution {
    mean: Real,
    scale: Real,
}

impl InverseGaussianDistribution {
    /// Requires finite `mean > 0` and finite `scale > 0`.
    pub fn new(mean: Real, scale: Real) -> Result<Self, Signal> {
        let positive = |v: Real| v > 0.0 && v.is_finite();
        if positive(mean) && positive(scale) {
            Ok(Self { mean, scale })
        } else {
            Err(Signal::Domain)
        }
    }

    /// `(r₁, ln[exp(2λ/μ) Φ(-r₂)])`.
    fn terms(&self, x: Real) -> (Real, Real) {
        let root = (self.scale / x).sqrt();
        let ratio = x / self.mean;
        let r1 = root * (ratio - 1.0);
        let r2 = root * (ratio + 1.0);
        (r1, 2.0 * self.scale / self.mean + normal_ln_sf(r2))
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if x <= 0.0 || x.is_infinite() {
            return Ok(0.0);
        }
        let (mu, lambda) = (self.mean, self.scale);
        let d = x - mu;
        Ok((lambda / (2.0 * PI * x * x * x)).sqrt() * (-lambda * d * d / (2.0 * mu * mu * x)).exp())
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(0.0);
        }
        if x.is_infinite() {
            return Ok(1.0);
        }
        let (r1, ln_tail) = self.terms(x);
        Ok((normal_cdf(r1) + ln_tail.exp()).clamp(0.0, 1.0))
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(1.0);
        }
        if x.is_infinite() {
            return Ok(0.0);
        }
        let (r1, ln_tail) = self.terms(x);
        Ok((normal_sf(r1) - ln_tail.exp()).clamp(0.0, 1.0))
    }

    /// Quantile.
    pub fn ppf(&self, p: Real) -> BackendResult {
        self.quantile(Target::lower(p))
    }

    /// Inverse survival.
    pub fn isf(&self, q: Real) -> BackendResult {
        self.quantile(Target::upper(q))
    }

    fn quantile(&self, target: Target) -> BackendResult {
        positive_quantile(|x| self.cdf(x), |x| self.sf(x), target, self.mean)
    }

    /// `μ`.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// `μ³/λ`.
    pub fn variance(&self) -> Real {
        self.mean.powi(3) / self.scale
    }

    /// `3 √(μ/λ)`.
    pub fn skewness(&self) -> Real {
        3.0 * (self.mean / self.scale).sqrt()
    }

    /// `15 μ/λ`.
    pub fn kurtosis_excess(&self) -> Real {
        15.0 * self.mean / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn reference_values() {
        let d = InverseGaussianDistribution::new(2.0, 3.0).unwrap();
        for &(x, pdf, cdf, sf) in REFERENCE {
            assert!(rel(d.pdf(x).unwrap(), pdf) < 1e-13, "pdf({x})");
            assert!(rel(d.cdf(x).unwrap(), cdf) < 1e-12, "cdf({x})");
            assert!(rel(d.sf(x).unwrap(), sf) < 1e-11, "sf({x})");
        }
    }

    // (x, pdf, cdf, sf) for μ = 2, λ = 3
    const REFERENCE: &[(f64, f64, f64, f64)] = &[
        (0.3, 0.113_474_948_738_576_07, 0.006_368_970_212_580_247_8, 0.993_631_029_787_419_75),
        (1.5, 0.353_338_043_125_371_41, 0.495_690_124_841_629_48, 0.504_309_875_158_370_52),
        (6.0, 0.017_296_145_725_858_113, 0.968_327_805_814_213_15, 0.031_672_194_185_786_854),
    ];

    #[test]
    fn large_shape_ratio_does_not_overflow() {
        // exp(2λ/μ) = exp(2000) on its own is infinite.
        let d = InverseGaussianDistribution::new(1.0, 1000.0).unwrap();
        let c = d.cdf(1.05).unwrap();
        assert!(rel(c, 0.940_505_689_455_142_17) < 1e-11, "cdf = {c}");
    }

    #[test]
    fn quantile_round_trip() {
        let d = InverseGaussianDistribution::new(0.7, 1.8).unwrap();
        for p in [1e-6, 0.25, 0.5, 0.95] {
            let x = d.ppf(p).unwrap();
            assert!(rel(d.cdf(x).unwrap(), p) < 1e-10, "p = {p}");
        }
    }

    #[test]
    fn moments() {
        let d = InverseGaussianDistribution::new(2.0, 3.0).unwrap();
        assert_eq!(d.mean(), 2.0);
        assert!(rel(d.variance(), 8.0 / 3.0) < 1e-15);
        assert!(rel(d.skewness(), 3.0 * (2.0_f64 / 3.0).sqrt()) < 1e-15);
        assert!(rel(d.kurtosis_excess(), 10.0) < 1e-15);
    }
}
