//! Skew-normal distribution.
//!
//! Density `2/ω φ(z) Φ(αz)` with `z = (x - ξ)/ω`. The CDF is
//! `Φ(z) - 2T(z, α)` with Owen's T, and the survival function
//! `Φ(-z) + 2T(z, α)`.

use std::f64::consts::{FRAC_2_PI, PI};

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use super::quantile::{real_quantile, Target};
use crate::special::{normal_cdf, normal_pdf, normal_sf, owens_t};

/// Skew-normal distribution with location `loc`, scale `scale` and shape
/// `shape`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewNormalDistribution {
    loc: Real,
    scale: Real,
    shape: Real,
}

impl SkewNormalDistribution {
    /// Requires finite `loc`, finite `scale > 0` and finite `shape`.
    pub fn new(loc: Real, scale: Real, shape: Real) -> Result<Self, Signal> {
        if loc.is_finite() && scale > 0.0 && scale.is_finite() && shape.is_finite() {
            Ok(Self { loc, scale, shape })
        } else {
            Err(Signal::Domain)
        }
    }

    #[inline]
    fn standardize(&self, x: Real) -> Real {
        (x - self.loc) / self.scale
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if x.is_infinite() {
            return Ok(0.0);
        }
        let z = self.standardize(x);
        Ok(2.0 / self.scale * normal_pdf(z) * normal_cdf(self.shape * z))
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        match x {
            x if x == Real::INFINITY => Ok(1.0),
            x if x == Real::NEG_INFINITY => Ok(0.0),
            x => {
                let z = self.standardize(x);
                Ok((normal_cdf(z) - 2.0 * owens_t(z, self.shape)?).clamp(0.0, 1.0))
            }
        }
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        match x {
            x if x == Real::INFINITY => Ok(0.0),
            x if x == Real::NEG_INFINITY => Ok(1.0),
            x => {
                let z = self.standardize(x);
                Ok((normal_sf(z) + 2.0 * owens_t(z, self.shape)?).clamp(0.0, 1.0))
            }
        }
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
        real_quantile(|x| self.cdf(x), |x| self.sf(x), target, self.mean(), self.scale)
    }

    /// `δ √(2/π)` with `δ = α/√(1 + α²)`.
    fn mean_offset(&self) -> Real {
        let delta = self.shape / (1.0 + self.shape * self.shape).sqrt();
        delta * FRAC_2_PI.sqrt()
    }

    /// `ξ + ω δ √(2/π)`.
    pub fn mean(&self) -> Real {
        self.loc + self.scale * self.mean_offset()
    }

    /// `ω² (1 - 2δ²/π)`.
    pub fn variance(&self) -> Real {
        let m = self.mean_offset();
        self.scale * self.scale * (1.0 - m * m)
    }

    /// Skewness.
    pub fn skewness(&self) -> Real {
        let m = self.mean_offset();
        let v = 1.0 - m * m;
        0.5 * (4.0 - PI) * m * m * m / (v * v.sqrt())
    }

    /// Excess kurtosis.
    pub fn kurtosis_excess(&self) -> Real {
        let m2 = self.mean_offset().powi(2);
        let v = 1.0 - m2;
        2.0 * (PI - 3.0) * m2 * m2 / (v * v)
    }
}
