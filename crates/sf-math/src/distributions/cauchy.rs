//! Cauchy distribution.
//!
//! Both tails are computed from `atan(1/z)` once `|z| > 1`, so neither
//! `cdf` in the left tail nor `sf` in the right tail is a difference of
//! numbers close to `½`. The quantile is closed form.

use std::f64::consts::{FRAC_1_PI, PI};

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::distribution::{Cauchy, Continuous};

use super::quantile::Target;

/// Cauchy distribution with location `loc` and scale `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CauchyDistribution {
    loc: Real,
    scale: Real,
    law: Cauchy,
}

/// `P(Z <= z)` of the standard Cauchy.
fn standard_cdf(z: Real) -> Real {
    if z < -1.0 {
        (-1.0 / z).atan() * FRAC_1_PI
    } else {
        0.5 + z.atan() * FRAC_1_PI
    }
}

impl CauchyDistribution {
    /// Requires finite `loc` and finite `scale > 0`.
    pub fn new(loc: Real, scale: Real) -> Result<Self, Signal> {
        if !(loc.is_finite() && scale.is_finite()) {
            return Err(Signal::Domain);
        }
        let law = Cauchy::new(loc, scale).map_err(|_| Signal::Domain)?;
        Ok(Self { loc, scale, law })
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        Ok(self.law.pdf(x))
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        Ok(standard_cdf((x - self.loc) / self.scale))
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        Ok(standard_cdf((self.loc - x) / self.scale))
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
        // tan(π(p - ½)) = -1/tan(πp) = 1/tan(πq)
        let z = if target.uses_cdf() {
            -1.0 / (PI * target.p).tan()
        } else {
            1.0 / (PI * target.q).tan()
        };
        Ok(self.loc + self.scale * z)
    }
}
