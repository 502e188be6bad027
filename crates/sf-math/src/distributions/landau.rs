//! Landau distribution.
//!
//! No closed form exists; every quantity is a single integral over
//! `ψ ∈ (0, π)` of the Zolotarev representation. With
//!
//! ```text
//! ln V(ψ) = ln(2/π) + ln(ψ / sin ψ) - ψ cot ψ
//! a(ψ)    = -πu/2 + ln V(ψ),   u = (x - μ)/c - (2/π) ln c
//! ```
//!
//! the standard functions are
//!
//! ```text
//! pdf = ½ ∫ exp(a - eᵃ) dψ / c
//! cdf = 1/π ∫ exp(-eᵃ) dψ
//! sf  = 1/π ∫ (1 - exp(-eᵃ)) dψ
//! ```
//!
//! `ln V` increases from `ln(2/π) - 1` at `ψ = 0` to `+∞` at `ψ = π`, so
//! the integrands switch from one regime to the other around the single
//! root of `a(ψ) = 0`. The quadrature is split there.

use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, PI};

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use super::quantile::{real_quantile, Target};
use crate::integrals::{Integrator, TanhSinhIntegral};
use crate::solvers1d::brent;

/// `ln V(0) = ln(2/π) - 1`.
const LN_V_AT_ZERO: Real = -1.451_582_705_289_454_8;

const RELATIVE_TOLERANCE: Real = 1e-13;
const MAX_REFINEMENTS: usize = 12;

fn ln_v(psi: Real) -> Real {
    if psi <= 0.0 {
        return LN_V_AT_ZERO;
    }
    if psi >= PI {
        return Real::INFINITY;
    }
    let (sin, cos) = psi.sin_cos();
    FRAC_2_PI.ln() + (psi / sin).ln() - psi * cos / sin
}

/// Landau distribution with location `loc` and scale `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandauDistribution {
    loc: Real,
    scale: Real,
}

impl LandauDistribution {
    /// Requires finite `loc` and finite `scale > 0`.
    pub fn new(loc: Real, scale: Real) -> Result<Self, Signal> {
        if loc.is_finite() && scale > 0.0 && scale.is_finite() {
            Ok(Self { loc, scale })
        } else {
            Err(Signal::Domain)
        }
    }

    /// The standardized argument `u`.
    fn standardize(&self, x: Real) -> Real {
        (x - self.loc) / self.scale - FRAC_2_PI * self.scale.ln()
    }

    /// `∫₀^π g(a(ψ)) dψ`.
    fn integrate<G: Fn(Real) -> Real>(&self, u: Real, g: G) -> BackendResult {
        let lg = -FRAC_PI_2 * u;
        let integrand = |psi: Real| g(lg + ln_v(psi));
        let rule = TanhSinhIntegral::new(RELATIVE_TOLERANCE, MAX_REFINEMENTS);
        let upper = PI * (1.0 - Real::EPSILON);
        let value = if lg + LN_V_AT_ZERO < 0.0 {
            let root = brent(|psi| lg + ln_v(psi), 0.0, upper, 0.0)?;
            rule.integrate_split(integrand, 0.0, root, PI)?
        } else {
            rule.integrate(integrand, 0.0, PI)?
        };
        Ok(value)
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if x.is_infinite() {
            return Ok(0.0);
        }
        let integral = self.integrate(self.standardize(x), |a| (a - a.exp()).exp())?;
        Ok(0.5 * integral / self.scale)
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        match x {
            x if x == Real::INFINITY => Ok(1.0),
            x if x == Real::NEG_INFINITY => Ok(0.0),
            x => {
                let integral = self.integrate(self.standardize(x), |a| (-a.exp()).exp())?;
                Ok((integral / PI).clamp(0.0, 1.0))
            }
        }
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        match x {
            x if x == Real::INFINITY => Ok(0.0),
            x if x == Real::NEG_INFINITY => Ok(1.0),
            x => {
                let integral = self.integrate(self.standardize(x), |a| -(-a.exp()).exp_m1())?;
                Ok((integral / PI).clamp(0.0, 1.0))
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
        let guess = self.loc + self.scale * FRAC_2_PI * self.scale.ln();
        real_quantile(|x| self.cdf(x), |x| self.sf(x), target, guess, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    // (x, pdf, cdf) of the standard distribution.
    const STANDARD: &[(f64, f64, f64)] = &[
        (-2.0, 0.006_507_636_8, 7.071_140_6e-4),
        (-0.5, 0.282_979_296_5, 0.226_682_452_0),
        (0.0, 0.262_240_126_4, 0.365_238_701_5),
        (1.0, 0.163_531_240_9, 0.577_866_759_6),
        (3.0, 0.058_639_488_3, 0.779_296_673_4),
        (10.0, 0.007_298_221_4, 0.929_103_293_6),
    ];

    #[test]
    fn standard_values() {
        let d = LandauDistribution::new(0.0, 1.0).unwrap();
        for &(x, pdf, cdf) in STANDARD {
            assert!(rel(d.pdf(x).unwrap(), pdf) < 1e-8, "pdf({x}) = {}", d.pdf(x).unwrap());
            assert!(rel(d.cdf(x).unwrap(), cdf) < 1e-8, "cdf({x}) = {}", d.cdf(x).unwrap());
            assert!(rel(d.sf(x).unwrap(), 1.0 - cdf) < 1e-8, "sf({x})");
        }
    }

    #[test]
    fn complement_and_normalization() {
        let d = LandauDistribution::new(1.5, 2.0).unwrap();
        for x in [-3.0, 0.5, 4.0, 40.0] {
            let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
            assert!((total - 1.0).abs() < 1e-12, "x = {x}: {total}");
        }
    }

    #[test]
    fn location_scale_shift() {
        // u = (x - μ)/c - (2/π) ln c
        let d = LandauDistribution::new(1.0, 2.0).unwrap();
        let standard = LandauDistribution::new(0.0, 1.0).unwrap();
        let x = 1.0 + 2.0 * (1.0 + FRAC_2_PI * 2.0_f64.ln());
        assert!(rel(d.cdf(x).unwrap(), standard.cdf(1.0).unwrap()) < 1e-12);
        assert!(rel(d.pdf(x).unwrap(), standard.pdf(1.0).unwrap() / 2.0) < 1e-12);
    }

    #[test]
    fn quantile_round_trip() {
        let d = LandauDistribution::new(-0.5, 0.8).unwrap();
        for p in [0.01, 0.3, 0.5, 0.9] {
            let x = d.ppf(p).unwrap();
            assert!(rel(d.cdf(x).unwrap(), p) < 1e-9, "p = {p}");
        }
        let x = d.isf(1e-4).unwrap();
        assert!(rel(d.sf(x).unwrap(), 1e-4) < 1e-8);
    }
}
