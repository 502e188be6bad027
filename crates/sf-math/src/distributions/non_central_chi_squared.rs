//! Non-central chi-squared distribution.
//!
//! A Poisson(λ/2) mixture of central chi-squared laws with `k + 2j`
//! degrees of freedom: the CDF and survival function sum regularized
//! incomplete gamma functions `P(k/2 + j, x/2)` or `Q(k/2 + j, x/2)`.
//! Only the smaller tail is summed: the survival function right of the
//! mean `k + λ`, the CDF left of it. The other is one minus that sum, so
//! the pair always adds to one.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::gamma::ln_gamma;

use super::poisson_mixture::{poisson_mixture, probability_mixture};
use super::quantile::{positive_quantile, Target};
use crate::special::{gamma_p, gamma_q};

/// Non-central chi-squared distribution with `df` degrees of freedom and
/// non-centrality `nc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonCentralChiSquaredDistribution {
    df: Real,
    nc: Real,
}

impl NonCentralChiSquaredDistribution {
    /// Requires finite `df > 0` and finite `nc >= 0`.
    pub fn new(df: Real, nc: Real) -> Result<Self, Signal> {
        if df > 0.0 && df.is_finite() && nc >= 0.0 && nc.is_finite() {
            Ok(Self { df, nc })
        } else {
            Err(Signal::Domain)
        }
    }

    /// Degrees of freedom.
    pub fn df(&self) -> Real {
        self.df
    }

    /// Non-centrality.
    pub fn nc(&self) -> Real {
        self.nc
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if x < 0.0 || x.is_infinite() {
            return Ok(0.0);
        }
        if x == 0.0 {
            return Ok(match self.df {
                k if k < 2.0 => Real::INFINITY,
                k if k == 2.0 => 0.5 * (-0.5 * self.nc).exp(),
                _ => 0.0,
            });
        }
        let half_x = 0.5 * x;
        let ln_half_x = half_x.ln();
        poisson_mixture(0.5 * self.nc, |j| {
            let shape = 0.5 * self.df + j;
            Ok(0.5 * ((shape - 1.0) * ln_half_x - half_x - ln_gamma(shape)).exp())
        })
    }

    /// `(P(X <= x), P(X > x))` for finite `x > 0`.
    fn tails(&self, x: Real) -> Result<(Real, Real), Signal> {
        let (shape, half_x) = (0.5 * self.df, 0.5 * x);
        if x > self.mean() {
            let sf = probability_mixture(0.5 * self.nc, |j| gamma_q(shape + j, half_x))?;
            Ok((1.0 - sf, sf))
        } else {
            let cdf = probability_mixture(0.5 * self.nc, |j| gamma_p(shape + j, half_x))?;
            Ok((cdf, 1.0 - cdf))
        }
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(0.0);
        }
        if x.is_infinite() {
            return Ok(1.0);
        }
        Ok(self.tails(x)?.0)
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(1.0);
        }
        if x.is_infinite() {
            return Ok(0.0);
        }
        Ok(self.tails(x)?.1)
    }

    /// Quantile: `x` with `cdf(x) = p`.
    pub fn ppf(&self, p: Real) -> BackendResult {
        self.quantile(Target::lower(p))
    }

    /// Inverse survival: `x` with `sf(x) = q`.
    pub fn isf(&self, q: Real) -> BackendResult {
        self.quantile(Target::upper(q))
    }

    fn quantile(&self, target: Target) -> BackendResult {
        positive_quantile(|x| self.cdf(x), |x| self.sf(x), target, self.mean())
    }

    /// `k + λ`.
    pub fn mean(&self) -> Real {
        self.df + self.nc
    }

    /// `2(k + 2λ)`.
    pub fn variance(&self) -> Real {
        2.0 * (self.df + 2.0 * self.nc)
    }

    /// `2^{3/2} (k + 3λ) / (k + 2λ)^{3/2}`.
    pub fn skewness(&self) -> Real {
        let s = self.df + 2.0 * self.nc;
        2.0 * std::f64::consts::SQRT_2 * (self.df + 3.0 * self.nc) / (s * s.sqrt())
    }

    /// `12 (k + 4λ) / (k + 2λ)²`.
    pub fn kurtosis_excess(&self) -> Real {
        let s = self.df + 2.0 * self.nc;
        12.0 * (self.df + 4.0 * self.nc) / (s * s)
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
        let d = NonCentralChiSquaredDistribution::new(4.0, 2.0).unwrap();
        assert!(rel(d.cdf(3.0).unwrap(), 0.246_272_701_461_981_38) < 1e-12);
        assert!(rel(d.pdf(3.0).unwrap(), 0.120_836_490_927_111_32) < 1e-12);

        let d = NonCentralChiSquaredDistribution::new(3.0, 20.0).unwrap();
        assert!(rel(d.cdf(50.0).unwrap(), 0.992_278_594_068_20) < 1e-12);
        assert!(rel(d.sf(50.0).unwrap(), 0.007_721_405_931_8) < 1e-9);

        let d = NonCentralChiSquaredDistribution::new(1.0, 0.3).unwrap();
        assert!(rel(d.cdf(0.5).unwrap(), 0.458_546_556_315_97) < 1e-12);
        assert!(rel(d.pdf(0.5).unwrap(), 0.406_907_985_061_88) < 1e-12);
    }

    #[test]
    fn central_case() {
        // λ = 0, k = 2: cdf = 1 - e^{-x/2}
        let d = NonCentralChiSquaredDistribution::new(2.0, 0.0).unwrap();
        assert!(rel(d.cdf(3.0).unwrap(), -(-1.5_f64).exp_m1()) < 1e-14);
        assert!(rel(d.sf(3.0).unwrap(), (-1.5_f64).exp()) < 1e-14);
    }

    #[test]
    fn far_right_tail() {
        let d = NonCentralChiSquaredDistribution::new(2.0, 1.0).unwrap();
        let cdf = d.cdf(200.0).unwrap();
        let sf = d.sf(200.0).unwrap();
        assert_eq!(1.0 - cdf, 0.0);
        assert!(rel(sf, 3.59e-39) < 1e-2, "sf = {sf}");
    }

    #[test]
    fn cdf_never_exceeds_one() {
        for &(k, nc, x) in &[(2.0, 1.0, 200.0), (10.0, 30.0, 400.0), (1.0, 1e-3, 90.0)] {
            let d = NonCentralChiSquaredDistribution::new(k, nc).unwrap();
            let cdf = d.cdf(x).unwrap();
            assert!(cdf <= 1.0 && cdf > 1.0 - 1e-14, "cdf = {cdf}");
        }
        let d = NonCentralChiSquaredDistribution::new(4.0, 7.0).unwrap();
        for x in [0.5, 5.0, 11.0, 11.5, 30.0] {
            let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
            assert!((total - 1.0).abs() <= f64::EPSILON, "x = {x}");
        }
    }

    #[test]
    fn density_at_the_origin() {
        let d = NonCentralChiSquaredDistribution::new(1.0, 1.0).unwrap();
        assert_eq!(d.pdf(0.0), Ok(f64::INFINITY));
        let d = NonCentralChiSquaredDistribution::new(2.0, 1.0).unwrap();
        assert!(rel(d.pdf(0.0).unwrap(), 0.5 * (-0.5_f64).exp()) < 1e-15);
    }

    #[test]
    fn quantile_round_trip() {
        let d = NonCentralChiSquaredDistribution::new(5.0, 3.5).unwrap();
        for p in [1e-8, 0.05, 0.5, 0.95] {
            let x = d.ppf(p).unwrap();
            assert!(rel(d.cdf(x).unwrap(), p) < 1e-10, "p = {p}");
        }
        let x = d.isf(1e-12).unwrap();
        assert!(rel(d.sf(x).unwrap(), 1e-12) < 1e-9);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(NonCentralChiSquaredDistribution::new(0.0, 1.0), Err(Signal::Domain));
        assert_eq!(NonCentralChiSquaredDistribution::new(1.0, -1.0), Err(Signal::Domain));
    }
}
