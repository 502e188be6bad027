//! Fisher-Snedecor F distribution.
//!
//! With `y = a x/(a x + b)` the CDF is `I_y(a/2, b/2)`. Quantiles invert
//! whichever beta tail is smaller and map back through
//! `x = b y / (a (1 - y))`.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use crate::special::{beta_density, ibeta, ibeta_inv};

/// F distribution with `dfn` numerator and `dfd` denominator degrees of
/// freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherFDistribution {
    dfn: Real,
    dfd: Real,
}

impl FisherFDistribution {
    /// Requires finite `dfn, dfd > 0`.
    pub fn new(dfn: Real, dfd: Real) -> Result<Self, Signal> {
        let positive = |v: Real| v > 0.0 && v.is_finite();
        if positive(dfn) && positive(dfd) {
            Ok(Self { dfn, dfd })
        } else {
            Err(Signal::Domain)
        }
    }

    fn beta_argument(&self, x: Real) -> (Real, Real) {
        let ax = self.dfn * x;
        let denom = ax + self.dfd;
        (ax / denom, self.dfd / denom)
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if x < 0.0 || x.is_infinite() {
            return Ok(0.0);
        }
        if x == 0.0 {
            return Ok(match self.dfn {
                a if a < 2.0 => Real::INFINITY,
                a if a == 2.0 => 1.0,
                _ => 0.0,
            });
        }
        let (y, yc) = self.beta_argument(x);
        let density = beta_density(0.5 * self.dfn, 0.5 * self.dfd, y, yc)?;
        Ok(density * self.dfn / self.dfd * yc * yc)
    }

    /// `P(X <= x)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(0.0);
        }
        if x.is_infinite() {
            return Ok(1.0);
        }
        let (y, _) = self.beta_argument(x);
        ibeta(0.5 * self.dfn, 0.5 * self.dfd, y)
    }

    /// `P(X > x)`.
    pub fn sf(&self, x: Real) -> BackendResult {
        if x <= 0.0 {
            return Ok(1.0);
        }
        if x.is_infinite() {
            return Ok(0.0);
        }
        let (_, yc) = self.beta_argument(x);
        ibeta(0.5 * self.dfd, 0.5 * self.dfn, yc)
    }

    /// `x` from `y` and `1 - y`.
    fn from_beta(&self, y: Real, yc: Real) -> Real {
        self.dfd * y / (self.dfn * yc)
    }

    /// Quantile.
    pub fn ppf(&self, p: Real) -> BackendResult {
        let (a, b) = (0.5 * self.dfn, 0.5 * self.dfd);
        if p <= 0.5 {
            let y = ibeta_inv(a, b, p)?;
            Ok(self.from_beta(y, 1.0 - y))
        } else {
            let yc = ibeta_inv(b, a, 1.0 - p)?;
            Ok(self.from_beta(1.0 - yc, yc))
        }
    }

    /// Inverse survival.
    pub fn isf(&self, q: Real) -> BackendResult {
        let (a, b) = (0.5 * self.dfn, 0.5 * self.dfd);
        if q <= 0.5 {
            let yc = ibeta_inv(b, a, q)?;
            Ok(self.from_beta(1.0 - yc, yc))
        } else {
            let y = ibeta_inv(a, b, 1.0 - q)?;
            Ok(self.from_beta(y, 1.0 - y))
        }
    }

    /// `b / (b - 2)`, for `dfd > 2`.
    pub fn mean(&self) -> Real {
        self.dfd / (self.dfd - 2.0)
    }

    /// `2 b² (a + b - 2) / (a (b - 2)² (b - 4))`, for `dfd > 4`.
    pub fn variance(&self) -> Real {
        let (a, b) = (self.dfn, self.dfd);
        2.0 * b * b * (a + b - 2.0) / (a * (b - 2.0).powi(2) * (b - 4.0))
    }

    /// Skewness, for `dfd > 6`.
    pub fn skewness(&self) -> Real {
        let (a, b) = (self.dfn, self.dfd);
        (2.0 * a + b - 2.0) * (8.0 * (b - 4.0)).sqrt() / ((b - 6.0) * (a * (a + b - 2.0)).sqrt())
    }

    /// Excess kurtosis, for `dfd > 8`.
    pub fn kurtosis_excess(&self) -> Real {
        let (a, b) = (self.dfn, self.dfd);
        let m = a + b - 2.0;
        12.0 * (a * (5.0 * b - 22.0) * m + (b - 4.0) * (b - 2.0).powi(2)) / (a * (b - 6.0) * (b - 8.0) * m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn two_two_closed_form() {
        // F(2, 2): cdf = x/(1 + x), pdf = 1/(1 + x)²
        let d = FisherFDistribution::new(2.0, 2.0).unwrap();
        assert!(rel(d.cdf(3.0).unwrap(), 0.75) < 1e-15);
        assert!(rel(d.sf(3.0).unwrap(), 0.25) < 1e-15);
        assert!(rel(d.pdf(3.0).unwrap(), 1.0 / 16.0) < 1e-14);
        assert_eq!(d.pdf(0.0), Ok(1.0));
        assert!(rel(d.ppf(0.75).unwrap(), 3.0) < 1e-13);
        assert!(rel(d.isf(0.25).unwrap(), 3.0) < 1e-13);
    }

    #[test]
    fn density_at_the_origin() {
        assert_eq!(FisherFDistribution::new(1.0, 5.0).unwrap().pdf(0.0), Ok(f64::INFINITY));
        assert_eq!(FisherFDistribution::new(3.0, 5.0).unwrap().pdf(0.0), Ok(0.0));
    }

    #[test]
    fn far_right_tail() {
        // F(2, 2): sf = 1/(1 + x)
        let d = FisherFDistribution::new(2.0, 2.0).unwrap();
        let sf = d.sf(1e17).unwrap();
        assert!(rel(sf, 1e-17) < 1e-12, "sf = {sf}");
        assert_eq!(d.cdf(1e17), Ok(1.0));
    }

    #[test]
    fn quantile_round_trip() {
        let d = FisherFDistribution::new(5.0, 11.0).unwrap();
        for p in [1e-9, 0.1, 0.5, 0.9] {
            let x = d.ppf(p).unwrap();
            assert!(rel(d.cdf(x).unwrap(), p) < 1e-10, "p = {p}");
            let x = d.isf(p).unwrap();
            assert!(rel(d.sf(x).unwrap(), p) < 1e-10, "q = {p}");
        }
    }

    #[test]
    fn moments() {
        let d = FisherFDistribution::new(4.0, 12.0).unwrap();
        assert!(rel(d.mean(), 1.2) < 1e-15);
        assert!(rel(d.variance(), 2.0 * 144.0 * 14.0 / (4.0 * 100.0 * 8.0)) < 1e-15);
        assert!(rel(d.skewness(), 18.0 * 8.0 / (6.0 * 56.0_f64.sqrt())) < 1e-14);
        assert!(rel(d.kurtosis_excess(), 26.142_857_142_857_142) < 1e-14);
    }
}
