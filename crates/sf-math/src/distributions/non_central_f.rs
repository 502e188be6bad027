//! Non-central F distribution.
//!
//! `X = (χ²_a(λ)/a) / (χ²_b/b)`. With `y = a x/(a x + b)` the CDF is the
//! Poisson(λ/2) mixture `Σ w_j I_y(a/2 + j, b/2)` and the survival function
//! the same mixture of complements `I_{1-y}(b/2, a/2 + j)`, with `1 - y`
//! formed as `b/(a x + b)` so the far right tail keeps its digits. Only
//! one mixture is summed, chosen by where `y` falls against the crossover
//! of the underlying non-central beta; the other tail is one minus it.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use super::moments;
use super::poisson_mixture::{poisson_mixture, probability_mixture};
use super::quantile::{positive_quantile, Target};
use crate::special::{beta_density, ibeta_pair};

/// Non-central F distribution with `dfn` numerator and `dfd` denominator
/// degrees of freedom and non-centrality `nc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonCentralFDistribution {
    dfn: Real,
    dfd: Real,
    nc: Real,
}

impl NonCentralFDistribution {
    /// Requires finite `dfn, dfd > 0` and finite `nc >= 0`.
    pub fn new(dfn: Real, dfd: Real, nc: Real) -> Result<Self, Signal> {
        let positive = |v: Real| v > 0.0 && v.is_finite();
        if positive(dfn) && positive(dfd) && nc >= 0.0 && nc.is_finite() {
            Ok(Self { dfn, dfd, nc })
        } else {
            Err(Signal::Domain)
        }
    }

    /// `(y, 1 - y)` with both halves formed as ratios.
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
        let (a, b) = (0.5 * self.dfn, 0.5 * self.dfd);
        if x == 0.0 {
            // Only the j = 0 term survives at the origin.
            return Ok(match a {
                a if a < 1.0 => Real::INFINITY,
                a if a == 1.0 => (-0.5 * self.nc).exp(),
                _ => 0.0,
            });
        }
        let (y, yc) = self.beta_argument(x);
        let jacobian = self.dfn / self.dfd * yc * yc;
        let mixture = poisson_mixture(0.5 * self.nc, |j| beta_density(a + j, b, y, yc))?;
        Ok(mixture * jacobian)
    }

    /// `(P(X <= x), P(X > x))` for finite `x > 0`.
    fn tails(&self, x: Real) -> Result<(Real, Real), Signal> {
        let (a, b, l) = (0.5 * self.dfn, 0.5 * self.dfd, self.nc);
        let (y, yc) = self.beta_argument(x);
        let c = a + b + 0.5 * l;
        let crossover = 1.0 - (b / c) * (1.0 + l / (2.0 * c * c));
        if y > crossover {
            let sf = probability_mixture(0.5 * l, |j| Ok(ibeta_pair(a + j, b, y, yc)?.1))?;
            Ok((1.0 - sf, sf))
        } else {
            let cdf = probability_mixture(0.5 * l, |j| Ok(ibeta_pair(a + j, b, y, yc)?.0))?;
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

    /// Quantile.
    pub fn ppf(&self, p: Real) -> BackendResult {
        self.quantile(Target::lower(p))
    }

    /// Inverse survival.
    pub fn isf(&self, q: Real) -> BackendResult {
        self.quantile(Target::upper(q))
    }

    fn quantile(&self, target: Target) -> BackendResult {
        let guess = (self.dfn + self.nc) / self.dfn;
        positive_quantile(|x| self.cdf(x), |x| self.sf(x), target, guess)
    }

    /// `E[X^r]` for `r = 1..=4`, finite when `dfd > 2r`.
    fn raw_moment(&self, r: u32) -> Real {
        let (a, b, l) = (self.dfn, self.dfd, self.nc);
        // Cumulants of the non-central chi-squared numerator.
        let k1 = a + l;
        let k2 = 2.0 * (a + 2.0 * l);
        let k3 = 8.0 * (a + 3.0 * l);
        let k4 = 48.0 * (a + 4.0 * l);
        let numerator = match r {
            1 => k1,
            2 => k2 + k1 * k1,
            3 => k3 + 3.0 * k2 * k1 + k1 * k1 * k1,
            _ => k4 + 4.0 * k3 * k1 + 3.0 * k2 * k2 + 6.0 * k2 * k1 * k1 + k1.powi(4),
        };
        let denominator: Real = (1..=r).map(|i| b - 2.0 * i as Real).product();
        (b / a).powi(r as i32) * numerator / denominator
    }

    /// Mean, for `dfd > 2`.
    pub fn mean(&self) -> Real {
        self.raw_moment(1)
    }

    /// Variance, for `dfd > 4`.
    pub fn variance(&self) -> Real {
        moments::variance(self.raw_moment(1), self.raw_moment(2))
    }

    /// Skewness, for `dfd > 6`.
    pub fn skewness(&self) -> Real {
        moments::skewness(self.raw_moment(1), self.raw_moment(2), self.raw_moment(3))
    }

    /// Excess kurtosis, for `dfd > 8`.
    pub fn kurtosis_excess(&self) -> Real {
        moments::kurtosis_excess(
            self.raw_moment(1),
            self.raw_moment(2),
            self.raw_moment(3),
            self.raw_moment(4),
        )
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
        let d = NonCentralFDistribution::new(3.0, 7.0, 2.5).unwrap();
        assert!(rel(d.cdf(1.5).unwrap(), NCF_CDF) < 1e-11);
        assert!(rel(d.sf(1.5).unwrap(), 1.0 - NCF_CDF) < 1e-11);
        assert!(rel(d.pdf(1.5).unwrap(), NCF_PDF) < 1e-11);
    }

    const NCF_CDF: f64 = 0.452_726_270_049_835_04;
    const NCF_PDF: f64 = 0.266_780_759_365_956_61;

    #[test]
    fn central_when_nc_is_zero() {
        // F(2, 2): cdf = x / (1 + x)
        let d = NonCentralFDistribution::new(2.0, 2.0, 0.0).unwrap();
        assert!(rel(d.cdf(3.0).unwrap(), 0.75) < 1e-14);
        assert!(rel(d.pdf(3.0).unwrap(), 1.0 / 16.0) < 1e-14);
    }

    #[test]
    fn infinite_argument_is_certain() {
        let d = NonCentralFDistribution::new(4.0, 9.0, 1.0).unwrap();
        assert_eq!(d.cdf(f64::INFINITY), Ok(1.0));
        assert_eq!(d.sf(f64::INFINITY), Ok(0.0));
    }

    #[test]
    fn tails_stay_in_the_unit_interval() {
        let d = NonCentralFDistribution::new(3.0, 7.0, 2.5).unwrap();
        let cdf = d.cdf(1e12).unwrap();
        assert!(cdf <= 1.0 && cdf > 1.0 - 1e-14, "cdf = {cdf}");
        assert!(d.sf(1e12).unwrap() > 0.0);
        for x in [0.1, 1.5, 4.0, 60.0] {
            let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
            assert!((total - 1.0).abs() <= f64::EPSILON, "x = {x}");
        }
    }

    #[test]
    fn quantile_round_trip() {
        let d = NonCentralFDistribution::new(3.0, 7.0, 2.5).unwrap();
        for p in [0.01, 0.5, 0.99] {
            let x = d.ppf(p).unwrap();
            assert!(rel(d.cdf(x).unwrap(), p) < 1e-10, "p = {p}");
        }
    }

    #[test]
    fn moments() {
        let d = NonCentralFDistribution::new(3.0, 10.0, 2.0).unwrap();
        // (b/a)(a + λ)/(b - 2)
        assert!(rel(d.mean(), 10.0 / 3.0 * 5.0 / 8.0) < 1e-14);
        // 2 (b/a)² ((a + λ)² + (a + 2λ)(b - 2)) / ((b - 2)² (b - 4))
        let var = 2.0 * (10.0_f64 / 3.0).powi(2) * (25.0 + 7.0 * 8.0) / (64.0 * 6.0);
        assert!(rel(d.variance(), var) < 1e-13);
        let central = NonCentralFDistribution::new(4.0, 12.0, 0.0).unwrap();
        // F skewness: (2a + b - 2) √(8(b - 4)) / ((b - 6) √(a (a + b - 2)))
        let skew = (8.0 + 10.0) * (64.0_f64).sqrt() / (6.0 * (4.0_f64 * 14.0).sqrt());
        assert!(rel(central.skewness(), skew) < 1e-12);
    }
}
