//! Non-central Student t distribution.
//!
//! `T = (Z + δ) / √(χ²_v / v)`. For `t >= 0`, with `y = t²/(v + t²)`,
//!
//! ```text
//! P(T <= t) = Φ(-δ) + ½ Σ_j [ p_j I_y(j + ½, v/2) + q_j I_y(j + 1, v/2) ]
//! ```
//!
//! where `p_j` are Poisson(δ²/2) weights and `q_j = p_j · r_j` with
//! `r_j = δ/√2 · Γ(j + 1)/Γ(j + 3/2)`. The survival function is the same
//! series over the complements `I_{1-y}(v/2, ·)`. Only one of the two is
//! summed: the upper series whenever `δ <= 0` or `y` is past the crossover
//! of the underlying non-central beta, the lower one otherwise, and the
//! other tail is one minus it. Negative `t` reflects:
//! `P(T <= t; δ) = P(T > -t; -δ)`.

use std::f64::consts::{PI, SQRT_2};

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::gamma::ln_gamma;

use super::moments;
use super::poisson_mixture::{poisson_mixture, probability_mixture};
use super::quantile::{real_quantile, Target};
use crate::special::{beta_density, ibeta_pair, normal_cdf, normal_sf};

/// Non-central t distribution with `df` degrees of freedom and
/// non-centrality `nc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonCentralTDistribution {
    df: Real,
    nc: Real,
}

#[inline]
fn odd_weight(delta: Real, j: Real) -> Real {
    delta / SQRT_2 * (ln_gamma(j + 1.0) - ln_gamma(j + 1.5)).exp()
}

impl NonCentralTDistribution {
    /// Requires finite `df > 0` and finite `nc`.
    pub fn new(df: Real, nc: Real) -> Result<Self, Signal> {
        if df > 0.0 && df.is_finite() && nc.is_finite() {
            Ok(Self { df, nc })
        } else {
            Err(Signal::Domain)
        }
    }

    /// `(y, 1 - y)` for `y = t²/(v + t²)`.
    fn beta_argument(&self, t: Real) -> (Real, Real) {
        let t2 = t * t;
        let denom = self.df + t2;
        (t2 / denom, self.df / denom)
    }

    /// Probability density function.
    pub fn pdf(&self, t: Real) -> BackendResult {
        if t.is_infinite() {
            return Ok(0.0);
        }
        let v = self.df;
        if t == 0.0 {
            let ln_c = ln_gamma(0.5 * (v + 1.0)) - ln_gamma(0.5 * v) - 0.5 * (v * PI).ln();
            return Ok((ln_c - 0.5 * self.nc * self.nc).exp());
        }
        let (t, delta) = if t > 0.0 { (t, self.nc) } else { (-t, -self.nc) };
        let (y, yc) = self.beta_argument(t);
        let b = 0.5 * v;
        let mixture = poisson_mixture(0.5 * delta * delta, |j| {
            let even = beta_density(j + 0.5, b, y, yc)?;
            let odd = beta_density(j + 1.0, b, y, yc)?;
            Ok(0.5 * (even + odd_weight(delta, j) * odd))
        })?;
        let denom = v + t * t;
        Ok(mixture * 2.0 * t * v / (denom * denom))
    }

    /// `(P(T <= t), P(T > t))` for `t >= 0` and non-centrality `delta`.
    fn tails(&self, t: Real, delta: Real) -> Result<(Real, Real), Signal> {
        if t == 0.0 {
            return Ok((normal_cdf(-delta), normal_sf(-delta)));
        }
        let (y, yc) = self.beta_argument(t);
        let b = 0.5 * self.df;
        let d2 = delta * delta;
        let c = 0.5 + b + 0.5 * d2;
        let crossover = 1.0 - (b / c) * (1.0 + d2 / (2.0 * c * c));
        if delta <= 0.0 || y >= crossover {
            let upper = probability_mixture(0.5 * d2, |j| {
                let even = ibeta_pair(j + 0.5, b, y, yc)?.1;
                let odd = ibeta_pair(j + 1.0, b, y, yc)?.1;
                Ok(0.5 * (even + odd_weight(delta, j) * odd))
            })?;
            Ok((1.0 - upper, upper))
        } else {
            let mixture = poisson_mixture(0.5 * d2, |j| {
                let even = ibeta_pair(j + 0.5, b, y, yc)?.0;
                let odd = ibeta_pair(j + 1.0, b, y, yc)?.0;
                Ok(0.5 * (even + odd_weight(delta, j) * odd))
            })?;
            let lower = (normal_cdf(-delta) + mixture).clamp(0.0, 1.0);
            Ok((lower, 1.0 - lower))
        }
    }

    /// `P(T <= t)`.
    pub fn cdf(&self, t: Real) -> BackendResult {
        match t {
            t if t == Real::INFINITY => Ok(1.0),
            t if t == Real::NEG_INFINITY => Ok(0.0),
            t if t >= 0.0 => Ok(self.tails(t, self.nc)?.0),
            t => Ok(self.tails(-t, -self.nc)?.1),
        }
    }

    /// `P(T > t)`.
    pub fn sf(&self, t: Real) -> BackendResult {
        match t {
            t if t == Real::INFINITY => Ok(0.0),
            t if t == Real::NEG_INFINITY => Ok(1.0),
            t if t >= 0.0 => Ok(self.tails(t, self.nc)?.1),
            t => Ok(self.tails(-t, -self.nc)?.0),
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
        let step = 1.0 + 0.5 * self.nc.abs();
        real_quantile(|t| self.cdf(t), |t| self.sf(t), target, self.nc, step)
    }

    /// `E[T^r]` for `r = 1..=4`, finite when `v > r`.
    fn raw_moment(&self, r: u32) -> Real {
        let (v, d) = (self.df, self.nc);
        let d2 = d * d;
        let gamma_ratio = |shift: Real| (ln_gamma(0.5 * (v - shift)) - ln_gamma(0.5 * v)).exp();
        match r {
            1 => d * (0.5 * v).sqrt() * gamma_ratio(1.0),
            2 => v * (1.0 + d2) / (v - 2.0),
            3 => d * (3.0 + d2) * (0.5 * v).powf(1.5) * gamma_ratio(3.0),
            _ => v * v * (d2 * d2 + 6.0 * d2 + 3.0) / ((v - 2.0) * (v - 4.0)),
        }
    }

    /// Mean, for `v > 1`.
    pub fn mean(&self) -> Real {
        self.raw_moment(1)
    }

    /// Variance, for `v > 2`.
    pub fn variance(&self) -> Real {
        moments::variance(self.raw_moment(1), self.raw_moment(2))
    }

    /// Skewness, for `v > 3`.
    pub fn skewness(&self) -> Real {
        moments::skewness(self.raw_moment(1), self.raw_moment(2), self.raw_moment(3))
    }

    /// Excess kurtosis, for `v > 4`.
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
    fn central_student_t() {
        // v = 1 is Cauchy: cdf = ½ + atan(t)/π
        let d = NonCentralTDistribution::new(1.0, 0.0).unwrap();
        assert!(rel(d.cdf(2.0).unwrap(), 0.5 + 2.0_f64.atan() / PI) < 1e-14);
        assert!(rel(d.cdf(-2.0).unwrap(), 0.5 - 2.0_f64.atan() / PI) < 1e-13);
        assert!(rel(d.pdf(2.0).unwrap(), 1.0 / (5.0 * PI)) < 1e-13);
        assert!(rel(d.pdf(0.0).unwrap(), 1.0 / PI) < 1e-14);
    }

    #[test]
    fn reference_values() {
        let d = NonCentralTDistribution::new(5.0, 1.5).unwrap();
        for &(t, cdf, pdf) in REFERENCE {
            assert!(rel(d.cdf(t).unwrap(), cdf) < 1e-10, "cdf({t})");
            assert!(rel(d.sf(t).unwrap(), 1.0 - cdf) < 1e-10, "sf({t})");
            assert!(rel(d.pdf(t).unwrap(), pdf) < 1e-10, "pdf({t})");
        }
    }

    // (t, cdf, pdf) for v = 5, δ = 1.5
    const REFERENCE: &[(f64, f64, f64)] = &[
        (-1.0, 0.009_387_645_621_709_161_6, 0.018_424_961_092_073_549),
        (0.5, 0.155_689_970_787_938_23, 0.235_845_444_434_138_97),
        (2.0, 0.631_449_247_255_671_72, 0.286_343_780_710_508_65),
    ];

    #[test]
    fn quantile_round_trip() {
        let d = NonCentralTDistribution::new(4.0, -2.0).unwrap();
        for p in [0.001, 0.3, 0.5, 0.97] {
            let t = d.ppf(p).unwrap();
            assert!(rel(d.cdf(t).unwrap(), p) < 1e-10, "p = {p}");
        }
        let d = NonCentralTDistribution::new(4.0, 2.0).unwrap();
        let t = d.isf(1e-9).unwrap();
        assert!(rel(d.sf(t).unwrap(), 1e-9) < 1e-8);
    }

    #[test]
    fn far_right_tail_is_summed_directly() {
        let d = NonCentralTDistribution::new(3.0, 2.0).unwrap();
        let sf = d.sf(1e6).unwrap();
        assert!(rel(sf, 1.935_519_578_421_215_9e-17) < 1e-10, "got {sf}");
        assert_eq!(d.cdf(1e6).unwrap(), 1.0);
    }

    #[test]
    fn tails_sum_to_one() {
        let d = NonCentralTDistribution::new(0.5, -0.915).unwrap();
        let total = d.cdf(0.0).unwrap() + d.sf(0.0).unwrap();
        assert!((total - 1.0).abs() < 1e-15, "got {total}");
        let d = NonCentralTDistribution::new(5.0, 1.5).unwrap();
        for t in [-3.0, -0.2, 0.7, 4.0, 40.0] {
            let total = d.cdf(t).unwrap() + d.sf(t).unwrap();
            assert!((total - 1.0).abs() < 1e-15, "t = {t}");
        }
    }

    #[test]
    fn upper_quantiles_round_trip_tightly() {
        let d = NonCentralTDistribution::new(3.0, 2.0).unwrap();
        let t = d.ppf(0.9).unwrap();
        assert!((d.cdf(t).unwrap() - 0.9).abs() < 1e-14, "t = {t}");
    }

    #[test]
    fn moments_of_the_central_case() {
        let d = NonCentralTDistribution::new(6.0, 0.0).unwrap();
        assert_eq!(d.mean(), 0.0);
        assert!(rel(d.variance(), 1.5) < 1e-14);
        assert_eq!(d.skewness(), 0.0);
        // 6/(v - 4)
        assert!(rel(d.kurtosis_excess(), 3.0) < 1e-13);
    }

    #[test]
    fn mean_with_non_centrality() {
        // v = 3: E[T] = δ √(3/2) Γ(1)/Γ(3/2) = δ √(6/π)
        let d = NonCentralTDistribution::new(3.0, 2.0).unwrap();
        assert!(rel(d.mean(), 2.0 * (6.0 / PI).sqrt()) < 1e-13);
    }
}
