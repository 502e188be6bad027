//! Error functions and the standard normal distribution used by several
//! kernels.
//!
//! `erf` below one is its Maclaurin series; `erfc` above one is the
//! Legendre continued fraction of `Γ(½, x²)`, evaluated with the modified
//! Lentz method. Each side of the split is computed directly and the other
//! obtained by a subtraction that never cancels. Gaussian factors
//! `exp(-x²)` carry the rounding error of `x²` as a first-order
//! correction, so the far tails keep their relative precision.

use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

/// `√π`.
const SQRT_PI: Real = 1.772_453_850_905_516;

/// `√(2π)`.
const SQRT_2PI: Real = 2.506_628_274_631_000_7;

/// `ln √(2π)`.
const LN_SQRT_2PI: Real = 0.918_938_533_204_672_8;

/// Below this `Φ(-x)` has lost precision to gradual underflow.
const SUBNORMAL_SF: Real = 1e-300;

/// Where the series hands over to the continued fraction.
const SPLIT: Real = 1.0;

/// Continued-fraction terms allowed; `z >= 0.5` converges in about 150.
const MAX_FRACTION_TERMS: u32 = 500;

/// `erfc` underflows to zero past this.
const ERFC_UNDERFLOW: Real = 27.3;

/// Newton steps polishing the `statrs` starting point of [`erf_inv`].
const NEWTON_STEPS: u32 = 3;

/// `exp(-s x²)` for `s ∈ {1, ½}`, with the rounding of `x²` folded back in.
#[inline]
fn gaussian(x: Real, s: Real) -> Real {
    let xx = x * x;
    let low = x.mul_add(x, -xx);
    (-s * xx).exp() * (1.0 - s * low)
}

/// Maclaurin series of `erf`, for `|x| < 1`.
fn erf_series(x: Real) -> Real {
    let x2 = x * x;
    let mut power = x;
    let mut sum = x;
    let mut n = 0.0;
    loop {
        n += 1.0;
        power *= -x2 / n;
        let term = power / (2.0 * n + 1.0);
        sum += term;
        if term.abs() <= 0.5 * Real::EPSILON * sum.abs() {
            return FRAC_2_SQRT_PI * sum;
        }
    }
}

/// `h(z) = e^z z^{-1/2} Γ(½, z)` by modified Lentz, for `z >= 0.5`.
fn half_gamma_fraction(z: Real) -> Real {
    const TINY: Real = 1e-300;
    let mut b = z + 0.5;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for n in 1..=MAX_FRACTION_TERMS {
        let n = Real::from(n);
        let an = -n * (n - 0.5);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() <= Real::EPSILON {
            break;
        }
    }
    h
}

/// `erfc(x)` for `x >= 1`.
#[inline]
fn erfc_tail(x: Real) -> Real {
    if x >= ERFC_UNDERFLOW {
        return 0.0;
    }
    gaussian(x, 1.0) * x / SQRT_PI * half_gamma_fraction(x * x)
}

/// The error function.
pub fn erf(x: Real) -> Real {
    if x.is_nan() {
        return x;
    }
    if x.abs() < SPLIT {
        return erf_series(x);
    }
    let v = 1.0 - erfc_tail(x.abs());
    v.copysign(x)
}

/// The complementary error function `1 - erf(x)`, accurate where it is
/// tiny.
pub fn erfc(x: Real) -> Real {
    if x.is_nan() {
        return x;
    }
    if x.abs() < SPLIT {
        1.0 - erf_series(x)
    } else if x > 0.0 {
        erfc_tail(x)
    } else {
        2.0 - erfc_tail(-x)
    }
}

/// Inverse error function on `[-1, 1]`.
pub fn erf_inv(x: Real) -> BackendResult {
    if !(-1.0..=1.0).contains(&x) {
        return Err(Signal::Domain);
    }
    if x.abs() == 1.0 {
        return Err(Signal::Overflow);
    }
    if x == 0.0 {
        return Ok(x);
    }
    let target = x.abs();
    // Exact for target >= 1/2.
    let complement = 1.0 - target;
    let mut y = statrs::function::erf::erf_inv(target);
    for _ in 0..NEWTON_STEPS {
        let slope = FRAC_2_SQRT_PI * gaussian(y, 1.0);
        let step = if target <= 0.5 {
            (erf(y) - target) / slope
        } else {
            (complement - erfc(y)) / slope
        };
        if !step.is_finite() {
            break;
        }
        y -= step;
        if step.abs() <= Real::EPSILON * y.abs() {
            break;
        }
    }
    Ok(y.copysign(x))
}

/// Standard normal density.
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    gaussian(x, 0.5) / SQRT_2PI
}

/// Standard normal CDF `Φ(x)`.
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    normal_sf(-x)
}

/// Standard normal survival function `Φ(-x)`, accurate in the right tail.
pub fn normal_sf(x: Real) -> Real {
    if x.is_nan() {
        return x;
    }
    let split = SPLIT * SQRT_2;
    if x >= ERFC_UNDERFLOW * SQRT_2 {
        0.0
    } else if x >= split {
        0.5 * x * normal_pdf(x) * half_gamma_fraction(0.5 * x * x)
    } else if x <= -split {
        1.0 - normal_sf(-x)
    } else {
        0.5 * (1.0 - erf_series(x / SQRT_2))
    }
}

/// `ln Φ(-x)`, finite beyond the point where `Φ(-x)` underflows.
pub fn normal_ln_sf(x: Real) -> Real {
    let s = normal_sf(x);
    if s > SUBNORMAL_SF {
        return s.ln();
    }
    // Mills-ratio asymptotic series; only reached for x > 37.
    let r = 1.0 / (x * x);
    let series = 1.0 - r * (1.0 - 3.0 * r * (1.0 - 5.0 * r * (1.0 - 7.0 * r)));
    -0.5 * x * x - x.ln() - LN_SQRT_2PI + series.ln()
}
