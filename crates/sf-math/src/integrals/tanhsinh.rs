//! Tanh-Sinh (double-exponential) quadrature.
//!
//! The tanh-sinh transform maps `[−1, 1]` to the real line via
//! $x = \tanh(\frac\pi2 \sinh t)$, concentrating evaluation points near the
//! endpoints. This makes it very effective for integrands with endpoint
//! singularities or with a sharp transition placed at an endpoint.
//!
//! Each refinement halves the step and only evaluates the new (odd) nodes;
//! the trapezoidal sum of the previous level is reused. Nodes are placed by
//! their distance from the nearest endpoint, so the integrand is never
//! evaluated exactly at `a` or `b`.

use std::f64::consts::FRAC_PI_2;

use sf_core::{ensure, Result, Real};

use super::Integrator;

/// Below this weight a node only counts while its term is significant.
const NEGLIGIBLE_WEIGHT: Real = 1e-20;

/// Tanh-Sinh (double-exponential) quadrature.
#[derive(Debug, Clone)]
pub struct TanhSinhIntegral {
    relative_tolerance: Real,
    max_refinements: usize,
}

impl TanhSinhIntegral {
    /// Create a new integrator.
    ///
    /// * `relative_tolerance`: stop when successive refinements differ by
    ///   less than this fraction.
    /// * `max_refinements`: maximum number of halvings of the step size.
    pub fn new(relative_tolerance: Real, max_refinements: usize) -> Self {
        Self {
            relative_tolerance,
            max_refinements,
        }
    }

    /// Create with default parameters (relative tolerance = √ε, 12
    /// refinements).
    pub fn default_params() -> Self {
        Self {
            relative_tolerance: f64::EPSILON.sqrt(),
            max_refinements: 12,
        }
    }

    /// Sum of `w(t) [f(b - δ) + f(a + δ)]` over `t = k h` for
    /// `k = first, first + stride, ...`.
    ///
    /// Each side contributes while its node is still strictly inside
    /// `(a, b)`; the walk ends when neither is, when the weight underflows,
    /// or when a term from a negligible weight no longer moves `scale`
    /// plus the partial sum.
    #[allow(clippy::too_many_arguments)]
    fn pairs<F: Fn(Real) -> Real>(
        f: &F,
        a: Real,
        b: Real,
        half: Real,
        h: Real,
        first: u32,
        stride: u32,
        scale: Real,
    ) -> Real {
        let mut sum = 0.0;
        let mut k = first;
        loop {
            let t = k as Real * h;
            let arg = FRAC_PI_2 * t.sinh();
            let cosh_arg = arg.cosh();
            let weight = FRAC_PI_2 * t.cosh() / (cosh_arg * cosh_arg);
            // 1 - tanh(arg), without cancellation.
            let delta = half * 2.0 / (1.0 + (2.0 * arg).exp());
            let x_plus = b - delta;
            let x_minus = a + delta;
            let right = x_plus < b;
            let left = x_minus > a;
            if weight == 0.0 || !(right || left) {
                break;
            }
            let mut values = 0.0;
            if right {
                values += f(x_plus);
            }
            if left {
                values += f(x_minus);
            }
            let term = weight * values;
            sum += term;
            if weight < NEGLIGIBLE_WEIGHT && term.abs() <= Real::EPSILON * (scale + sum).abs() {
                break;
            }
            k += stride;
        }
        sum
    }
}

impl Integrator for TanhSinhIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(
            a.is_finite() && b.is_finite(),
            "TanhSinhIntegral: bounds must be finite, got [{a}, {b}]"
        );
        if a == b {
            return Ok(0.0);
        }
        if b < a {
            return Ok(-self.integrate(f, b, a)?);
        }

        let half = 0.5 * (b - a);
        let mid = a + half;

        let mut h = 1.0_f64;
        let mut sum = FRAC_PI_2 * f(mid);
        sum += Self::pairs(&f, a, b, half, h, 1, 1, sum);
        let mut estimate = sum * h * half;

        for _ in 0..self.max_refinements {
            h *= 0.5;
            sum += Self::pairs(&f, a, b, half, h, 1, 2, sum);
            let refined = sum * h * half;
            ensure!(!refined.is_nan(), "TanhSinhIntegral: integrand produced NaN on [{a}, {b}]");
            if (refined - estimate).abs() <= self.relative_tolerance * refined.abs() {
                return Ok(refined);
            }
            estimate = refined;
        }

        // Best estimate even if not fully converged.
        Ok(estimate)
    }
}
