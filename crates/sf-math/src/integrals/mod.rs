//! Numerical integration.

pub mod tanhsinh;

pub use tanhsinh::TanhSinhIntegral;

use sf_core::{Result, Real};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;

    /// Integrate `f` on `[a, b]` split at `c`, which must lie inside.
    ///
    /// Placing `c` at a kink or a sharp transition of the integrand lets the
    /// node clustering of endpoint-oriented rules work on both sides of it.
    fn integrate_split<F: Fn(Real) -> Real>(&self, f: F, a: Real, c: Real, b: Real) -> Result<Real> {
        Ok(self.integrate(&f, a, c)? + self.integrate(&f, c, b)?)
    }
}
