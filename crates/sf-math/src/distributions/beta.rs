//! Beta distribution on `[0, 1]`.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use crate::special::{ibeta, ibeta_derivative, ibeta_inv, ibetac, ibetac_inv};

/// Beta distribution with shapes `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaDistribution {
    a: Real,
    b: Real,
}

impl BetaDistribution {
    /// Requires finite `a, b > 0`.
    pub fn new(a: Real, b: Real) -> Result<Self, Signal> {
        let positive = |v: Real| v > 0.0 && v.is_finite();
        if positive(a) && positive(b) {
            Ok(Self { a, b })
        } else {
            Err(Signal::Domain)
        }
    }

    /// Density. Zero outside `[0, 1]`; infinite at an end whose shape is
    /// below one.
    pub fn pdf(&self, x: Real) -> BackendResult {
        if !(0.0..=1.0).contains(&x) {
            return Ok(0.0);
        }
        ibeta_derivative(self.a, self.b, x)
    }

    /// `I_x(a, b)`.
    pub fn cdf(&self, x: Real) -> BackendResult {
        ibeta(self.a, self.b, x.clamp(0.0, 1.0))
    }

    /// `1 - I_x(a, b)`, computed directly.
    pub fn sf(&self, x: Real) -> BackendResult {
        ibetac(self.a, self.b, x.clamp(0.0, 1.0))
    }

    /// Quantile.
    pub fn ppf(&self, p: Real) -> BackendResult {
        ibeta_inv(self.a, self.b, p)
    }

    /// Inverse survival.
    pub fn isf(&self, q: Real) -> BackendResult {
        ibetac_inv(self.a, self.b, q)
    }

    /// `a / (a + b)`.
    pub fn mean(&self) -> Real {
        self.a / (self.a + self.b)
    }

    /// `ab / ((a + b)² (a + b + 1))`.
    pub fn variance(&self) -> Real {
        let s = self.a + self.b;
        self.a * self.b / (s * s * (s + 1.0))
    }

    /// `2 (b - a) √(a + b + 1) / ((a + b + 2) √(ab))`.
    pub fn skewness(&self) -> Real {
        let s = self.a + self.b;
        2.0 * (self.b - self.a) * (s + 1.0).sqrt() / ((s + 2.0) * (self.a * self.b).sqrt())
    }

    /// `6 [(a - b)² (a + b + 1) - ab (a + b + 2)] / (ab (a + b + 2)(a + b + 3))`.
    pub fn kurtosis_excess(&self) -> Real {
        let (a, b) = (self.a, self.b);
        let s = a + b;
        let d = a - b;
        6.0 * (d * d * (s + 1.0) - a * b * (s + 2.0)) / (a * b * (s + 2.0) * (s + 3.0))
    }
}
