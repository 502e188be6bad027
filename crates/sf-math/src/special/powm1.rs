//! `x^y - 1` without cancellation near `x = 1` or `y = 0`.

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

/// `ln(f64::MAX)`.
const MAX_LN: Real = 709.782_712_893_384;

/// Below this `|y ln x|` the `expm1` form is used.
const EXPM1_LIMIT: Real = 0.5;

/// `x^y - 1`.
///
/// Negative `x` requires an integer `y`; anything else is a domain failure.
/// Results whose magnitude exceeds `f64::MAX` signal `Overflow`.
pub fn powm1(x: Real, y: Real) -> BackendResult {
    if x > 0.0 {
        let l = y * x.ln();
        if l.abs() < EXPM1_LIMIT {
            return Ok(l.exp_m1());
        }
        if l > MAX_LN {
            return Err(Signal::Overflow);
        }
        return Ok(x.powf(y) - 1.0);
    }
    if x == 0.0 {
        return match y {
            y if y > 0.0 => Ok(-1.0),
            y if y == 0.0 => Ok(0.0),
            _ => Err(Signal::Overflow),
        };
    }
    if y.trunc() != y {
        return Err(Signal::Domain);
    }
    if (y * 0.5).trunc() == y * 0.5 {
        // Even exponent: (-x)^y = |x|^y.
        return powm1(-x, y);
    }
    let r = (-x).powf(y);
    if r.is_infinite() {
        return Err(Signal::Overflow);
    }
    Ok(-r - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accurate_near_one() {
        let h = 2.0_f64.powi(-30);
        let v = powm1(1.0 + h, 3.0).unwrap();
        let exact = 3.0 * h + 3.0 * h * h + h * h * h;
        assert!(((v - exact) / exact).abs() < 1e-14, "got {v}");
        let v = powm1(3.0, 1e-12).unwrap();
        assert!(((v - 1e-12 * 3.0_f64.ln()) / v).abs() < 1e-9);
    }

    #[test]
    fn ordinary_values() {
        assert_eq!(powm1(2.0, 10.0), Ok(1023.0));
        assert_eq!(powm1(-2.0, 3.0), Ok(-9.0));
        assert_eq!(powm1(-2.0, 2.0), Ok(3.0));
        assert_eq!(powm1(0.0, 2.0), Ok(-1.0));
    }

    #[test]
    fn failures() {
        assert_eq!(powm1(-2.0, 0.5), Err(Signal::Domain));
        assert_eq!(powm1(10.0, 400.0), Err(Signal::Overflow));
        assert_eq!(powm1(-10.0, 401.0), Err(Signal::Overflow));
        assert_eq!(powm1(0.0, -1.0), Err(Signal::Overflow));
    }
}
