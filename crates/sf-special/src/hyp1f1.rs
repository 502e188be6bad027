//! Confluent hypergeometric function ₁F₁(a; b; x).
//!
//! At non-positive integer `b` the function has poles. This operation keeps
//! a fixed convention there that other libraries do not all share: the
//! value is `+Inf` unless a negative integer `a >= b` terminates the series
//! first, and `a == b` is `exp(x)`. Two boundaries go to the generalized
//! series instead of the primary 1F1 backend.

use sf_core::operation::{
    is_negative_integer, is_nonpositive_integer, BackendResult, Operation, Param, Resolution, SpecialCase,
};
use sf_core::Real;
use sf_math::special::{self, hyp_pfq};

fn series(p: &[Real; 3]) -> BackendResult {
    hyp_pfq(&[p[0]], &[p[1]], p[2])
}

fn pole_cancelled(p: &[Real; 3]) -> bool {
    let [a, b, _] = *p;
    is_nonpositive_integer(b) && b != 0.0 && a == b
}

fn pole(p: &[Real; 3]) -> bool {
    let [a, b, _] = *p;
    is_nonpositive_integer(b) && !(is_negative_integer(a) && a >= b)
}

fn polynomial_at_b(p: &[Real; 3]) -> bool {
    let [a, b, x] = *p;
    is_negative_integer(a) && b > 0.0 && b == x
}

/// Limiting cases of `hyp1f1`.
pub const HYP1F1_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("b non-positive integer, b != 0, a == b", pole_cancelled, |_| {
        Resolution::Reroute(series)
    }),
    SpecialCase::new("b non-positive integer, no terminating a", pole, |_| {
        Resolution::Value(Real::INFINITY)
    }),
    SpecialCase::new("a negative integer, b > 0, x == b", polynomial_at_b, |_| {
        Resolution::Reroute(series)
    }),
];

/// Descriptor of [`hyp1f1`].
pub static HYP1F1: Operation<3> = Operation::new("hyp1f1", [Param::any("a"), Param::any("b"), Param::any("x")])
    .with_cases(HYP1F1_CASES)
    .with_backend_domain_value(Real::INFINITY);

/// Kummer's confluent hypergeometric function ₁F₁(a; b; x).
pub fn hyp1f1(a: Real, b: Real, x: Real) -> Real {
    HYP1F1.evaluate([a, b, x], |&[a, b, x]| special::hyp1f1(a, b, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};

    fn label(params: [Real; 3]) -> Option<&'static str> {
        HYP1F1.matching_case(&params).map(|c| c.label)
    }

    #[test]
    fn cancelled_pole_is_exponential() {
        assert_eq!(label([-3.0, -3.0, 0.7]), Some("b non-positive integer, b != 0, a == b"));
        let (v, reports) = capture(|| hyp1f1(-3.0, -3.0, 0.7));
        assert!((v - 0.7_f64.exp()).abs() < 1e-14);
        assert!(reports.is_empty());
    }

    #[test]
    fn poles_are_infinite() {
        for params in [[0.5, -2.0, 1.0], [-3.0, -2.0, 1.0], [0.0, 0.0, 1.0], [2.0, 0.0, -1.0]] {
            assert_eq!(label(params), Some("b non-positive integer, no terminating a"), "{params:?}");
            let (v, reports) = capture(|| HYP1F1.evaluate(params, |_| panic!("backend called")));
            assert_eq!(v, Real::INFINITY);
            assert!(reports.is_empty());
        }
    }

    #[test]
    fn terminating_series_before_the_pole() {
        // a = -1, b = -2: 1 + (-1)/(-2) x
        assert!(label([-1.0, -2.0, 3.0]).is_none());
        assert!((hyp1f1(-1.0, -2.0, 3.0) - 2.5).abs() < 1e-14);
    }

    #[test]
    fn polynomial_at_x_equal_b() {
        assert_eq!(label([-2.0, 2.0, 2.0]), Some("a negative integer, b > 0, x == b"));
        // 1 - 2x/b + x²/(b(b+1)) at x = b = 2: 1 - 2 + 4/6
        let (v, reports) = capture(|| hyp1f1(-2.0, 2.0, 2.0));
        assert!((v + 1.0 / 3.0).abs() < 1e-14);
        assert!(reports.is_empty());
    }

    #[test]
    fn backend_domain_failure_is_infinite() {
        let (v, reports) = capture(|| hyp1f1(1.0, 2.0, Real::INFINITY));
        assert_eq!(v, Real::INFINITY);
        assert_eq!(reports[0].kind, ErrorKind::Domain);
        assert_eq!(reports[0].function, "hyp1f1");
    }

    #[test]
    fn ordinary_values() {
        // 1F1(1; 2; x) = (e^x - 1)/x
        assert!((hyp1f1(1.0, 2.0, 0.5) - 0.5_f64.exp_m1() / 0.5).abs() < 1e-14);
        assert!((hyp1f1(1.0, 2.0, -3.0) - (-3.0_f64).exp_m1() / -3.0).abs() < 1e-14);
    }
}
