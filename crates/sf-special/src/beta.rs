//! Regularized incomplete beta function family.
//!
//! `betainc` and `betaincc` accept zero and infinite shapes. In those limits
//! the pair is treated as a family of functions of `x` alone: the pointwise
//! limit of the beta distribution is a point mass at 0 or at 1, and at
//! `(0, 0)` or `(∞, ∞)` the limit depends on the path and is NaN.

use sf_core::operation::{Interval, Operation, Param, Resolution, SpecialCase};
use sf_core::Real;
use sf_math::special::{ibeta, ibeta_inv, ibeta_inva, ibeta_invb, ibetac, ibetac_inv};

fn indeterminate(p: &[Real; 3]) -> bool {
    let [a, b, _] = *p;
    (a == 0.0 && b == 0.0) || (a.is_infinite() && b.is_infinite())
}

/// Point mass at 0.
fn mass_at_zero(p: &[Real; 3]) -> bool {
    p[0] == 0.0 || p[1] == Real::INFINITY
}

/// Point mass at 1.
fn mass_at_one(p: &[Real; 3]) -> bool {
    p[1] == 0.0 || p[0] == Real::INFINITY
}

fn step(condition: bool) -> Resolution<3> {
    Resolution::Value(if condition { 1.0 } else { 0.0 })
}

const SHAPES_AND_X: [Param; 3] = [
    Param::new("a", Interval::NON_NEGATIVE),
    Param::new("b", Interval::NON_NEGATIVE),
    Param::new("x", Interval::UNIT),
];

// ── betainc ──────────────────────────────────────────────────────────────────

/// Limiting cases of `betainc`.
pub const BETAINC_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("a == b == 0 or a == b == inf", indeterminate, |_| Resolution::Value(Real::NAN)),
    SpecialCase::new("a == 0 or b == inf", mass_at_zero, |p| step(p[2] > 0.0)),
    SpecialCase::new("b == 0 or a == inf", mass_at_one, |p| step(p[2] >= 1.0)),
];

/// Descriptor of [`betainc`].
pub static BETAINC: Operation<3> = Operation::new("betainc", SHAPES_AND_X).with_cases(BETAINC_CASES);

/// Regularized incomplete beta function `I_x(a, b)`.
pub fn betainc(a: Real, b: Real, x: Real) -> Real {
    BETAINC.evaluate([a, b, x], |&[a, b, x]| ibeta(a, b, x))
}

// ── betaincc ─────────────────────────────────────────────────────────────────

/// Limiting cases of `betaincc`.
pub const BETAINCC_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("a == b == 0 or a == b == inf", indeterminate, |_| Resolution::Value(Real::NAN)),
    SpecialCase::new("a == 0 or b == inf", mass_at_zero, |p| step(p[2] <= 0.0)),
    SpecialCase::new("b == 0 or a == inf", mass_at_one, |p| step(p[2] < 1.0)),
];

/// Descriptor of [`betaincc`].
pub static BETAINCC: Operation<3> = Operation::new("betaincc", SHAPES_AND_X).with_cases(BETAINCC_CASES);

/// Complemented incomplete beta function `1 - I_x(a, b)`, evaluated
/// directly.
pub fn betaincc(a: Real, b: Real, x: Real) -> Real {
    BETAINCC.evaluate([a, b, x], |&[a, b, x]| ibetac(a, b, x))
}

// ── Inverses in x ────────────────────────────────────────────────────────────

const SHAPES_AND_PROBABILITY: [Param; 3] = [
    Param::new("a", Interval::POSITIVE),
    Param::new("b", Interval::POSITIVE),
    Param::new("p", Interval::UNIT),
];

/// Limiting cases of `betaincinv`.
pub const BETAINCINV_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("p == 0", |p| p[2] == 0.0, |_| Resolution::Value(0.0)),
    SpecialCase::new("p == 1", |p| p[2] == 1.0, |_| Resolution::Value(1.0)),
];

/// Descriptor of [`betaincinv`].
pub static BETAINCINV: Operation<3> =
    Operation::new("betaincinv", SHAPES_AND_PROBABILITY).with_cases(BETAINCINV_CASES);

/// `x` such that `betainc(a, b, x) == p`.
pub fn betaincinv(a: Real, b: Real, p: Real) -> Real {
    BETAINCINV.evaluate([a, b, p], |&[a, b, p]| ibeta_inv(a, b, p))
}

/// Limiting cases of `betainccinv`.
pub const BETAINCCINV_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("q == 0", |p| p[2] == 0.0, |_| Resolution::Value(1.0)),
    SpecialCase::new("q == 1", |p| p[2] == 1.0, |_| Resolution::Value(0.0)),
];

/// Descriptor of [`betainccinv`].
pub static BETAINCCINV: Operation<3> =
    Operation::new("betainccinv", SHAPES_AND_PROBABILITY).with_cases(BETAINCCINV_CASES);

/// `x` such that `betaincc(a, b, x) == q`.
pub fn betainccinv(a: Real, b: Real, q: Real) -> Real {
    BETAINCCINV.evaluate([a, b, q], |&[a, b, q]| ibetac_inv(a, b, q))
}

// ── Inverses in the shapes ───────────────────────────────────────────────────

/// Limiting cases of `btdtria`. `I_x(a, b)` falls from 1 to 0 as `a` grows.
pub const BTDTRIA_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("p == 1", |p| p[0] == 1.0, |_| Resolution::Value(0.0)),
    SpecialCase::new("p == 0", |p| p[0] == 0.0, |_| Resolution::Value(Real::INFINITY)),
];

/// Descriptor of [`btdtria`].
pub static BTDTRIA: Operation<3> = Operation::new(
    "btdtria",
    [
        Param::new("p", Interval::UNIT),
        Param::new("b", Interval::POSITIVE),
        Param::new("x", Interval::POSITIVE),
    ],
)
.with_cases(BTDTRIA_CASES);

/// Shape `a` such that `betainc(a, b, x) == p`.
pub fn btdtria(p: Real, b: Real, x: Real) -> Real {
    BTDTRIA.evaluate([p, b, x], |&[p, b, x]| ibeta_inva(b, x, p))
}

/// Limiting cases of `btdtrib`. `I_x(a, b)` rises from 0 to 1 as `b` grows.
pub const BTDTRIB_CASES: &[SpecialCase<3>] = &[
    SpecialCase::new("p == 0", |p| p[1] == 0.0, |_| Resolution::Value(0.0)),
    SpecialCase::new("p == 1", |p| p[1] == 1.0, |_| Resolution::Value(Real::INFINITY)),
];

/// Descriptor of [`btdtrib`].
pub static BTDTRIB: Operation<3> = Operation::new(
    "btdtrib",
    [
        Param::new("a", Interval::POSITIVE),
        Param::new("p", Interval::UNIT),
        Param::new("x", Interval::POSITIVE),
    ],
)
.with_cases(BTDTRIB_CASES);

/// Shape `b` such that `betainc(a, b, x) == p`.
pub fn btdtrib(a: Real, p: Real, x: Real) -> Real {
    BTDTRIB.evaluate([a, p, x], |&[a, p, x]| ibeta_invb(a, x, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::{capture, ErrorKind};

    fn label(op: &Operation<3>, params: [Real; 3]) -> Option<&'static str> {
        op.matching_case(&params).map(|c| c.label)
    }

    // ── betainc rows ─────────────────────────────────────────────────────────

    #[test]
    fn betainc_indeterminate_shapes() {
        assert!(betainc(0.0, 0.0, 0.5).is_nan());
        assert!(betainc(Real::INFINITY, Real::INFINITY, 0.5).is_nan());
        assert_eq!(
            label(&BETAINC, [0.0, 0.0, 0.5]),
            Some("a == b == 0 or a == b == inf")
        );
    }

    #[test]
    fn betainc_mass_at_zero() {
        assert_eq!(betainc(0.0, 2.0, 0.0), 0.0);
        assert_eq!(betainc(0.0, 2.0, 1e-300), 1.0);
        assert_eq!(betainc(3.0, Real::INFINITY, 0.7), 1.0);
    }

    #[test]
    fn betainc_mass_at_one() {
        assert_eq!(betainc(2.0, 0.0, 0.999), 0.0);
        assert_eq!(betainc(2.0, 0.0, 1.0), 1.0);
        assert_eq!(betainc(Real::INFINITY, 3.0, 0.2), 0.0);
    }

    // ── betaincc rows ────────────────────────────────────────────────────────

    #[test]
    fn betaincc_indeterminate_shapes() {
        assert!(betaincc(0.0, 0.0, 0.5).is_nan());
        assert!(betaincc(Real::INFINITY, Real::INFINITY, 0.5).is_nan());
    }

    #[test]
    fn betaincc_mass_at_zero() {
        assert_eq!(betaincc(0.0, 2.0, 0.0), 1.0);
        assert_eq!(betaincc(0.0, 2.0, 0.4), 0.0);
        assert_eq!(betaincc(1.0, Real::INFINITY, 0.4), 0.0);
    }

    #[test]
    fn betaincc_mass_at_one() {
        assert_eq!(betaincc(2.0, 0.0, 0.4), 1.0);
        assert_eq!(betaincc(2.0, 0.0, 1.0), 0.0);
        assert_eq!(betaincc(Real::INFINITY, 1.0, 0.4), 1.0);
    }

    #[test]
    fn rows_are_silent() {
        let ((), reports) = capture(|| {
            betainc(0.0, 0.0, 0.5);
            betainc(0.0, 2.0, 0.5);
            betaincc(2.0, 0.0, 0.5);
        });
        assert!(reports.is_empty());
    }

    #[test]
    fn betainc_domain() {
        for params in [[-1.0, 2.0, 0.5], [2.0, -0.5, 0.5], [2.0, 2.0, 1.5], [2.0, 2.0, -0.1]] {
            let (v, reports) = capture(|| BETAINC.evaluate(params, |_| panic!("backend called")));
            assert!(v.is_nan());
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].kind, ErrorKind::Domain);
            assert_eq!(reports[0].function, "betainc");
        }
    }

    #[test]
    fn betainc_interior_values() {
        // I_x(1, b) = 1 - (1 - x)^b
        assert!((betainc(1.0, 3.0, 0.2) - (1.0 - 0.8_f64.powi(3))).abs() < 1e-15);
        assert!((betaincc(1.0, 3.0, 0.2) - 0.8_f64.powi(3)).abs() < 1e-15);
    }

    // ── inverses in x ────────────────────────────────────────────────────────

    #[test]
    fn betaincinv_ends() {
        assert_eq!(betaincinv(2.0, 3.0, 0.0), 0.0);
        assert_eq!(betaincinv(2.0, 3.0, 1.0), 1.0);
        assert_eq!(label(&BETAINCINV, [2.0, 3.0, 1.0]), Some("p == 1"));
    }

    #[test]
    fn betainccinv_ends() {
        assert_eq!(betainccinv(2.0, 3.0, 0.0), 1.0);
        assert_eq!(betainccinv(2.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn inverses_reject_zero_shapes() {
        let (v, reports) = capture(|| betaincinv(0.0, 3.0, 0.5));
        assert!(v.is_nan());
        assert_eq!(reports[0].function, "betaincinv");
        assert_eq!(reports[0].kind, ErrorKind::Domain);
    }

    #[test]
    fn inverses_in_x_invert() {
        let x = betaincinv(2.5, 4.0, 0.3);
        assert!((betainc(2.5, 4.0, x) - 0.3).abs() < 1e-12);
        let x = betainccinv(2.5, 4.0, 0.3);
        assert!((betaincc(2.5, 4.0, x) - 0.3).abs() < 1e-12);
    }

    // ── inverses in the shapes ───────────────────────────────────────────────

    #[test]
    fn btdtria_ends() {
        assert_eq!(btdtria(1.0, 2.0, 0.5), 0.0);
        assert_eq!(btdtria(0.0, 2.0, 0.5), Real::INFINITY);
    }

    #[test]
    fn btdtrib_ends() {
        assert_eq!(btdtrib(2.0, 0.0, 0.5), 0.0);
        assert_eq!(btdtrib(2.0, 1.0, 0.5), Real::INFINITY);
    }

    #[test]
    fn shape_inverses_invert() {
        // I_x(1, b) = 1 - (1 - x)^b, so b = ln(1 - p) / ln(1 - x).
        let b = btdtrib(1.0, 0.5, 0.25);
        assert!((b - 0.5_f64.ln() / 0.75_f64.ln()).abs() < 1e-9);
        // I_x(a, 1) = x^a, so a = ln p / ln x.
        let a = btdtria(0.3, 1.0, 0.6);
        assert!((a - 0.3_f64.ln() / 0.6_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn btdtria_reports_under_its_own_name() {
        let (_, reports) = capture(|| btdtria(0.5, 2.0, 0.0));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].function, "btdtria");
    }
}
