//! Laws every special-function operation obeys: silent NaN propagation,
//! complements, and report routing through an explicit sink.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sf_core::{capture, ErrorAction, ErrorKind, RecordingSink, ScopedErrorPolicy};
use sf_special::beta::BETAINC;
use sf_special::{
    betainc, betaincc, betainccinv, betaincinv, btdtria, btdtrib, erfinv, hyp1f1, powm1, powm1_saturating,
};

// ─── NaN propagation ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nan_in_any_slot_is_silent(u in -5.0..5.0f64, v in 0.0..10.0f64, x in 0.0..=1.0f64) {
        let n = f64::NAN;
        let (values, reports) = capture(|| {
            [
                betainc(n, v, x),
                betainc(v, n, x),
                betainc(v, v, n),
                betaincc(n, v, x),
                betaincc(v, n, x),
                betaincc(v, v, n),
                betaincinv(n, v, x),
                betaincinv(v, n, x),
                betainccinv(v, v, n),
                btdtria(n, v, x),
                btdtria(x, n, v),
                btdtrib(v, x, n),
                hyp1f1(n, u, v),
                hyp1f1(u, n, v),
                hyp1f1(u, v, n),
                powm1_saturating(n, u),
                powm1_saturating(u, n),
                erfinv(n),
            ]
        });
        for (i, value) in values.iter().enumerate() {
            prop_assert!(value.is_nan(), "operation {} gave {}", i, value);
        }
        prop_assert!(reports.is_empty(), "{:?}", reports);
    }

    #[test]
    fn powm1_nan_is_not_an_error(y in -10.0..10.0f64) {
        let (v, reports) = capture(|| (powm1(f64::NAN, y), powm1(1.5, f64::NAN)));
        prop_assert!(v.0.unwrap().is_nan());
        prop_assert!(v.1.unwrap().is_nan());
        prop_assert!(reports.is_empty());
    }

    #[test]
    fn betainc_and_betaincc_sum_to_one(a in 0.05..50.0f64, b in 0.05..50.0f64, x in 0.0..=1.0f64) {
        let total = betainc(a, b, x) + betaincc(a, b, x);
        prop_assert!((total - 1.0).abs() < 1e-12, "total = {}", total);
    }

    #[test]
    fn betaincinv_round_trips(a in 0.5..20.0f64, b in 0.5..20.0f64, p in 0.001..0.999f64) {
        let x = betaincinv(a, b, p);
        prop_assert!((betainc(a, b, x) - p).abs() < 1e-11);
    }
}

// ─── Limiting identities ──────────────────────────────────────────────────────

#[test]
fn betainc_zero_shape_limits() {
    for b in [0.5, 1.0, 7.0, f64::INFINITY] {
        for x in [0.0, 1e-10, 0.5, 1.0] {
            let expected = if x > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(betainc(0.0, b, x), expected, "b = {b}, x = {x}");
        }
    }
    for a in [0.5, 1.0, 7.0, f64::INFINITY] {
        for x in [0.0, 0.5, 1.0 - 1e-12, 1.0] {
            let expected = if x < 1.0 { 0.0 } else { 1.0 };
            assert_eq!(betainc(a, 0.0, x), expected, "a = {a}, x = {x}");
        }
    }
}

#[test]
fn powm1_identity_rows() {
    for x in [0.0, -3.0, 2.5, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(powm1(x, 0.0), Ok(0.0));
    }
    for y in [0.0, -3.0, 2.5, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(powm1(1.0, y), Ok(0.0));
    }
}

#[test]
fn reference_values() {
    assert_relative_eq!(betainc(2.0, 3.0, 0.5), 0.6875, max_relative = 1e-14);
    assert_relative_eq!(betaincc(2.0, 3.0, 0.5), 0.3125, max_relative = 1e-14);
    assert_relative_eq!(erfinv(0.5), 0.476_936_276_204_469_9, max_relative = 1e-14);
    assert_relative_eq!(hyp1f1(1.0, 2.0, 1.0), std::f64::consts::E - 1.0, max_relative = 1e-14);
    assert_relative_eq!(powm1_saturating(2.0, 10.0), 1023.0, max_relative = 1e-15);
}

// ─── Reporting ────────────────────────────────────────────────────────────────

#[test]
fn explicit_sink_receives_the_report() {
    let sink = RecordingSink::new();
    let v = BETAINC.evaluate_with(&sink, [1.0, 1.0, 2.0], |_| panic!("backend called"));
    assert!(v.is_nan());
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].function, "betainc");
    assert_eq!(reports[0].kind, ErrorKind::Domain);
}

#[test]
fn raise_policy_surfaces_through_checked() {
    let _guard = ScopedErrorPolicy::with(ErrorKind::Domain, ErrorAction::Raise);
    let result = sf_core::checked(|| betainc(-1.0, 1.0, 0.5));
    let err = result.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Domain));

    let ok = sf_core::checked(|| betainc(1.0, 1.0, 0.5));
    assert!((ok.unwrap() - 0.5).abs() < 1e-15);
}

#[test]
fn powm1_overflow_is_a_hard_error_under_any_policy() {
    let _guard = ScopedErrorPolicy::all(ErrorAction::Ignore);
    let err = powm1(1e10, 1e10).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Overflow));
    assert_eq!(powm1_saturating(1e10, 1e10), f64::INFINITY);
}
