//! Cross-family laws for the distribution kernels: complements, quantile
//! round trips, and densities that integrate to the CDF.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sf_math::distributions::{
    BetaDistribution, CauchyDistribution, FisherFDistribution, InverseGaussianDistribution,
    NonCentralChiSquaredDistribution, NonCentralFDistribution, NonCentralTDistribution,
    SkewNormalDistribution,
};
use sf_math::{Integrator, TanhSinhIntegral};

// ─── Complement law ───────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ncx2_cdf_plus_sf_is_one(df in 0.5..30.0f64, nc in 0.0..40.0f64, x in 0.01..100.0f64) {
        let d = NonCentralChiSquaredDistribution::new(df, nc).unwrap();
        let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
        prop_assert!((total - 1.0).abs() < 1e-12, "total = {}", total);
    }

    #[test]
    fn ncf_cdf_plus_sf_is_one(dfn in 0.5..20.0f64, dfd in 0.5..20.0f64, nc in 0.0..20.0f64, x in 0.01..50.0f64) {
        let d = NonCentralFDistribution::new(dfn, dfd, nc).unwrap();
        let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
        prop_assert!((total - 1.0).abs() < 1e-12, "total = {}", total);
    }

    #[test]
    fn nct_cdf_plus_sf_is_one(df in 0.5..30.0f64, nc in -5.0..5.0f64, t in -20.0..20.0f64) {
        let d = NonCentralTDistribution::new(df, nc).unwrap();
        let total = d.cdf(t).unwrap() + d.sf(t).unwrap();
        prop_assert!((total - 1.0).abs() < 1e-15, "total = {}", total);
    }

    #[test]
    fn beta_cdf_plus_sf_is_one(a in 0.1..20.0f64, b in 0.1..20.0f64, x in 0.0..=1.0f64) {
        let d = BetaDistribution::new(a, b).unwrap();
        let total = d.cdf(x).unwrap() + d.sf(x).unwrap();
        prop_assert!((total - 1.0).abs() < 1e-13, "total = {}", total);
    }
}

// ─── Round trips ──────────────────────────────────────────────────────────────

#[test]
fn continuous_round_trips() {
    let ps = [1e-6, 0.1, 0.5, 0.9, 1.0 - 1e-6];
    let fdist = FisherFDistribution::new(3.0, 8.0).unwrap();
    let cauchy = CauchyDistribution::new(1.0, 0.5).unwrap();
    let invgauss = InverseGaussianDistribution::new(1.5, 4.0).unwrap();
    let skewnorm = SkewNormalDistribution::new(0.0, 2.0, 1.5).unwrap();
    for &p in &ps {
        assert_relative_eq!(fdist.cdf(fdist.ppf(p).unwrap()).unwrap(), p, max_relative = 1e-9);
        assert_relative_eq!(cauchy.cdf(cauchy.ppf(p).unwrap()).unwrap(), p, max_relative = 1e-12);
        assert_relative_eq!(invgauss.cdf(invgauss.ppf(p).unwrap()).unwrap(), p, max_relative = 1e-9);
        assert_relative_eq!(skewnorm.cdf(skewnorm.ppf(p).unwrap()).unwrap(), p, max_relative = 1e-9);
    }
}

// ─── Densities ────────────────────────────────────────────────────────────────

#[test]
fn densities_integrate_to_the_cdf() {
    let rule = TanhSinhIntegral::new(1e-12, 12);

    let ncf = NonCentralFDistribution::new(4.0, 9.0, 3.0).unwrap();
    let mass = rule.integrate(|x| ncf.pdf(x).unwrap(), 0.0, 2.0).unwrap();
    assert_relative_eq!(mass, ncf.cdf(2.0).unwrap(), max_relative = 1e-10);

    let nct = NonCentralTDistribution::new(6.0, -1.0).unwrap();
    let mass = rule.integrate_split(|t| nct.pdf(t).unwrap(), -3.0, 0.0, 1.0).unwrap();
    let expected = nct.cdf(1.0).unwrap() - nct.cdf(-3.0).unwrap();
    assert_relative_eq!(mass, expected, max_relative = 1e-10);

    let ncx2 = NonCentralChiSquaredDistribution::new(3.0, 2.0).unwrap();
    let mass = rule.integrate(|x| ncx2.pdf(x).unwrap(), 1.0, 6.0).unwrap();
    let expected = ncx2.cdf(6.0).unwrap() - ncx2.cdf(1.0).unwrap();
    assert_relative_eq!(mass, expected, max_relative = 1e-10);
}
