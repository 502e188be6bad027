//! # sf-stats
//!
//! Distribution functions for twelve families. Every function is a static
//! [`Operation`](sf_core::Operation) descriptor around one
//! [`sf_math::distributions`] kernel: the descriptor validates the family
//! parameters, resolves tails at `±Inf` and quantiles at probability 0 or 1
//! without touching the kernel, and discards probabilities outside `[0, 1]`
//! as [`ErrorKind::NoResult`](sf_core::ErrorKind::NoResult).
//!
//! Functions take the argument first, then the family parameters, and
//! report to the sink as `"<family>_<op>"`. The non-central F, non-central
//! t and F tails also carry their legacy names (`ncfdtr`, `ncfdtri`,
//! `nctdtr`, `nctdtrit`, `fdtr`, `fdtrc`, `fdtri`), which keep the argument
//! last.
//!
//! Moments return NaN without a report when the parameters put the moment
//! outside its range of existence.
//!
//! ```
//! use sf_stats::{binom_ppf, binom_cdf, ncfdtr, nct_variance};
//!
//! assert_eq!(ncfdtr(4.0, 9.0, 1.0, f64::INFINITY), 1.0);
//! assert!(nct_variance(1.0, 0.0).is_nan());
//! assert!(nct_variance(3.0, 0.0).is_finite());
//! assert_eq!(binom_ppf(binom_cdf(3.0, 10.0, 0.5), 10.0, 0.5), 3.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Shared tables ────────────────────────────────────────────────────────────

/// Limiting-case rows at the ends of the support and of `[0, 1]`.
pub mod limits;

/// Existence thresholds for moments.
pub mod moments;

// ── Families ─────────────────────────────────────────────────────────────────

/// Beta distribution.
pub mod beta;

/// Binomial distribution.
pub mod binom;

/// Cauchy distribution.
pub mod cauchy;

/// Fisher-Snedecor F distribution.
pub mod fdist;

/// Hypergeometric distribution.
pub mod hypergeom;

/// Inverse Gaussian distribution.
pub mod invgauss;

/// Landau distribution.
pub mod landau;

/// Negative binomial distribution.
pub mod nbinom;

/// Non-central F distribution.
pub mod ncf;

/// Non-central chi-squared distribution.
pub mod ncx2;

/// Non-central Student t distribution.
pub mod nct;

/// Skew-normal distribution.
pub mod skewnorm;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use beta::{
    beta_cdf, beta_isf, beta_kurtosis_excess, beta_mean, beta_pdf, beta_ppf, beta_sf, beta_skewness,
    beta_variance,
};
pub use binom::{
    binom_cdf, binom_isf, binom_kurtosis_excess, binom_mean, binom_pmf, binom_ppf, binom_sf, binom_skewness,
    binom_variance,
};
pub use cauchy::{
    cauchy_cdf, cauchy_isf, cauchy_kurtosis_excess, cauchy_mean, cauchy_pdf, cauchy_ppf, cauchy_sf,
    cauchy_skewness, cauchy_variance,
};
pub use fdist::{
    fdist_isf, fdist_kurtosis_excess, fdist_mean, fdist_pdf, fdist_skewness, fdist_variance, fdtr, fdtrc,
    fdtri,
};
pub use hypergeom::{hypergeom_cdf, hypergeom_mean, hypergeom_pmf, hypergeom_sf, hypergeom_skewness, hypergeom_variance};
pub use invgauss::{
    invgauss_cdf, invgauss_isf, invgauss_kurtosis_excess, invgauss_mean, invgauss_pdf, invgauss_ppf, invgauss_sf,
    invgauss_skewness, invgauss_variance,
};
pub use landau::{landau_cdf, landau_isf, landau_pdf, landau_ppf, landau_sf};
pub use nbinom::{
    nbinom_cdf, nbinom_isf, nbinom_kurtosis_excess, nbinom_mean, nbinom_pmf, nbinom_ppf, nbinom_sf,
    nbinom_skewness, nbinom_variance,
};
pub use ncf::{
    ncf_isf, ncf_kurtosis_excess, ncf_mean, ncf_pdf, ncf_sf, ncf_skewness, ncf_variance, ncfdtr, ncfdtri,
};
pub use ncx2::{
    ncx2_cdf, ncx2_isf, ncx2_kurtosis_excess, ncx2_mean, ncx2_pdf, ncx2_ppf, ncx2_sf, ncx2_skewness,
    ncx2_variance,
};
pub use nct::{
    nct_isf, nct_kurtosis_excess, nct_mean, nct_pdf, nct_sf, nct_skewness, nct_variance, nctdtr, nctdtrit,
};
pub use skewnorm::{
    skewnorm_cdf, skewnorm_isf, skewnorm_kurtosis_excess, skewnorm_mean, skewnorm_pdf, skewnorm_ppf, skewnorm_sf,
    skewnorm_skewness, skewnorm_variance,
};
