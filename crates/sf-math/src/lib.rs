//! # sf-math
//!
//! Numerical backends behind the specfun gateway.
//!
//! Everything here is a plain function or a small parameter struct whose
//! methods return [`BackendResult`](sf_core::operation::BackendResult).
//! Backends never report errors themselves: they signal
//! [`Signal`](sf_core::Signal)s and leave classification, sentinels and
//! reporting to the [`Operation`](sf_core::Operation) that calls them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Distribution kernels: densities, tails, quantiles and moments.
pub mod distributions;

/// Numerical integration.
pub mod integrals;

/// 1-D root finding.
pub mod solvers1d;

/// Special functions: incomplete beta, `erf_inv`, `powm1`, hypergeometric
/// series, Owen's T.
pub mod special;

pub use integrals::{Integrator, TanhSinhIntegral};
