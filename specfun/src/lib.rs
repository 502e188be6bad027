//! # specfun
//!
//! Special functions and distribution functions that share one
//! error-reporting policy.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on the
//! individual `sf-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! specfun = "0.1"
//! ```
//!
//! ```rust
//! use specfun::core::{capture, ErrorKind};
//! use specfun::special::betainc;
//! use specfun::stats::fdtr;
//!
//! assert!((betainc(1.0, 1.0, 0.25) - 0.25).abs() < 1e-15);
//! assert!((fdtr(2.0, 2.0, 3.0) - 0.75).abs() < 1e-14);
//!
//! let (value, reports) = capture(|| betainc(-1.0, 1.0, 0.5));
//! assert!(value.is_nan());
//! assert_eq!(reports[0].kind, ErrorKind::Domain);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error kinds, policy, sinks and the operation gateway.
pub use sf_core as core;

/// Numerical kernels: root finding, quadrature and distributions.
pub use sf_math as math;

/// Incomplete beta and its inverses, `erfinv`, `powm1` and `hyp1f1`.
pub use sf_special as special;

/// Distribution functions for twelve families.
pub use sf_stats as stats;
