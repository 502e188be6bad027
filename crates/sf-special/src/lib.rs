//! # sf-special
//!
//! Public special-function operations. Each function is a static
//! [`Operation`](sf_core::Operation) descriptor with its limiting-case table
//! and an [`sf_math`] backend; calling the function runs the descriptor's
//! gateway with the sink in effect on the current thread.
//!
//! The descriptors are public so callers can evaluate against an explicit
//! sink, inspect which table row a request hits, or obtain the reported kind
//! alongside the value.
//!
//! ```
//! use sf_special::{betainc, powm1};
//!
//! assert_eq!(betainc(0.0, 2.0, 0.3), 1.0);
//! assert!((betainc(2.0, 2.0, 0.25) - 0.15625).abs() < 1e-15);
//! assert_eq!(powm1(2.0, 10.0).unwrap(), 1023.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Regularized incomplete beta, its complement and inverses.
pub mod beta;

/// Inverse error function.
pub mod erf;

/// Confluent hypergeometric function.
pub mod hyp1f1;

/// `x^y - 1`.
pub mod powm1;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use beta::{betainc, betaincc, betainccinv, betaincinv, btdtria, btdtrib};
pub use erf::erfinv;
pub use hyp1f1::hyp1f1;
pub use powm1::{powm1, powm1_saturating};
