//! Failure signals raised by numerical backends.

use thiserror::Error;

use crate::errors::Error;
use crate::Real;

/// How a backend says it could not produce a value.
///
/// These are the only failures a backend may return; the gateway maps each
/// to an [`ErrorKind`](crate::ErrorKind) and a sentinel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Signal {
    /// An argument is outside the algorithm's internal domain.
    #[error("argument outside the domain of the algorithm")]
    Domain,
    /// The result would overflow.
    #[error("result overflows")]
    Overflow,
    /// The result underflows to zero with loss of precision.
    #[error("result underflows")]
    Underflow,
    /// Any other failure (no convergence, loss of precision, ...).
    #[error("{0}")]
    Evaluation(String),
}

impl From<Error> for Signal {
    fn from(e: Error) -> Self {
        Signal::Evaluation(e.to_string())
    }
}

/// What a backend returns.
pub type BackendResult = std::result::Result<Real, Signal>;

/// A backend as a plain function pointer over the full parameter tuple.
pub type Backend<const N: usize> = fn(&[Real; N]) -> BackendResult;

/// Turn an infinite result computed from finite inputs into `Overflow`.
pub fn check_finite(value: Real) -> BackendResult {
    if value.is_infinite() {
        Err(Signal::Overflow)
    } else {
        Ok(value)
    }
}
