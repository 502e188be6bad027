//! Error types for specfun.
//!
//! Numerical failures inside a backend are *not* errors in this sense: they
//! travel as [`Signal`](crate::operation::Signal) values and are translated
//! by the gateway into a reported [`ErrorKind`](crate::ErrorKind) plus a
//! sentinel. The enum here covers the hard failures that do escape to the
//! caller: escalated reports, solver/integrator preconditions, and
//! non-convergence.

use thiserror::Error;

use crate::kind::ErrorKind;

/// The top-level error type used throughout specfun.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error, e.g. an iteration limit was reached.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A report whose configured action is `Raise`, or a kind an operation
    /// always escalates.
    #[error("{kind} in {function}{}", detail_suffix(.detail))]
    Raised {
        /// Name of the operation that reported.
        function: String,
        /// The reported kind.
        kind: ErrorKind,
        /// Optional detail passed with the report.
        detail: Option<String>,
    },
}

impl Error {
    /// The reported kind, if this error came from an escalated report.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Raised { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Shorthand `Result` type used throughout specfun.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sf_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sf_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sf_core::{fail, errors::Error};
/// fn always_err() -> sf_core::errors::Result<()> {
///     fail!("series did not converge after {} terms", 500);
/// }
/// assert!(matches!(always_err(), Err(Error::Runtime(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
