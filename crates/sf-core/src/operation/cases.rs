//! Limiting-case tables.
//!
//! Each operation owns an ordered slice of [`SpecialCase`] rows. A row pairs
//! a predicate over the full parameter tuple with a closed-form
//! [`Resolution`]; the first row whose predicate holds decides the result
//! and the general backend is not called.

use num_traits::Float;

use super::signal::Backend;
use crate::kind::ErrorKind;
use crate::Real;

/// What a matching row produces.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<const N: usize> {
    /// Return this value, silently.
    Value(Real),
    /// Report `kind`, then return the value.
    Error(ErrorKind, Real),
    /// Evaluate with an alternative backend instead of the primary one.
    Reroute(Backend<N>),
}

impl<const N: usize> Resolution<N> {
    /// The closed-form value, if the resolution has one.
    pub fn value(&self) -> Option<Real> {
        match *self {
            Resolution::Value(v) | Resolution::Error(_, v) => Some(v),
            Resolution::Reroute(_) => None,
        }
    }

    /// The reported kind, if any.
    pub fn error(&self) -> Option<ErrorKind> {
        match *self {
            Resolution::Error(kind, _) => Some(kind),
            _ => None,
        }
    }
}

/// One row of a limiting-case table.
#[derive(Debug, Clone, Copy)]
pub struct SpecialCase<const N: usize> {
    /// Short description, used in traces and error details.
    pub label: &'static str,
    /// When the row applies.
    pub matches: fn(&[Real; N]) -> bool,
    /// What it produces.
    pub resolve: fn(&[Real; N]) -> Resolution<N>,
}

impl<const N: usize> SpecialCase<N> {
    /// A new row.
    pub const fn new(
        label: &'static str,
        matches: fn(&[Real; N]) -> bool,
        resolve: fn(&[Real; N]) -> Resolution<N>,
    ) -> Self {
        Self {
            label,
            matches,
            resolve,
        }
    }

    /// Whether the row applies to `params`.
    #[inline]
    pub fn applies(&self, params: &[Real; N]) -> bool {
        (self.matches)(params)
    }
}

// ── Predicates shared by the tables ───────────────────────────────────────────

/// Finite and integral.
#[inline]
pub fn is_integer<T: Float>(x: T) -> bool {
    x.is_finite() && x.trunc() == x
}

/// An integer `<= 0`: a pole of Γ and of Pochhammer-based series.
#[inline]
pub fn is_nonpositive_integer<T: Float>(x: T) -> bool {
    is_integer(x) && x <= T::zero()
}

/// An integer `< 0`.
#[inline]
pub fn is_negative_integer<T: Float>(x: T) -> bool {
    is_integer(x) && x < T::zero()
}
