//! Limiting-case rows shared by the distribution facades.
//!
//! [`Limits<N, I>`] holds tables for an operation of arity `N` whose
//! argument (`x`, `p` or `q`) sits at index `I`. Tails at `±Inf` and
//! quantiles at probability 0 or 1 never reach a backend.

use sf_core::operation::{Resolution, SpecialCase};
use sf_core::Real;

fn is_pos_inf<const N: usize, const I: usize>(p: &[Real; N]) -> bool {
    p[I] == Real::INFINITY
}

fn is_neg_inf<const N: usize, const I: usize>(p: &[Real; N]) -> bool {
    p[I] == Real::NEG_INFINITY
}

pub(crate) fn is_infinite<const N: usize, const I: usize>(p: &[Real; N]) -> bool {
    p[I].is_infinite()
}

pub(crate) fn is_zero<const N: usize, const I: usize>(p: &[Real; N]) -> bool {
    p[I] == 0.0
}

pub(crate) fn is_one<const N: usize, const I: usize>(p: &[Real; N]) -> bool {
    p[I] == 1.0
}

pub(crate) fn zero<const N: usize>(_: &[Real; N]) -> Resolution<N> {
    Resolution::Value(0.0)
}

pub(crate) fn one<const N: usize>(_: &[Real; N]) -> Resolution<N> {
    Resolution::Value(1.0)
}

pub(crate) fn pos_inf<const N: usize>(_: &[Real; N]) -> Resolution<N> {
    Resolution::Value(Real::INFINITY)
}

pub(crate) fn neg_inf<const N: usize>(_: &[Real; N]) -> Resolution<N> {
    Resolution::Value(Real::NEG_INFINITY)
}

pub(crate) fn nan<const N: usize>(_: &[Real; N]) -> Resolution<N> {
    Resolution::Value(Real::NAN)
}

/// Tables for an `N`-ary operation with its argument at index `I`.
pub struct Limits<const N: usize, const I: usize>;

impl<const N: usize, const I: usize> Limits<N, I> {
    /// A density vanishes at `±Inf`.
    pub const DENSITY: &'static [SpecialCase<N>] =
        &[SpecialCase::new("x == ±Inf", is_infinite::<N, I>, zero::<N>)];

    /// `cdf(+Inf) = 1`, `cdf(-Inf) = 0`.
    pub const CDF: &'static [SpecialCase<N>] = &[
        SpecialCase::new("x == +Inf", is_pos_inf::<N, I>, one::<N>),
        SpecialCase::new("x == -Inf", is_neg_inf::<N, I>, zero::<N>),
    ];

    /// `sf(+Inf) = 0`, `sf(-Inf) = 1`.
    pub const SF: &'static [SpecialCase<N>] = &[
        SpecialCase::new("x == +Inf", is_pos_inf::<N, I>, zero::<N>),
        SpecialCase::new("x == -Inf", is_neg_inf::<N, I>, one::<N>),
    ];

    /// Quantile ends of a distribution on the real line.
    pub const PPF_REAL: &'static [SpecialCase<N>] = &[
        SpecialCase::new("p == 0", is_zero::<N, I>, neg_inf::<N>),
        SpecialCase::new("p == 1", is_one::<N, I>, pos_inf::<N>),
    ];

    /// Inverse-survival ends of a distribution on the real line.
    pub const ISF_REAL: &'static [SpecialCase<N>] = &[
        SpecialCase::new("q == 0", is_zero::<N, I>, pos_inf::<N>),
        SpecialCase::new("q == 1", is_one::<N, I>, neg_inf::<N>),
    ];

    /// Quantile ends of a distribution on `[0, +Inf)`.
    pub const PPF_POSITIVE: &'static [SpecialCase<N>] = &[
        SpecialCase::new("p == 0", is_zero::<N, I>, zero::<N>),
        SpecialCase::new("p == 1", is_one::<N, I>, pos_inf::<N>),
    ];

    /// Inverse-survival ends of a distribution on `[0, +Inf)`.
    pub const ISF_POSITIVE: &'static [SpecialCase<N>] = &[
        SpecialCase::new("q == 0", is_zero::<N, I>, pos_inf::<N>),
        SpecialCase::new("q == 1", is_one::<N, I>, zero::<N>),
    ];

    /// Quantile ends of a distribution on `[0, 1]`.
    pub const PPF_UNIT: &'static [SpecialCase<N>] = &[
        SpecialCase::new("p == 0", is_zero::<N, I>, zero::<N>),
        SpecialCase::new("p == 1", is_one::<N, I>, one::<N>),
    ];

    /// Inverse-survival ends of a distribution on `[0, 1]`.
    pub const ISF_UNIT: &'static [SpecialCase<N>] = &[
        SpecialCase::new("q == 0", is_zero::<N, I>, one::<N>),
        SpecialCase::new("q == 1", is_one::<N, I>, zero::<N>),
    ];
}
