//! Existence thresholds for moments.
//!
//! A family whose moments need a shape parameter above some minimum carries
//! a [`Thresholds`] value: per moment, the rows that short-circuit the
//! request to NaN. Heavy-tailed families use `dfd > 2, 4, 6, 8` or
//! `v > 1, 2, 3, 4`; families with all moments finite use [`Thresholds::NONE`].

use sf_core::operation::SpecialCase;
use sf_core::Real;

use crate::limits::nan;

/// Per-moment limiting-case rows.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds<const N: usize> {
    /// Rows for the mean.
    pub mean: &'static [SpecialCase<N>],
    /// Rows for the variance.
    pub variance: &'static [SpecialCase<N>],
    /// Rows for the skewness.
    pub skewness: &'static [SpecialCase<N>],
    /// Rows for the excess kurtosis.
    pub kurtosis_excess: &'static [SpecialCase<N>],
}

fn at_or_below<const N: usize, const I: usize, const T: u32>(p: &[Real; N]) -> bool {
    p[I] <= T as Real
}

fn always<const N: usize>(_: &[Real; N]) -> bool {
    true
}

/// The row for a moment that exists only while parameter `I` exceeds `T`.
pub const fn requires_above<const N: usize, const I: usize, const T: u32>(label: &'static str) -> SpecialCase<N> {
    SpecialCase::new(label, at_or_below::<N, I, T>, nan::<N>)
}

impl<const N: usize> Thresholds<N> {
    /// Every moment exists.
    pub const NONE: Self = Self {
        mean: &[],
        variance: &[],
        skewness: &[],
        kurtosis_excess: &[],
    };

    /// No moment exists.
    pub const UNDEFINED: Self = Self {
        mean: &[SpecialCase::new("mean undefined", always::<N>, nan::<N>)],
        variance: &[SpecialCase::new("variance undefined", always::<N>, nan::<N>)],
        skewness: &[SpecialCase::new("skewness undefined", always::<N>, nan::<N>)],
        kurtosis_excess: &[SpecialCase::new("kurtosis undefined", always::<N>, nan::<N>)],
    };
}
