//! Per-parameter domain constraints.

use std::fmt;

use crate::Real;

/// A real interval, possibly unbounded, with independently open ends.
///
/// Infinite bounds are ordinary values: `[0, +Inf]` admits `+Inf`, while
/// `[0, +Inf)` does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub lower: Real,
    /// Upper bound.
    pub upper: Real,
    /// Whether `lower` itself is excluded.
    pub lower_open: bool,
    /// Whether `upper` itself is excluded.
    pub upper_open: bool,
}

impl Interval {
    /// Every non-NaN value, including both infinities.
    pub const ANY: Interval = Interval::closed(Real::NEG_INFINITY, Real::INFINITY);
    /// Every finite value.
    pub const FINITE: Interval = Interval::open(Real::NEG_INFINITY, Real::INFINITY);
    /// `[0, +Inf]`.
    pub const NON_NEGATIVE: Interval = Interval::closed(0.0, Real::INFINITY);
    /// `[0, +Inf)`.
    pub const NON_NEGATIVE_FINITE: Interval = Interval::right_open(0.0, Real::INFINITY);
    /// `(0, +Inf]`.
    pub const POSITIVE: Interval = Interval::left_open(0.0, Real::INFINITY);
    /// `(0, +Inf)`.
    pub const POSITIVE_FINITE: Interval = Interval::open(0.0, Real::INFINITY);
    /// `[0, 1]`, the range of a probability.
    pub const UNIT: Interval = Interval::closed(0.0, 1.0);

    /// `[lower, upper]`.
    pub const fn closed(lower: Real, upper: Real) -> Self {
        Self {
            lower,
            upper,
            lower_open: false,
            upper_open: false,
        }
    }

    /// `(lower, upper)`.
    pub const fn open(lower: Real, upper: Real) -> Self {
        Self {
            lower,
            upper,
            lower_open: true,
            upper_open: true,
        }
    }

    /// `(lower, upper]`.
    pub const fn left_open(lower: Real, upper: Real) -> Self {
        Self {
            lower,
            upper,
            lower_open: true,
            upper_open: false,
        }
    }

    /// `[lower, upper)`.
    pub const fn right_open(lower: Real, upper: Real) -> Self {
        Self {
            lower,
            upper,
            lower_open: false,
            upper_open: true,
        }
    }

    /// Membership test. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: Real) -> bool {
        let above = if self.lower_open { x > self.lower } else { x >= self.lower };
        let below = if self.upper_open { x < self.upper } else { x <= self.upper };
        above && below
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_open { '(' } else { '[' },
            self.lower,
            self.upper,
            if self.upper_open { ')' } else { ']' }
        )
    }
}

/// A named parameter and the values it may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Name used in domain-error details.
    pub name: &'static str,
    /// Admissible values.
    pub domain: Interval,
}

impl Param {
    /// A parameter constrained to `domain`.
    pub const fn new(name: &'static str, domain: Interval) -> Self {
        Self { name, domain }
    }

    /// A parameter accepting any value, including infinities.
    pub const fn any(name: &'static str) -> Self {
        Self::new(name, Interval::ANY)
    }
}

/// A rule relating several parameters, checked after the per-parameter
/// intervals.
#[derive(Debug, Clone, Copy)]
pub struct Constraint<const N: usize> {
    /// Shown in the domain-error detail when the rule fails.
    pub description: &'static str,
    /// The rule itself.
    pub holds: fn(&[Real; N]) -> bool,
}
