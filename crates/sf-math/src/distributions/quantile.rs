//! Quantile searches over a distribution's CDF and survival function.
//!
//! A quantile request names a target probability in one of the two tails.
//! Continuous searches invert whichever of `cdf` and `sf` has the smaller
//! target, so targets near 1 never lose digits to `1 - p`. Discrete
//! searches compare against the tail the request named: a round-up
//! quantile has to agree exactly with that function at the answer, and
//! `1 - p` may sit an ulp away from the other one.
//!
//! Kernels evaluate fallibly while the solvers want plain `Fn(Real) ->
//! Real`; a [`SignalTrap`] sits in between, turning the first backend
//! [`Signal`] into a NaN that stops the solver and then handing that signal
//! back in place of the solver's own error.

use std::cell::RefCell;

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};

use crate::solvers1d::{solve_positive, solve_real, MAX_ITERATIONS};

/// Records the first [`Signal`] raised inside a solver callback.
#[derive(Debug, Default)]
pub struct SignalTrap {
    first: RefCell<Option<Signal>>,
}

impl SignalTrap {
    /// An empty trap.
    pub fn new() -> Self {
        Self::default()
    }

    /// The value, or NaN after recording the signal.
    pub fn value(&self, result: BackendResult) -> Real {
        match result {
            Ok(v) => v,
            Err(signal) => {
                let mut first = self.first.borrow_mut();
                if first.is_none() {
                    *first = Some(signal);
                }
                Real::NAN
            }
        }
    }

    /// The solver's result, unless a signal was trapped along the way.
    pub fn finish(self, solved: sf_core::Result<Real>) -> BackendResult {
        match self.first.into_inner() {
            Some(signal) => Err(signal),
            None => solved.map_err(Signal::from),
        }
    }
}

/// The tail a quantile request was stated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// `cdf(x) = p`.
    Lower,
    /// `sf(x) = q`.
    Upper,
}

/// A target probability, held as both `p` (lower tail) and `q = 1 - p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Lower-tail probability.
    pub p: Real,
    /// Upper-tail probability.
    pub q: Real,
    /// The tail given exactly; the other is derived by subtraction.
    pub tail: Tail,
}

impl Target {
    /// The quantile of `p`: `cdf(x) = p`.
    pub fn lower(p: Real) -> Self {
        Self { p, q: 1.0 - p, tail: Tail::Lower }
    }

    /// The inverse survival of `q`: `sf(x) = q`.
    pub fn upper(q: Real) -> Self {
        Self { p: 1.0 - q, q, tail: Tail::Upper }
    }

    /// `true` if the lower tail carries the smaller target.
    #[inline]
    pub fn uses_cdf(&self) -> bool {
        self.p <= self.q
    }
}

/// Quantile of a distribution supported on `(0, ∞)`.
pub fn positive_quantile<C, S>(cdf: C, sf: S, target: Target, guess: Real) -> BackendResult
where
    C: Fn(Real) -> BackendResult,
    S: Fn(Real) -> BackendResult,
{
    let trap = SignalTrap::new();
    let solved = if target.uses_cdf() {
        solve_positive(|x| trap.value(cdf(x)) - target.p, guess, true)
    } else {
        solve_positive(|x| trap.value(sf(x)) - target.q, guess, false)
    };
    trap.finish(solved)
}

/// Quantile of a distribution supported on the real line. `step` is the
/// initial bracket width, typically the scale.
pub fn real_quantile<C, S>(cdf: C, sf: S, target: Target, guess: Real, step: Real) -> BackendResult
where
    C: Fn(Real) -> BackendResult,
    S: Fn(Real) -> BackendResult,
{
    let trap = SignalTrap::new();
    let solved = if target.uses_cdf() {
        solve_real(|x| trap.value(cdf(x)) - target.p, guess, step, true)
    } else {
        solve_real(|x| trap.value(sf(x)) - target.q, guess, step, false)
    };
    trap.finish(solved)
}

/// Round-up quantile of an integer-valued distribution on `[lower, upper]`:
/// the smallest `k` with `cdf(k) >= p` for a lower-tail target, or with
/// `sf(k) <= q` for an upper-tail one.
///
/// `upper` may be `+Inf`. The search gallops outward from `guess` and then
/// bisects on integers.
pub fn discrete_quantile<C, S>(cdf: C, sf: S, target: Target, lower: Real, upper: Real, guess: Real) -> BackendResult
where
    C: Fn(Real) -> BackendResult,
    S: Fn(Real) -> BackendResult,
{
    let hit = |k: Real| -> Result<bool, Signal> {
        if k >= upper {
            return Ok(true);
        }
        match target.tail {
            Tail::Lower => Ok(cdf(k)? >= target.p),
            Tail::Upper => Ok(sf(k)? <= target.q),
        }
    };
    let mut steps = 0;
    let mut tick = || {
        steps += 1;
        if steps > MAX_ITERATIONS {
            Err(Signal::Evaluation(format!(
                "discrete quantile search exceeded {MAX_ITERATIONS} steps"
            )))
        } else {
            Ok(())
        }
    };

    let start = if guess.is_finite() { guess.floor().clamp(lower, upper) } else { lower };
    // Invariant: hit(hi), and lo < lower or !hit(lo).
    let mut lo = start;
    let mut hi = start;
    let mut step = 1.0;
    if hit(start)? {
        loop {
            tick()?;
            let probe = hi - step;
            if probe < lower {
                lo = lower - 1.0;
                break;
            }
            if !hit(probe)? {
                lo = probe;
                break;
            }
            hi = probe;
            step *= 2.0;
        }
    } else {
        loop {
            tick()?;
            let probe = lo + step;
            if hit(probe)? {
                hi = probe;
                break;
            }
            lo = probe;
            step *= 2.0;
        }
    }
    while hi - lo > 1.0 {
        tick()?;
        let mid = lo + ((hi - lo) * 0.5).floor();
        if hit(mid)? {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi.min(upper))
}
