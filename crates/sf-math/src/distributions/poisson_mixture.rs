//! Poisson-weighted series `Σ_j e^{-λ} λ^j / j! · f(j)`.
//!
//! Every non-central distribution here is such a mixture of central ones.
//! Summation starts at the Poisson mode, where the weights are largest,
//! and walks outward in both directions with the weight recurrences
//! `w_{j-1} = w_j · j/λ` and `w_{j+1} = w_j · λ/(j+1)`. A direction stops
//! once its terms are negligible and no longer growing, or once the
//! weights underflow.

use std::f64::consts::PI;

use sf_core::operation::BackendResult;
use sf_core::{Real, Signal};
use statrs::function::gamma::ln_gamma;

use crate::special::gamma::stirling_correction;

/// Terms allowed in each direction from the mode.
pub const MAX_TERMS: u32 = 50_000;

/// Relative size of a negligible term.
const EPSILON: Real = 1e-16;

/// `Σ_j w_j f(j)` with Poisson(`lambda`) weights.
///
/// `f` is called with integer-valued `j` and may fail; the first failure
/// aborts the sum.
pub fn poisson_mixture<F>(lambda: Real, f: F) -> BackendResult
where
    F: Fn(Real) -> BackendResult,
{
    if !(lambda >= 0.0) || !lambda.is_finite() {
        return Err(Signal::Domain);
    }
    if lambda == 0.0 {
        return f(0.0);
    }

    let mode = lambda.floor();
    let w_mode = ln_poisson_weight(lambda, mode).exp();
    let mut sum = w_mode * f(mode)?;

    // Backward from the mode.
    let mut w = w_mode;
    let mut previous = Real::INFINITY;
    let mut j = mode;
    let mut steps = 0;
    while j > 0.0 {
        steps += 1;
        if steps > MAX_TERMS {
            return Err(exhausted(lambda));
        }
        w *= j / lambda;
        j -= 1.0;
        let term = w * f(j)?;
        sum += term;
        if w == 0.0 || negligible(term, previous, sum) {
            break;
        }
        previous = term.abs();
    }

    // Forward from the mode.
    let mut w = w_mode;
    let mut previous = Real::INFINITY;
    let mut j = mode;
    for _ in 0..MAX_TERMS {
        w *= lambda / (j + 1.0);
        j += 1.0;
        if w == 0.0 {
            return Ok(sum);
        }
        let term = w * f(j)?;
        sum += term;
        if negligible(term, previous, sum) {
            return Ok(sum);
        }
        previous = term.abs();
    }
    Err(exhausted(lambda))
}

fn exhausted(lambda: Real) -> Signal {
    Signal::Evaluation(format!("Poisson mixture with λ = {lambda} did not converge in {MAX_TERMS} terms"))
}

/// The same sum for a mixture of probabilities, held to `[0, 1]` against
/// the rounding of its terms.
pub fn probability_mixture<F>(lambda: Real, f: F) -> BackendResult
where
    F: Fn(Real) -> BackendResult,
{
    Ok(poisson_mixture(lambda, f)?.clamp(0.0, 1.0))
}

/// `ln(e^{-λ} λ^m / m!)` for integer `m >= 0`.
fn ln_poisson_weight(lambda: Real, m: Real) -> Real {
    if m < 20.0 {
        return -lambda + m * lambda.ln() - ln_gamma(m + 1.0);
    }
    // Stirling's series with λ/m = 1 + (λ - m)/m kept exact.
    (m - lambda) + m * ((lambda - m) / m).ln_1p() - 0.5 * (2.0 * PI * m).ln() - stirling_correction(m)
}

#[inline]
fn negligible(term: Real, previous: Real, sum: Real) -> bool {
    term.abs() <= previous && term.abs() <= EPSILON * sum.abs()
}
