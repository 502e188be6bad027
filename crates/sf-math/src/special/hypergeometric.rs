//! Confluent hypergeometric function ₁F₁ and the generalized series ₚFq.
//!
//! - ₁F₁(a; b; z): Kummer's M, the primary backend of `hyp1f1`
//! - ₚFq(a₁..aₚ; b₁..b_q; z): term-by-term series with exact parameter
//!   cancellation, used where the primary path is unreliable
//!
//! # References
//! - DLMF 13.2 (series), 13.2.39 (Kummer transformation), 13.7 (large |z|)
//! - DLMF 16.2 (generalized hypergeometric series)

use sf_core::operation::{is_negative_integer, is_nonpositive_integer, BackendResult};
use sf_core::{Real, Signal};

use super::gamma::ln_gamma_signed;

/// Maximum terms in any series expansion.
const MAX_SERIES_TERMS: usize = 10_000;

/// Relative size of the last term at convergence.
const EPSILON: Real = 1e-16;

/// Largest term over result tolerated before the sum is untrustworthy.
const CANCELLATION_LIMIT: Real = 1e8;

/// The same bound for the double-double re-summation.
const WIDE_CANCELLATION_LIMIT: Real = 1e23;

/// `|z|` from which the large-argument expansion is tried first.
const ASYMPTOTIC_Z: Real = 40.0;

/// Terms tried in the large-argument expansion.
const MAX_ASYMPTOTIC_TERMS: usize = 200;

const MAX_LN: Real = 709.782_712_893_384;
const MIN_LN: Real = -745.133_219_101_941_1;

/// Confluent hypergeometric function ₁F₁(a; b; z) (Kummer's M).
///
/// ```text
/// ₁F₁(a; b; z) = Σ_{n=0}^∞ (a)_n / ((b)_n n!) z^n
/// ```
///
/// # Algorithm
/// - `a` a non-positive integer: the terminating polynomial
/// - `a == b`: `exp(z)`
/// - `|z| >= 40`: large-argument expansion when it converges
/// - `z < 0`: Kummer's transformation `e^z ₁F₁(b-a; b; -z)`, so the series
///   runs with a positive argument
/// - otherwise the power series; when cancellation eats its digits the
///   same terms are summed again in double-double arithmetic
///
/// # Signals
/// - `Domain` for non-finite arguments or a pole at non-positive integer `b`
/// - `Overflow` / `Underflow` when the result leaves the `f64` range
/// - `Evaluation` when no method converged to a trustworthy value
pub fn hyp1f1(a: Real, b: Real, z: Real) -> BackendResult {
    if !a.is_finite() || !b.is_finite() || !z.is_finite() {
        return Err(Signal::Domain);
    }
    // Poles at non-positive integer b, unless the series terminates first.
    if is_nonpositive_integer(b) && !(is_negative_integer(a) && a >= b) {
        return Err(Signal::Domain);
    }
    if a == 0.0 || z == 0.0 {
        return Ok(1.0);
    }
    if is_negative_integer(a) {
        return series(&[a], &[b], z);
    }
    if a == b {
        return finite(z.exp());
    }
    if z < 0.0 && is_nonpositive_integer(b - a) {
        // Kummer's transformation turns this into a polynomial.
        return scaled(z, series(&[b - a], &[b], -z)?);
    }
    if z.abs() >= ASYMPTOTIC_Z {
        if let Some(value) = asymptotic(a, b, z)? {
            return Ok(value);
        }
    }
    if z < 0.0 {
        let sum = series(&[b - a], &[b], -z)?;
        return scaled(z, sum);
    }
    series(&[a], &[b], z)
}

/// Generalized hypergeometric series ₚFq(a; b; z).
///
/// Numerator and denominator parameters that are exactly equal cancel
/// before summation. A remaining non-positive integer `b` is a pole
/// (`Domain`) unless a non-positive integer `a` terminates the series
/// before it is reached. For `p > q + 1` the non-terminating series
/// diverges for every `z != 0`; for `p == q + 1` it needs `|z| < 1`.
pub fn hyp_pfq(a: &[Real], b: &[Real], z: Real) -> BackendResult {
    if a.iter().chain(b).any(|v| !v.is_finite()) || !z.is_finite() {
        return Err(Signal::Domain);
    }
    let mut num: Vec<Real> = a.to_vec();
    let mut den: Vec<Real> = Vec::with_capacity(b.len());
    for &bj in b {
        match num.iter().position(|&ai| ai == bj) {
            Some(i) => {
                num.swap_remove(i);
            }
            None => den.push(bj),
        }
    }

    let terminating = num
        .iter()
        .copied()
        .filter(|&ai| is_nonpositive_integer(ai))
        .reduce(Real::max);
    for &bj in &den {
        if is_nonpositive_integer(bj) && !terminating.is_some_and(|m| m >= bj) {
            return Err(Signal::Domain);
        }
    }
    if z == 0.0 || terminating == Some(0.0) {
        return Ok(1.0);
    }
    if terminating.is_some() {
        return series(&num, &den, z);
    }
    if num.len() > den.len() + 1 || (num.len() == den.len() + 1 && z.abs() >= 1.0) {
        return Err(Signal::Domain);
    }
    if num.is_empty() && den.is_empty() {
        return finite(z.exp());
    }
    series(&num, &den, z)
}

/// Ratio of consecutive series terms at index `n`.
#[inline]
fn term_ratio(a: &[Real], b: &[Real], z: Real, n: Real) -> Real {
    let top: Real = a.iter().map(|&ai| ai + n).product();
    let bottom: Real = b.iter().map(|&bj| bj + n).product();
    top / (bottom * (n + 1.0)) * z
}

/// Number of terms after which the series stops, when some `a` is a
/// non-positive integer.
fn terminating_length(a: &[Real]) -> Option<Real> {
    a.iter()
        .copied()
        .filter(|&ai| is_nonpositive_integer(ai))
        .reduce(Real::max)
        .map(|degree| -degree)
}

/// Term-by-term sum of ₚFq, terminating or not.
///
/// Early exit needs every `b + n` positive, so that the term ratio cannot
/// grow again once it has dropped below one.
fn series(a: &[Real], b: &[Real], z: Real) -> BackendResult {
    let length = terminating_length(a);
    let mut sum: Real = 1.0;
    let mut term: Real = 1.0;
    let mut max_term: Real = 1.0;
    let mut mixed = false;

    for n in 0..MAX_SERIES_TERMS {
        let nf = n as Real;
        if length.is_some_and(|m| nf >= m) {
            return settle(a, b, z, sum, max_term, n);
        }
        let ratio = term_ratio(a, b, z, nf);
        term *= ratio;
        sum += term;
        max_term = max_term.max(term.abs());
        mixed |= term < 0.0;
        if !sum.is_finite() || !term.is_finite() {
            return Err(if mixed {
                Signal::Evaluation(format!("hypergeometric series terms overflowed after {n} terms"))
            } else {
                Signal::Overflow
            });
        }
        let shrinking = ratio.abs() < 1.0 && b.iter().all(|&bj| bj + nf > 0.0);
        if term == 0.0 || (shrinking && term.abs() <= EPSILON * sum.abs()) {
            return settle(a, b, z, sum, max_term, n + 1);
        }
    }
    Err(Signal::Evaluation(format!(
        "hypergeometric series did not converge in {MAX_SERIES_TERMS} terms"
    )))
}

/// Accept a finished sum, or redo its `terms` terms in double-double when
/// the largest one dwarfs it.
fn settle(
    a: &[Real],
    b: &[Real],
    z: Real,
    sum: Real,
    max_term: Real,
    terms: usize,
) -> BackendResult {
    if max_term <= CANCELLATION_LIMIT * sum.abs() {
        return Ok(sum);
    }
    let (sum, max_term) = wide_sum(a, b, z, terms);
    if !sum.is_finite() || max_term > WIDE_CANCELLATION_LIMIT * sum.abs() {
        return Err(Signal::Evaluation(format!(
            "hypergeometric series lost precision to cancellation (largest term {max_term:e}, sum {sum:e})"
        )));
    }
    Ok(sum)
}

// ── Double-double ─────────────────────────────────────────────────────────────

/// `hi + lo` with `|lo| <= ulp(hi)/2`.
#[derive(Debug, Clone, Copy)]
struct Wide {
    hi: Real,
    lo: Real,
}

impl Wide {
    fn new(x: Real) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    /// Exact `a + b`.
    fn sum(a: Real, b: Real) -> Self {
        let s = a + b;
        let bb = s - a;
        Self { hi: s, lo: (a - (s - bb)) + (b - bb) }
    }

    fn normalized(hi: Real, lo: Real) -> Self {
        let s = hi + lo;
        Self { hi: s, lo: lo - (s - hi) }
    }

    fn add(self, o: Self) -> Self {
        let s = Self::sum(self.hi, o.hi);
        Self::normalized(s.hi, s.lo + self.lo + o.lo)
    }

    fn sub(self, o: Self) -> Self {
        self.add(Self { hi: -o.hi, lo: -o.lo })
    }

    fn mul(self, o: Self) -> Self {
        let p = self.hi * o.hi;
        let e = self.hi.mul_add(o.hi, -p) + (self.hi * o.lo + self.lo * o.hi);
        Self::normalized(p, e)
    }

    fn div(self, o: Self) -> Self {
        let q1 = self.hi / o.hi;
        let r = self.sub(o.mul(Self::new(q1)));
        let q2 = r.hi / o.hi;
        let r = r.sub(o.mul(Self::new(q2)));
        let q3 = r.hi / o.hi;
        Self::normalized(q1, q2).add(Self::new(q3))
    }

    fn value(self) -> Real {
        self.hi + self.lo
    }
}

/// The first `terms` terms of ₚFq summed in double-double, with the
/// largest term seen.
fn wide_sum(a: &[Real], b: &[Real], z: Real, terms: usize) -> (Real, Real) {
    let mut sum = Wide::new(1.0);
    let mut term = Wide::new(1.0);
    let mut max_term: Real = 1.0;
    for n in 0..terms {
        let nf = n as Real;
        let top = a.iter().fold(Wide::new(z), |acc, &ai| acc.mul(Wide::sum(ai, nf)));
        let bottom = b.iter().fold(Wide::new(nf + 1.0), |acc, &bj| acc.mul(Wide::sum(bj, nf)));
        term = term.mul(top).div(bottom);
        sum = sum.add(term);
        max_term = max_term.max(term.hi.abs());
    }
    (sum.value(), max_term)
}

/// Large-|z| expansion of ₁F₁ (DLMF 13.7.2 with the recessive part
/// dropped). `None` when the divergent series does not reach full
/// precision before its terms start growing.
fn asymptotic(a: Real, b: Real, z: Real) -> Result<Option<Real>, Signal> {
    let (lg_b, sg_b) = ln_gamma_signed(b);
    // Leading behaviour, the two series parameters, and the expansion
    // variable.
    let (log_prefactor, sign, p, q, w) = if z > 0.0 {
        let (lg_a, sg_a) = ln_gamma_signed(a);
        (lg_b - lg_a + z + (a - b) * z.ln(), sg_b * sg_a, b - a, 1.0 - a, z)
    } else {
        let (lg_ba, sg_ba) = ln_gamma_signed(b - a);
        (lg_b - lg_ba - a * (-z).ln(), sg_b * sg_ba, a, a - b + 1.0, -z)
    };
    if !log_prefactor.is_finite() {
        return Ok(None);
    }

    let mut sum: Real = 1.0;
    let mut term: Real = 1.0;
    for n in 0..MAX_ASYMPTOTIC_TERMS {
        let nf = n as Real;
        let next = term * (p + nf) * (q + nf) / ((nf + 1.0) * w);
        if next == 0.0 {
            break;
        }
        if next.abs() >= term.abs() {
            return Ok(None);
        }
        term = next;
        sum += term;
        if term.abs() <= EPSILON * sum.abs() {
            break;
        }
        if n + 1 == MAX_ASYMPTOTIC_TERMS {
            return Ok(None);
        }
    }
    scaled_log(log_prefactor, sign, sum).map(Some)
}

/// `sign · exp(log) · s`, signalling when the result leaves the `f64` range.
fn scaled_log(log: Real, sign: Real, s: Real) -> BackendResult {
    if s == 0.0 {
        return Ok(0.0);
    }
    let m = log + s.abs().ln();
    if m > MAX_LN {
        return Err(Signal::Overflow);
    }
    if m < MIN_LN {
        return Err(Signal::Underflow);
    }
    Ok(sign * s.signum() * m.exp())
}

/// `exp(z) · s` without overflowing intermediates.
fn scaled(z: Real, s: Real) -> BackendResult {
    scaled_log(z, 1.0, s)
}

fn finite(value: Real) -> BackendResult {
    match value {
        v if v.is_infinite() => Err(Signal::Overflow),
        v if v.is_nan() => Err(Signal::Evaluation("hypergeometric value is not finite".into())),
        v => Ok(v),
    }
}
