//! 1D root finding: Brent's method plus bracket expansion for monotone
//! functions on a half-line or the whole real line.
//!
//! Quantile and inverse-function backends know the direction of
//! monotonicity of the function they invert but rarely a bracket. The
//! `bracket_*` helpers walk outward from a guess until the sign changes;
//! `solve_*` chain that with [`brent`].

use sf_core::{ensure, fail, Result, Real};

/// Iteration cap shared by every solver and bracket search.
pub const MAX_ITERATIONS: u32 = 400;

/// Steps allowed when expanding a bracket geometrically across the full
/// exponent range of `f64`.
const MAX_EXPANSIONS: u32 = 2200;

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for a root of `f` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation.
/// `accuracy` is an absolute tolerance on `x`; pass `0.0` to iterate to
/// full relative precision.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = accuracy.max(Real::MIN_POSITIVE);
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    ensure!(!fa.is_nan() && !fb.is_nan(), "Brent: f is NaN at the bracket [{a}, {b}]");
    ensure!(
        fa == 0.0 || fb == 0.0 || (fa > 0.0) != (fb > 0.0),
        "Brent: f({a}) and f({b}) must have opposite signs"
    );
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITERATIONS {
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
        ensure!(!fb.is_nan(), "Brent: f is NaN at {b}");
    }
    fail!("Brent solver: maximum iterations ({MAX_ITERATIONS}) reached")
}

// ── Bracket expansion ─────────────────────────────────────────────────────────

/// Orient `f` so that it increases.
fn oriented<F: Fn(Real) -> Real>(f: &F, increasing: bool) -> impl Fn(Real) -> Real + '_ {
    move |x| if increasing { f(x) } else { -f(x) }
}

/// Find `[lo, hi] ⊂ (0, +Inf)` on which the monotone `f` changes sign,
/// starting from `guess > 0` and doubling or halving.
pub fn bracket_positive<F>(f: F, guess: Real, increasing: bool) -> Result<(Real, Real)>
where
    F: Fn(Real) -> Real,
{
    ensure!(guess > 0.0 && guess.is_finite(), "bracket_positive: guess must be positive, got {guess}");
    let g = oriented(&f, increasing);
    let mut x = guess;
    let mut gx = g(x);
    ensure!(!gx.is_nan(), "bracket_positive: f is NaN at {x}");
    if gx == 0.0 {
        return Ok((x, x));
    }
    let up = gx < 0.0;
    for _ in 0..MAX_EXPANSIONS {
        let next = if up { x * 2.0 } else { x * 0.5 };
        if next == 0.0 || next.is_infinite() {
            break;
        }
        let gn = g(next);
        ensure!(!gn.is_nan(), "bracket_positive: f is NaN at {next}");
        if (gn >= 0.0) == up {
            return Ok(if up { (x, next) } else { (next, x) });
        }
        x = next;
        gx = gn;
    }
    fail!("bracket_positive: no sign change between {guess} and {x} (f = {gx})")
}

/// Find `[lo, hi]` on which the monotone `f` changes sign, starting from
/// `guess` and stepping outward by `step`, doubling each time.
pub fn bracket_real<F>(f: F, guess: Real, step: Real, increasing: bool) -> Result<(Real, Real)>
where
    F: Fn(Real) -> Real,
{
    ensure!(guess.is_finite(), "bracket_real: guess must be finite, got {guess}");
    ensure!(step > 0.0, "bracket_real: step must be positive, got {step}");
    let g = oriented(&f, increasing);
    let mut x = guess;
    let mut gx = g(x);
    ensure!(!gx.is_nan(), "bracket_real: f is NaN at {x}");
    if gx == 0.0 {
        return Ok((x, x));
    }
    let up = gx < 0.0;
    let mut h = step;
    for _ in 0..MAX_EXPANSIONS {
        let next = if up { x + h } else { x - h };
        if next.is_infinite() {
            break;
        }
        let gn = g(next);
        ensure!(!gn.is_nan(), "bracket_real: f is NaN at {next}");
        if (gn >= 0.0) == up {
            return Ok(if up { (x, next) } else { (next, x) });
        }
        x = next;
        gx = gn;
        h *= 2.0;
    }
    fail!("bracket_real: no sign change between {guess} and {x} (f = {gx})")
}

/// Root of a monotone `f` on `(0, +Inf)`.
pub fn solve_positive<F>(f: F, guess: Real, increasing: bool) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let (lo, hi) = bracket_positive(&f, guess, increasing)?;
    if lo == hi {
        return Ok(lo);
    }
    brent(&f, lo, hi, 0.0)
}

/// Root of a monotone `f` on the real line.
pub fn solve_real<F>(f: F, guess: Real, step: Real, increasing: bool) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let (lo, hi) = bracket_real(&f, guess, step, increasing)?;
    if lo == hi {
        return Ok(lo);
    }
    brent(&f, lo, hi, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brent_sqrt2() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn brent_full_precision_for_tiny_roots() {
        let target = 3.0e-200;
        let root = brent(|x| x - target, 0.0, 1.0, 0.0).unwrap();
        assert!(((root - target) / target).abs() < 1e-12, "got {root}");
    }

    #[test]
    fn brent_opposite_signs_required() {
        assert!(brent(|x| x, 1.0, 2.0, 1e-10).is_err());
    }

    #[test]
    fn brent_rejects_nan() {
        assert!(brent(|_| f64::NAN, 0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn positive_bracket_walks_up_and_down() {
        let (lo, hi) = bracket_positive(|x| x - 1000.0, 1.0, true).unwrap();
        assert!(lo <= 1000.0 && 1000.0 <= hi);
        let (lo, hi) = bracket_positive(|x| 1e-9 - x, 1.0, false).unwrap();
        assert!(lo <= 1e-9 && 1e-9 <= hi);
    }

    #[test]
    fn positive_bracket_fails_without_root() {
        assert!(bracket_positive(|x| x + 1.0, 1.0, true).is_err());
    }

    #[test]
    fn real_solver_finds_far_roots() {
        let root = solve_real(|x| (x + 1.0e6).atan(), 0.0, 1.0, true).unwrap();
        assert!((root + 1.0e6).abs() < 1e-6, "got {root}");
    }

    #[test]
    fn positive_solver_on_decreasing_function() {
        let root = solve_positive(|x: f64| (-x).exp() - 0.25, 1.0, false).unwrap();
        assert!((root - 4.0_f64.ln()).abs() < 1e-14, "got {root}");
    }
}
