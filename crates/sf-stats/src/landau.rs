//! Landau distribution.
//!
//! A non-finite argument gives a silent NaN. The quantiles accept an
//! infinite probability for the same reason instead of rejecting it as a
//! domain violation.

use sf_core::operation::{Interval, Operation, Param, SpecialCase};
use sf_core::Real;
use sf_math::distributions::LandauDistribution as Landau;

use crate::limits::{is_infinite, is_one, is_zero, nan, neg_inf, pos_inf};

const LOC: Param = Param::new("loc", Interval::FINITE);
const SCALE: Param = Param::new("scale", Interval::POSITIVE_FINITE);

const AT_X: [Param; 3] = [Param::any("x"), LOC, SCALE];
const AT_P: [Param; 3] = [Param::any("p"), LOC, SCALE];
const AT_Q: [Param; 3] = [Param::any("q"), LOC, SCALE];

const NOT_FINITE: SpecialCase<3> = SpecialCase::new("argument not finite", is_infinite::<3, 0>, nan::<3>);

const TAIL_CASES: &[SpecialCase<3>] = &[NOT_FINITE];
const PPF_CASES: &[SpecialCase<3>] = &[
    NOT_FINITE,
    SpecialCase::new("p == 0", is_zero::<3, 0>, neg_inf::<3>),
    SpecialCase::new("p == 1", is_one::<3, 0>, pos_inf::<3>),
];
const ISF_CASES: &[SpecialCase<3>] = &[
    NOT_FINITE,
    SpecialCase::new("q == 0", is_zero::<3, 0>, pos_inf::<3>),
    SpecialCase::new("q == 1", is_one::<3, 0>, neg_inf::<3>),
];

fn probability_or_infinite(p: &[Real; 3]) -> bool {
    p[0].is_infinite() || (0.0..=1.0).contains(&p[0])
}

/// Descriptor of [`landau_pdf`].
pub static LANDAU_PDF: Operation<3> = Operation::new("landau_pdf", AT_X).with_cases(TAIL_CASES);
/// Descriptor of [`landau_cdf`].
pub static LANDAU_CDF: Operation<3> = Operation::new("landau_cdf", AT_X)
    .probability()
    .with_cases(TAIL_CASES);
/// Descriptor of [`landau_sf`].
pub static LANDAU_SF: Operation<3> = Operation::new("landau_sf", AT_X)
    .probability()
    .with_cases(TAIL_CASES);
/// Descriptor of [`landau_ppf`].
pub static LANDAU_PPF: Operation<3> = Operation::new("landau_ppf", AT_P)
    .quantile()
    .with_constraint("p outside [0, 1]", probability_or_infinite)
    .with_cases(PPF_CASES);
/// Descriptor of [`landau_isf`].
pub static LANDAU_ISF: Operation<3> = Operation::new("landau_isf", AT_Q)
    .quantile()
    .with_constraint("q outside [0, 1]", probability_or_infinite)
    .with_cases(ISF_CASES);

/// Probability density at `x`.
pub fn landau_pdf(x: Real, loc: Real, scale: Real) -> Real {
    LANDAU_PDF.evaluate([x, loc, scale], |&[x, loc, scale]| Landau::new(loc, scale)?.pdf(x))
}

/// `P(X <= x)`.
pub fn landau_cdf(x: Real, loc: Real, scale: Real) -> Real {
    LANDAU_CDF.evaluate([x, loc, scale], |&[x, loc, scale]| Landau::new(loc, scale)?.cdf(x))
}

/// `P(X > x)`.
pub fn landau_sf(x: Real, loc: Real, scale: Real) -> Real {
    LANDAU_SF.evaluate([x, loc, scale], |&[x, loc, scale]| Landau::new(loc, scale)?.sf(x))
}

/// Quantile of `p`.
pub fn landau_ppf(p: Real, loc: Real, scale: Real) -> Real {
    LANDAU_PPF.evaluate([p, loc, scale], |&[p, loc, scale]| Landau::new(loc, scale)?.ppf(p))
}

/// Inverse survival of `q`.
pub fn landau_isf(q: Real, loc: Real, scale: Real) -> Real {
    LANDAU_ISF.evaluate([q, loc, scale], |&[q, loc, scale]| Landau::new(loc, scale)?.isf(q))
}
