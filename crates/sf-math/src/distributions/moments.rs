//! Central moments from raw moments `E[X^r]`.

use sf_core::Real;

/// `E[X²] - E[X]²`.
pub fn variance(m1: Real, m2: Real) -> Real {
    m2 - m1 * m1
}

/// `E[(X - μ)³] / σ³`.
pub fn skewness(m1: Real, m2: Real, m3: Real) -> Real {
    let var = variance(m1, m2);
    let mu3 = m3 - 3.0 * m1 * m2 + 2.0 * m1 * m1 * m1;
    mu3 / (var * var.sqrt())
}

/// `E[(X - μ)⁴] / σ⁴ - 3`.
pub fn kurtosis_excess(m1: Real, m2: Real, m3: Real, m4: Real) -> Real {
    let var = variance(m1, m2);
    let m1_2 = m1 * m1;
    let mu4 = m4 - 4.0 * m1 * m3 + 6.0 * m1_2 * m2 - 3.0 * m1_2 * m1_2;
    mu4 / (var * var) - 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_distribution() {
        // E[X^r] = r! for Exp(1): variance 1, skewness 2, excess kurtosis 6.
        assert!((variance(1.0, 2.0) - 1.0).abs() < 1e-15);
        assert!((skewness(1.0, 2.0, 6.0) - 2.0).abs() < 1e-14);
        assert!((kurtosis_excess(1.0, 2.0, 6.0, 24.0) - 6.0).abs() < 1e-13);
    }
}
