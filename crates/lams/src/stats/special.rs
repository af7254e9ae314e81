//! Special functions used by the distributions.
//!
//! Combinatorial terms are computed in the log domain so that large counts
//! do not overflow before they are combined.

use std::f64::consts::PI;

/// Below this, `ln(n!)` is summed exactly; above it, Lanczos is used.
const EXACT_FACTORIAL_LIMIT: u64 = 256;

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// `ln Γ(x)` for `x >= 0.5` (Lanczos approximation, g = 7).
pub fn ln_gamma(x: f64) -> f64 {
    debug_assert!(x >= 0.5);
    let x = x - 1.0;
    let series = LANCZOS_COEFFICIENTS[1..]
        .iter()
        .enumerate()
        .fold(LANCZOS_COEFFICIENTS[0], |acc, (i, &c)| {
            acc + c / (x + (i + 1) as f64)
        });
    let t = x + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
}

/// `ln(n!)`.
pub fn ln_factorial(n: u64) -> f64 {
    if n < EXACT_FACTORIAL_LIMIT {
        (2..=n).map(|i| (i as f64).ln()).sum()
    } else {
        ln_gamma(n as f64 + 1.0)
    }
}

/// `ln C(n, k)`, or negative infinity when `k > n`.
///
/// ```
/// use lams::stats::special::ln_binomial_coefficient;
///
/// assert!((ln_binomial_coefficient(10, 5).exp() - 252.0).abs() < 1e-9);
/// assert_eq!(ln_binomial_coefficient(3, 4), f64::NEG_INFINITY);
/// ```
pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// Error function, accurate to about 1.2e-7 everywhere.
///
/// Uses the Chebyshev fit of the complementary error function from
/// Numerical Recipes (`erfcc`).
pub fn erf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let erfc = t * poly.exp();
    if x >= 0.0 { 1.0 - erfc } else { erfc - 1.0 }
}
