//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float`. The CDF is accurate to double precision,
//! so Black-Scholes prices invert cleanly when solving for implied volatility.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Beyond this |x| the tail mass is below the smallest subnormal.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational and continued-fraction branches (10/√2).
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + T::from(c).unwrap())
}

/// Lower tail mass Φ(-|x|).
///
/// Hart's double-precision rational approximation, with a continued
/// fraction for the far tail.
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > T::from(TAIL_CUTOFF).unwrap() {
        return T::zero();
    }

    let half = T::from(0.5).unwrap();
    let gaussian = (-half * abs_x * abs_x).exp();

    if abs_x < T::from(RATIONAL_LIMIT).unwrap() {
        return gaussian * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x);
    }

    let mut fraction = abs_x + T::from(0.65).unwrap();
    for k in [4.0, 3.0, 2.0, 1.0] {
        fraction = abs_x + T::from(k).unwrap() / fraction;
    }
    gaussian / fraction / T::from(SQRT_2PI).unwrap()
}

/// Standard normal cumulative distribution function Φ(x) = P(X <= x).
///
/// # Accuracy
///
/// Absolute error below 1e-15 for all finite `x`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96_f64) - 0.975_002_104_851_780).abs() < 1e-12);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// ```text
/// φ(x) = exp(-x² / 2) / sqrt(2π)
/// ```
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_542_9, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158_655_253_931_457_07, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.977_249_868_051_820_8, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022_750_131_948_179_195, epsilon = 1e-14);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.998_650_101_968_369_9, epsilon = 1e-14);
    }

    #[test]
    fn test_norm_cdf_far_tail() {
        // Continued-fraction branch; Φ(-8) ≈ 6.22e-16
        let tail = norm_cdf(-8.0_f64);
        assert_relative_eq!(tail, 6.220_960_574_271_785e-16, max_relative = 1e-7);

        assert_eq!(norm_cdf(-40.0_f64), 0.0);
        assert_eq!(norm_cdf(40.0_f64), 1.0);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.25, 0.5, 1.0, 2.0, 3.0, 5.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0_f64, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic_and_bounded() {
        let values: Vec<f64> = (-80..=80).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let (a, b) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
            assert!(b > a, "CDF not increasing at x = {}", pair[0]);
            assert!((0.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_norm_pdf_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.053_990_966_513_188_06, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-3.0_f64), norm_pdf(3.0_f64));
    }

    #[test]
    fn test_cdf_derivative_is_pdf() {
        let h = 1e-5;
        for x in [-2.0, -0.3, 0.0, 1.0, 2.5] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_f32_compatibility() {
        assert!((norm_cdf(1.0_f32) - 0.841_344_7).abs() < 1e-6);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-6);
    }
}
