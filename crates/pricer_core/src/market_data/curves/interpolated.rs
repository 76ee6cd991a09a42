//! Interpolated yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::{Interpolator, LinearInterpolator};
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates; `D(t) = exp(-r(t) t)`.
    Linear,

    /// Linear interpolation on `ln D(t)`, i.e. piecewise constant forwards.
    LogLinear,
}

/// Yield curve through a set of `(tenor, zero rate)` pillars.
///
/// Pillars must be strictly increasing and non-negative; a pillar at `t = 0`
/// is allowed and pins the short rate. With extrapolation enabled the first
/// and last zero rates are held flat outside the pillar range, otherwise such
/// queries fail with `MarketDataError::OutOfBounds`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let curve = InterpolatedCurve::new(
///     &[0.0_f64, 0.5, 1.0, 2.0],
///     &[0.02, 0.025, 0.03, 0.035],
///     CurveInterpolation::Linear,
///     true,
/// ).unwrap();
///
/// assert!((curve.zero_rate(0.75).unwrap() - 0.0275).abs() < 1e-12);
/// assert!((curve.zero_rate(10.0).unwrap() - 0.035).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    rates: LinearInterpolator<T>,
    log_discount: LinearInterpolator<T>,
    method: CurveInterpolation,
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Build a curve from pillar tenors (years) and zero rates.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - Fewer than two pillars, or
    ///   `rates` of a different length
    /// * `MarketDataError::InvalidMaturity` - Negative or non-increasing tenor
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }
        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }

        for (i, &t) in tenors.iter().enumerate() {
            if t < T::zero() || (i > 0 && t <= tenors[i - 1]) {
                return Err(MarketDataError::InvalidMaturity {
                    t: t.to_f64().unwrap_or(0.0),
                });
            }
        }

        let log_dfs: Vec<T> = tenors
            .iter()
            .zip(rates)
            .map(|(&t, &r)| -r * t)
            .collect();

        Ok(Self {
            rates: LinearInterpolator::new(tenors, rates)?,
            log_discount: LinearInterpolator::new(tenors, &log_dfs)?,
            method,
            allow_extrapolation,
        })
    }

    /// First and last pillar.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        self.rates.domain()
    }

    /// Pillar tenors.
    #[inline]
    pub fn tenors(&self) -> &[T] {
        self.rates.xs()
    }

    /// Pillar zero rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        self.rates.ys()
    }

    /// Interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Whether flat extrapolation is enabled.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn check_domain(&self, t: T) -> Result<(), MarketDataError> {
        if self.allow_extrapolation || self.rates.contains(t) {
            return Ok(());
        }
        let (min, max) = self.domain();
        Err(MarketDataError::OutOfBounds {
            x: t.to_f64().unwrap_or(0.0),
            min: min.to_f64().unwrap_or(0.0),
            max: max.to_f64().unwrap_or(0.0),
        })
    }

    // Zero rate with flat extrapolation; callers check the domain first.
    fn rate_at(&self, t: T) -> T {
        match self.method {
            CurveInterpolation::Linear => self.rates.interpolate_flat(t),
            CurveInterpolation::LogLinear => {
                let (min, max) = self.domain();
                if t <= min || t >= max {
                    self.rates.interpolate_flat(t)
                } else {
                    -self.log_discount.interpolate_flat(t) / t
                }
            }
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        self.check_domain(t)?;

        match self.method {
            CurveInterpolation::Linear => Ok((-self.rate_at(t) * t).exp()),
            CurveInterpolation::LogLinear => {
                let (min, max) = self.domain();
                if t < min || t > max {
                    Ok((-self.rates.interpolate_flat(t) * t).exp())
                } else {
                    Ok(self.log_discount.interpolate_flat(t).exp())
                }
            }
        }
    }

    /// Interpolated zero rate. At `t = 0` this is the short end of the curve.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        self.check_domain(t)?;
        Ok(self.rate_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(method: CurveInterpolation, extrapolate: bool) -> InterpolatedCurve<f64> {
        InterpolatedCurve::new(&[0.5, 1.0, 2.0], &[0.02, 0.04, 0.04], method, extrapolate).unwrap()
    }

    #[test]
    fn test_rejects_bad_pillars() {
        assert_eq!(
            InterpolatedCurve::new(&[1.0_f64], &[0.02], CurveInterpolation::Linear, false)
                .unwrap_err(),
            MarketDataError::InsufficientData { got: 1, need: 2 }
        );
        assert!(matches!(
            InterpolatedCurve::new(&[-0.5_f64, 1.0], &[0.02, 0.03], CurveInterpolation::Linear, false),
            Err(MarketDataError::InvalidMaturity { .. })
        ));
        assert!(matches!(
            InterpolatedCurve::new(&[1.0_f64, 0.5, 2.0], &[0.02, 0.03, 0.04], CurveInterpolation::Linear, false),
            Err(MarketDataError::InvalidMaturity { t }) if t == 0.5
        ));
        assert!(InterpolatedCurve::new(&[0.5_f64, 1.0], &[0.02], CurveInterpolation::Linear, false).is_err());
    }

    #[test]
    fn test_zero_pillar_allowed() {
        let curve = InterpolatedCurve::new(
            &[0.0_f64, 1.0],
            &[0.01, 0.03],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap();

        assert_eq!(curve.domain(), (0.0, 1.0));
        assert_eq!(curve.zero_rate(0.0).unwrap(), 0.01);
        assert_relative_eq!(curve.zero_rate(0.5).unwrap(), 0.02, epsilon = 1e-15);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_linear_interpolation() {
        let curve = sample(CurveInterpolation::Linear, false);

        assert_relative_eq!(curve.zero_rate(0.5).unwrap(), 0.02);
        assert_relative_eq!(curve.zero_rate(0.75).unwrap(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(
            curve.discount_factor(0.75).unwrap(),
            (-0.03_f64 * 0.75).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_out_of_bounds_without_extrapolation() {
        let curve = sample(CurveInterpolation::Linear, false);

        match curve.discount_factor(0.25).unwrap_err() {
            MarketDataError::OutOfBounds { x, min, max } => {
                assert_eq!((x, min, max), (0.25, 0.5, 2.0));
            }
            other => panic!("Expected OutOfBounds error, got {:?}", other),
        }
        assert!(curve.zero_rate(3.0).is_err());
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample(CurveInterpolation::Linear, true);

        assert_relative_eq!(curve.zero_rate(0.1).unwrap(), 0.02);
        assert_relative_eq!(curve.zero_rate(30.0).unwrap(), 0.04);
        assert_relative_eq!(curve.discount_factor(30.0).unwrap(), (-0.04_f64 * 30.0).exp());
    }

    #[test]
    fn test_log_linear_constant_forward() {
        let curve = sample(CurveInterpolation::LogLinear, false);

        // ln D is linear between 0.5 and 1.0, so the forward there is constant
        let f1 = curve.forward_rate(0.55, 0.65).unwrap();
        let f2 = curve.forward_rate(0.8, 0.95).unwrap();
        assert_relative_eq!(f1, f2, epsilon = 1e-12);

        // Between pillars: -ln D(1)/1 = 0.04 and -ln D(0.5) = 0.01, so forward = 0.06
        assert_relative_eq!(f1, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_log_linear_matches_pillars() {
        let curve = sample(CurveInterpolation::LogLinear, true);

        assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.04, epsilon = 1e-15);
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            (-0.08_f64).exp(),
            epsilon = 1e-15
        );
        assert_relative_eq!(curve.zero_rate(5.0).unwrap(), 0.04);
    }

    #[test]
    fn test_accessors() {
        let curve = sample(CurveInterpolation::Linear, true);
        assert_eq!(curve.tenors(), &[0.5, 1.0, 2.0]);
        assert_eq!(curve.rates(), &[0.02, 0.04, 0.04]);
        assert_eq!(curve.method(), CurveInterpolation::Linear);
        assert!(curve.allow_extrapolation());
    }
}
