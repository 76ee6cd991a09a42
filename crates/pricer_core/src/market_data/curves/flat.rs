//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Yield curve with one continuously compounded rate for every maturity.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Flat curve at `rate`. Negative rates are allowed.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// The constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

fn check_maturity<T: Float>(t: T) -> Result<T, MarketDataError> {
    if t < T::zero() {
        Err(MarketDataError::InvalidMaturity {
            t: t.to_f64().unwrap_or(0.0),
        })
    } else {
        Ok(t)
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        let t = check_maturity(t)?;
        Ok((-self.rate * t).exp())
    }

    /// The flat rate, including at `t = 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        check_maturity(t).map(|_| self.rate)
    }

    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 > t1 {
            Ok(self.rate)
        } else {
            Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            })
        }
    }
}
