//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Term structure of continuously compounded interest rates.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
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
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
///
/// // 100 paid in two years
/// let pv = curve.present_value(100.0, 2.0).unwrap();
/// assert!((pv - 100.0 * (-0.1_f64).exp()).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Discount factor `D(t) = exp(-r(t) t)` for maturity `t >= 0`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Continuously compounded zero rate `r(t) = -ln D(t) / t`.
    ///
    /// The default implementation requires `t > 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Forward rate `f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` unless `t2 > t1`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(-(df2 / df1).ln() / dt)
    }

    /// Present value of `amount` paid at time `t`.
    fn present_value(&self, amount: T, t: T) -> Result<T, MarketDataError> {
        Ok(amount * self.discount_factor(t)?)
    }
}
