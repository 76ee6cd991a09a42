//! Bootstrapped zero curve.
//!
//! This module provides `BootstrappedZeroCurve`, the zero-rate pillars
//! stripped from a bond set together with the pricing residual of each bond.

use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve, YieldCurve};
use pricer_core::market_data::MarketDataError;

/// Zero curve stripped from coupon bonds.
///
/// Pillars start at `t = 0` with the overnight rate and include every coupon
/// date of every bond. Rates are continuously compounded and interpolated
/// linearly between pillars, held flat beyond the last one.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::YieldCurve;
/// use pricer_optimiser::bootstrapping::BootstrappedZeroCurve;
///
/// let curve = BootstrappedZeroCurve::new(
///     vec![0.0, 0.5, 1.0],
///     vec![0.015, 0.016, 0.017],
///     vec![0.0],
/// )
/// .unwrap();
///
/// assert!((curve.zero_rate(0.75).unwrap() - 0.0165).abs() < 1e-15);
/// assert_eq!(curve.zero_rate(4.0).unwrap(), 0.017);
/// ```
#[derive(Debug, Clone)]
pub struct BootstrappedZeroCurve {
    curve: InterpolatedCurve<f64>,
    residuals: Vec<f64>,
}

impl BootstrappedZeroCurve {
    /// Build the curve from pillars and rates.
    ///
    /// `residuals` holds the repricing error of each bond in maturity
    /// order.
    ///
    /// # Errors
    ///
    /// `MarketDataError` if there are fewer than two pillars, or the pillars
    /// are negative or not strictly increasing.
    pub fn new(
        pillars: Vec<f64>,
        rates: Vec<f64>,
        residuals: Vec<f64>,
    ) -> Result<Self, MarketDataError> {
        let curve = InterpolatedCurve::new(&pillars, &rates, CurveInterpolation::Linear, true)?;
        Ok(Self { curve, residuals })
    }

    /// Pillar times in years, starting at 0.
    pub fn pillars(&self) -> &[f64] {
        self.curve.tenors()
    }

    /// Zero rate at each pillar.
    pub fn rates(&self) -> &[f64] {
        self.curve.rates()
    }

    /// Curve price minus quoted price for each bond, in maturity order.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Largest absolute repricing error.
    pub fn max_residual(&self) -> f64 {
        self.residuals.iter().fold(0.0, |acc, r| acc.max(r.abs()))
    }

    /// Underlying interpolated curve.
    pub fn curve(&self) -> &InterpolatedCurve<f64> {
        &self.curve
    }

    /// Pillars paired with their rates.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.pillars().iter().copied().zip(self.rates().iter().copied())
    }
}

impl YieldCurve<f64> for BootstrappedZeroCurve {
    fn discount_factor(&self, t: f64) -> Result<f64, MarketDataError> {
        self.curve.discount_factor(t)
    }

    fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        self.curve.zero_rate(t)
    }
}
