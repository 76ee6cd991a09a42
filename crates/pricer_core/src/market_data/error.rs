//! Market data error types.

use crate::types::{InterpolationError, PricingError};
use thiserror::Error;

/// Yield curve construction and lookup errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Negative maturity, or a non-increasing pillar.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Query outside the pillar range with extrapolation disabled.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// First pillar
        min: f64,
        /// Last pillar
        max: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Not enough pillars, or tenors and rates of different length.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
