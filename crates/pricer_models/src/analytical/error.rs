//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`, `InvalidStrike`, `InvalidExpiry`, `InvalidVolatility`:
///   Non-positive model inputs
/// - `PriceOutOfBounds`: Quoted price violates no-arbitrage bounds
/// - `ImpliedVolatilityNotFound`: Inversion failed inside valid bounds
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Option price outside the range any volatility can produce.
    #[error("Option price {price} outside no-arbitrage bounds [{lower}, {upper})")]
    PriceOutOfBounds {
        /// The quoted price
        price: f64,
        /// Lower bound (discounted intrinsic value)
        lower: f64,
        /// Upper bound (discounted spot for calls, discounted strike for puts)
        upper: f64,
    },

    /// Solver could not find a volatility reproducing the price.
    #[error("Implied volatility not found for price {price}: {reason}")]
    ImpliedVolatilityNotFound {
        /// The quoted price
        price: f64,
        /// Underlying solver failure
        reason: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::ImpliedVolatilityNotFound { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
