//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction, setters and price inversion.

use crate::analytical::AnalyticalError;
use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot`, `InvalidStrike`, `InvalidExpiry`, `InvalidVolatility`:
///   Non-positive option inputs
/// - `InvalidMaturity`, `InvalidFrequency`, `InvalidFace`: Bad bond terms
/// - `NotZeroCoupon`: Money-market yield requested for a coupon bond
/// - `LengthMismatch`: Cash-flow vectors of different length
/// - `YieldNotFound`, `RateNotFound`: Price inversion failed
/// - `Analytical`: Error from the Black-Scholes layer
/// - `MarketData`: Error from a discount curve
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid bond maturity (non-positive).
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid coupon frequency (zero payments per year).
    #[error("Invalid coupon frequency: m = {frequency}")]
    InvalidFrequency {
        /// The invalid frequency
        frequency: u32,
    },

    /// Invalid face value (non-positive).
    #[error("Invalid face value: F = {face}")]
    InvalidFace {
        /// The invalid face value
        face: f64,
    },

    /// Measure only defined for zero-coupon bonds.
    #[error("Bond pays a {coupon_rate}% coupon; measure requires a zero-coupon bond")]
    NotZeroCoupon {
        /// The bond's coupon rate in percent
        coupon_rate: f64,
    },

    /// Parallel vectors of different length.
    #[error("Length mismatch: expected {expected} values, got {got}")]
    LengthMismatch {
        /// Length of the amounts vector
        expected: usize,
        /// Length of the offending vector
        got: usize,
    },

    /// Yield to maturity could not be implied from a price.
    #[error("No yield reproduces bond price {price}: {reason}")]
    YieldNotFound {
        /// The target bond price
        price: f64,
        /// Underlying solver failure
        reason: String,
    },

    /// Flat discount rate could not be found for a cash-flow stream.
    #[error("No flat rate reproduces present value {target}: {reason}")]
    RateNotFound {
        /// The target present value
        target: f64,
        /// Underlying solver failure
        reason: String,
    },

    /// Black-Scholes error (for example a failed volatility inversion).
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Discount curve error while pricing off a curve.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::Analytical(inner) => inner.into(),
            InstrumentError::MarketData(inner) => inner.into(),
            InstrumentError::YieldNotFound { .. } | InstrumentError::RateNotFound { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            InstrumentError::NotZeroCoupon { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
