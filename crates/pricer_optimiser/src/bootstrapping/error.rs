//! Error types for zero-curve bootstrapping.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::{InterpolationError, PricingError};
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

/// Bootstrapping error.
///
/// # Variants
///
/// - `InsufficientData`: No bonds to strip
/// - `MixedFrequency`: Bonds with different coupon frequencies
/// - `DuplicateMaturity`: Two bonds maturing at the same pillar
/// - `ConvergenceFailure`: Root finder failed to reprice a bond
/// - `InvalidInput`: Bad overnight rate or similar
/// - `Instrument`: Error from a bond calculation
/// - `MarketData`: Error building the output curve
/// - `Interpolation`: Error interpolating known pillars
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::BootstrapError;
///
/// let err = BootstrapError::duplicate_maturity(2.0);
/// assert!(err.is_duplicate_maturity());
/// assert!(format!("{}", err).contains("2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// Fewer bonds than the bootstrap needs.
    #[error("Insufficient data: required {required} bonds, got {provided}")]
    InsufficientData {
        /// Minimum number of bonds
        required: usize,
        /// Number of bonds supplied
        provided: usize,
    },

    /// Coupon frequencies differ across the bond set.
    #[error("Mixed coupon frequency: expected {expected} per year, got {found}")]
    MixedFrequency {
        /// Frequency of the first bond
        expected: u32,
        /// Offending frequency
        found: u32,
    },

    /// Two bonds share a maturity.
    #[error("Duplicate maturity: {maturity}")]
    DuplicateMaturity {
        /// The repeated maturity
        maturity: f64,
    },

    /// The zero rate at a bond maturity could not be solved.
    #[error("Failed to converge at maturity {maturity}: residual {residual} ({reason})")]
    ConvergenceFailure {
        /// Maturity of the bond that failed
        maturity: f64,
        /// Pricing residual at the initial guess
        residual: f64,
        /// Solver message
        reason: String,
    },

    /// Invalid input data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Bond calculation error.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Curve construction error.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Interpolation of known pillars failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl BootstrapError {
    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, provided: usize) -> Self {
        Self::InsufficientData { required, provided }
    }

    /// Create a duplicate maturity error.
    pub fn duplicate_maturity(maturity: f64) -> Self {
        Self::DuplicateMaturity { maturity }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this is a convergence failure.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }

    /// Check if this is a duplicate maturity error.
    pub fn is_duplicate_maturity(&self) -> bool {
        matches!(self, Self::DuplicateMaturity { .. })
    }

    /// Check if this is an insufficient data error.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

impl From<BootstrapError> for PricingError {
    fn from(err: BootstrapError) -> Self {
        match err {
            BootstrapError::Instrument(e) => e.into(),
            BootstrapError::MarketData(e) => e.into(),
            BootstrapError::ConvergenceFailure { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
