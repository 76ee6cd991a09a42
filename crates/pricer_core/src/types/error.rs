//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Umbrella error for pricing and inversion operations
//! - `InterpolationError`: Errors from interpolation operations
//! - `SolverError`: Errors from root-finding solvers
//! - `IntegrationError`: Errors from numerical quadrature

use thiserror::Error;

/// Umbrella error for the workspace.
///
/// Option, bond, curve and solver errors all convert into this type, so a
/// caller mixing them can propagate one error with `?`.
///
/// # Variants
/// - `InvalidInput`: Bad market data, contract terms or settings
/// - `NumericalInstability`: An inversion or solver did not converge
/// - `ModelFailure`: Model assumptions violated
/// - `UnsupportedInstrument`: Measure not defined for the instrument
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Solver or inversion failure
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Measure not defined for this instrument
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative (or secant slope) too small to divide by
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: An iterate became non-finite
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton or secant steps).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}

/// Numerical integration errors.
///
/// # Examples
/// ```
/// use pricer_core::types::IntegrationError;
///
/// let err = IntegrationError::InvalidPartitions { partitions: 3 };
/// assert!(format!("{}", err).contains("3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrationError {
    /// Simpson's rule needs a positive, even number of sub-intervals.
    #[error("Invalid partition count {partitions}: must be even and at least 2")]
    InvalidPartitions {
        /// The rejected partition count
        partitions: usize,
    },

    /// Integration bounds are not finite.
    #[error("Invalid integration interval [{a}, {b}]")]
    InvalidInterval {
        /// Lower bound
        a: f64,
        /// Upper bound
        b: f64,
    },

    /// Successive refinements never agreed within tolerance.
    #[error("Integral did not settle after {refinements} refinements (last estimate {estimate})")]
    MaxRefinementsExceeded {
        /// Number of partition doublings performed
        refinements: usize,
        /// Last estimate of the integral
        estimate: f64,
    },
}

impl From<IntegrationError> for PricingError {
    fn from(err: IntegrationError) -> Self {
        match err {
            IntegrationError::InvalidPartitions { .. } | IntegrationError::InvalidInterval { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            IntegrationError::MaxRefinementsExceeded { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
