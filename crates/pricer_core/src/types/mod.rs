//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing, interpolation, solver and
//!   quadrature operations
//!
//! # Re-exports
//!
//! [`PricingError`], [`InterpolationError`], [`SolverError`] and
//! [`IntegrationError`] are re-exported at this module level.

pub mod error;

pub use error::{IntegrationError, InterpolationError, PricingError, SolverError};
