//! Zero-curve bootstrapping from coupon bonds.
//!
//! ## Architecture
//!
//! The bootstrapping module provides:
//! - `ZeroCurveBootstrapper`: Sequential stripping engine
//! - `BootstrappedZeroCurve`: Result curve implementing `YieldCurve<f64>`
//! - `BootstrapError`: Failures while stripping
//!
//! Each maturity is solved with the shared Newton-Raphson root finder from
//! `pricer_core`, falling back to bisection on the configured rate bracket.

mod curve;
mod engine;
mod error;

pub use curve::BootstrappedZeroCurve;
pub use engine::ZeroCurveBootstrapper;
pub use error::BootstrapError;
