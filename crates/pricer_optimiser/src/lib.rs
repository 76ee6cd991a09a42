//! # pricer_optimiser
//!
//! Curve construction for the pricing stack.
//!
//! This crate sits above Models (L2), solving the inverse problem of
//! recovering a zero curve from quoted bond prices.
//!
//! ## Architecture Position
//!
//! Layer 2.5. Depends on `pricer_core` (L1) for the root finder and curve
//! traits, and on `pricer_models` (L2) for bond cash flows and inversion
//! settings.
//!
//! ## Modules
//!
//! - `bootstrapping`: Zero-rate stripping from coupon bonds
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::market_data::curves::YieldCurve;
//! use pricer_models::instruments::Bond;
//! use pricer_optimiser::prelude::*;
//!
//! let bonds = vec![
//!     Bond::from_price(1.0, 3.0, 2, 100.0, 101.25).unwrap(),
//!     Bond::from_price(2.0, 4.0, 2, 100.0, 103.0).unwrap(),
//! ];
//! let curve = ZeroCurveBootstrapper::default().bootstrap(&bonds, 0.015).unwrap();
//! let df = curve.discount_factor(1.5).unwrap();
//! assert!(df < 1.0);
//! ```

#![deny(missing_docs)]

pub mod bootstrapping;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bootstrapping::*;
}
