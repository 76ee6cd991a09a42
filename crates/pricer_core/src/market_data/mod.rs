//! Market data structures.
//!
//! All curves are generic over `T: Float` and work in continuously
//! compounded rates with time measured in years.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and implementations (FlatCurve, InterpolatedCurve)
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod curves;
pub mod error;

pub use curves::{CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
