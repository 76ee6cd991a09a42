//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Implied volatility by Newton-Raphson with bisection fallback
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Pricing and Greeks work for `f64` and `f32`
//! - **Numerical Stability**: Double-precision normal CDF so prices invert
//!   to the solver tolerance

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_volatility;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use implied_volatility::{implied_volatility, price_bounds};
