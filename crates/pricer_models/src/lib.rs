//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form pricing for options and bonds, and the inversions that turn
//! quoted prices back into volatilities and yields.
//!
//! This crate provides:
//! - Black-Scholes prices and Greeks with a continuous dividend yield
//!   ([`analytical`])
//! - Implied volatility with Newton-Raphson and bisection fallback
//! - European options, coupon bonds and cash-flow streams ([`instruments`])
//! - Discrete discounting, rate conversion and amortisation ([`time_value`])
//! - Inversion settings loadable from TOML ([`config`])
//!
//! ## Design Principles
//!
//! - **Data-holding instruments**: Measures are computed on demand, so a
//!   setter never leaves a stale premium or yield behind
//! - **Errors, not silence**: A failed inversion returns an error and logs a
//!   `tracing` warning
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation of instruments and settings, and TOML
//!   loading of [`config::InversionSettings`]
//!
//! ## Example
//!
//! ```rust
//! use pricer_models::instruments::{Bond, OptionType, VanillaOption};
//!
//! let call = VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let greeks = call.greeks();
//! assert!(greeks.delta > 0.5 && greeks.theta < 0.0);
//!
//! let bond = Bond::new(10.0, 5.0, 2, 0.045).unwrap();
//! assert!(bond.duration() < 10.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod config;
pub mod instruments;
pub mod time_value;
