//! # pricer_core: Numerical Foundation for the Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Root finders: Newton-Raphson, secant, bisection and the hybrid
//!   [`math::solvers::RootFinder`] with bisection fallback (`math::solvers`)
//! - Simpson's rule quadrature (`math::quadrature`)
//! - Linear interpolation (`math::interpolators`)
//! - Yield curves: `FlatCurve`, `InterpolatedCurve` (`market_data`)
//! - Error types: `PricingError`, `SolverError`, `IntegrationError`,
//!   `InterpolationError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other pricer_* crates:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - tracing: Solver diagnostics (no subscriber is installed here)
//! - serde: Serialisation of configuration types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::quadrature::simpson;
//! use pricer_core::math::solvers::{RootFinder, SolverConfig};
//!
//! // Root of x³ - 2x - 5 with a bisection safety net on [2, 3]
//! let finder = RootFinder::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - 2.0 * x - 5.0;
//! let f_prime = |x: f64| 3.0 * x * x - 2.0;
//! let root = finder
//!     .find_root_with_derivative(f, f_prime, 2.0, Some((2.0, 3.0)))
//!     .unwrap();
//! assert!(f(root).abs() < 1e-10);
//!
//! // ∫₀² x³ dx = 4
//! let area = simpson(|x: f64| x * x * x, 0.0, 2.0, 2).unwrap();
//! assert!((area - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `SolverConfig`,
//!   `SimpsonIntegrator`, curves and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
