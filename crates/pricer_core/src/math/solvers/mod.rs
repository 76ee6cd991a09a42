//! Root-finding solvers for numerical computation.
//!
//! This module provides the root-finding kernel used to invert closed-form
//! pricing functions: implied volatility, yield to maturity and bootstrapped
//! zero rates.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives
//! - [`SecantSolver`]: Derivative-free, superlinear convergence
//! - [`BisectionSolver`]: Bracketing method, slow but guaranteed
//! - [`RootFinder`]: Newton or secant with a bisection fallback
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Residual tolerance (default: 1e-10)
//! - `step_tolerance`: Step tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let config = SolverConfig::default();
//! let solver = NewtonRaphsonSolver::new(config);
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let root = solver.find_root(f, f_prime, 1.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod bisection;
mod config;
mod hybrid;
mod newton_raphson;
mod secant;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use hybrid::RootFinder;
pub use newton_raphson::NewtonRaphsonSolver;
pub use secant::SecantSolver;
