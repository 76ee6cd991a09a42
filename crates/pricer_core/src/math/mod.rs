//! Numerical methods.
//!
//! - [`solvers`]: Newton-Raphson, secant and bisection root finders, plus the
//!   hybrid [`solvers::RootFinder`] used by every inversion in the workspace
//! - [`quadrature`]: Simpson's rule
//! - [`interpolators`]: Piecewise linear interpolation

pub mod interpolators;
pub mod quadrature;
pub mod solvers;
