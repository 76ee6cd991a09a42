//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` from a single starting
/// point. Every analytic inversion in the workspace (implied volatility,
/// bond yield, bootstrapped zero rate) runs through this solver first.
///
/// An iterate is accepted once `|f(x)| < tolerance` and the step that
/// produced it is no longer than `step_tolerance`; an exact zero is accepted
/// immediately. There is no safeguard against overshooting, so callers that
/// need one wrap this in [`super::RootFinder`].
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Continuously compounded rate that discounts 100 to 95 over two years
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
/// let f = |r: f64| 100.0 * (-2.0 * r).exp() - 95.0;
/// let f_prime = |r: f64| -200.0 * (-2.0 * r).exp();
///
/// let rate = solver.find_root(f, f_prime, 0.0).unwrap();
/// assert!((rate - (100.0_f64 / 95.0).ln() / 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Solver with the given stopping rules.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Solver with [`SolverConfig::default`].
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Root of `f` from `x0`, using the analytic derivative `f_prime`.
    ///
    /// # Errors
    ///
    /// - `MaxIterationsExceeded` when the budget runs out
    /// - `DerivativeNearZero` when `|f'(x)| < 1e-30` or is not finite
    /// - `NumericalInstability` when `f(x)` or the next iterate is not finite
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let mut step = T::infinity();
        let flat = T::from(1e-30).unwrap();

        for iteration in 0..self.config.max_iterations {
            let fx = f(x);
            if !fx.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "objective is not finite at x = {}",
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if self.config.is_converged(fx, step) {
                return Ok(x);
            }

            let slope = f_prime(x);
            if !slope.is_finite() || slope.abs() < flat {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            step = -fx / slope;
            x = x + step;
            tracing::trace!(
                iteration,
                x = x.to_f64().unwrap_or(f64::NAN),
                residual = fx.to_f64().unwrap_or(f64::NAN),
                "newton step"
            );

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "newton step left the real line".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Stopping rules.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
