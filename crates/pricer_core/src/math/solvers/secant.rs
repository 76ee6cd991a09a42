//! Secant root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Offset of the second starting point used by [`SecantSolver::find_root_from`].
const DEFAULT_SECOND_POINT_OFFSET: f64 = 0.1;

/// Secant method root finder.
///
/// Replaces the derivative in Newton's update with the slope of the chord
/// through the two most recent iterates:
///
/// ```text
/// x_{n+1} = x_n - f(x_n) (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))
/// ```
///
/// Converges superlinearly (order ≈ 1.618) without requiring a derivative.
/// Uses the same acceptance test as [`NewtonRaphsonSolver`](super::NewtonRaphsonSolver).
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{SecantSolver, SolverConfig};
///
/// let solver = SecantSolver::new(SolverConfig::default());
///
/// let root = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Find a root of `f` starting from the two points `x0` and `x1`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::DerivativeNearZero)` - The chord is flat
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    pub fn find_root<F>(&self, f: F, x0: T, x1: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut prev = x0;
        let mut f_prev = f(prev);
        let mut x = x1;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if !f_val.is_finite() || !f_prev.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "function is not finite near x = {}",
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }

            if self.config.is_converged(f_val, x - prev) {
                return Ok(x);
            }

            let slope_denominator = f_val - f_prev;
            if slope_denominator == T::zero() {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            let next = x - f_val * (x - prev) / slope_denominator;

            tracing::trace!(
                iteration,
                x = next.to_f64().unwrap_or(f64::NAN),
                residual = f_val.to_f64().unwrap_or(f64::NAN),
                "secant step"
            );

            if !next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "secant iteration produced non-finite value".to_string(),
                ));
            }

            prev = x;
            f_prev = f_val;
            x = next;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Find a root of `f` from a single initial guess.
    ///
    /// The second starting point is `x0 + 0.1`.
    pub fn find_root_from<F>(&self, f: F, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let offset = T::from(DEFAULT_SECOND_POINT_OFFSET).unwrap();
        self.find_root(f, x0, x0 + offset)
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = SecantSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_find_root_from_single_guess() {
        let solver = SecantSolver::new(SolverConfig::default());

        // x - cos(x) = 0 has its root near 0.739
        let f = |x: f64| x - x.cos();
        let root = solver.find_root_from(f, 0.5).unwrap();
        assert!(f(root).abs() < 1e-10);
        assert!((root - 0.739_085_133_215_160_6).abs() < 1e-9);
    }

    #[test]
    fn test_find_exp_root() {
        let solver = SecantSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
        assert!((root - 2.0_f64.ln()).abs() < 1e-10);
    }

    #[test]
    fn test_flat_chord() {
        let solver = SecantSolver::new(SolverConfig::default());

        // Constant non-zero function: chord slope is always zero
        let result = solver.find_root(|_x: f64| 1.0, 0.0, 1.0);
        assert!(matches!(
            result.unwrap_err(),
            SolverError::DerivativeNearZero { .. }
        ));
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = SecantSolver::new(SolverConfig::new(1e-100, 1e-100, 4));

        let result = solver.find_root(|x: f64| x * x - 2.0, 1.0, 2.0);
        match result.unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => assert_eq!(iterations, 4),
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_accessor() {
        let solver: SecantSolver<f64> = SecantSolver::with_defaults();
        assert_eq!(solver.config().max_iterations, 100);
    }
}
