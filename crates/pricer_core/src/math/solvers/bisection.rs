//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Repeatedly halves a bracket `[a, b]` on which `f` changes sign. Linear
/// convergence, but guaranteed for any continuous function with a valid
/// bracket, which makes it the fallback of [`RootFinder`](super::RootFinder).
///
/// # Stopping rule
///
/// Stops at the midpoint once `|f(mid)| < tolerance` or the half-width of the
/// bracket is at most `step_tolerance`, whichever comes first.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((root - 1.521_379_706_804_567_6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Find a root of `f` in the bracket spanned by `a` and `b`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root (an endpoint if it is an exact zero)
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::NumericalInstability)` - `f` is not finite on the bracket
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
        let mut f_lo = f(lo);
        let f_hi = f(hi);

        if !f_lo.is_finite() || !f_hi.is_finite() {
            return Err(SolverError::NumericalInstability(format!(
                "function is not finite at bracket endpoints [{}, {}]",
                lo.to_f64().unwrap_or(f64::NAN),
                hi.to_f64().unwrap_or(f64::NAN)
            )));
        }

        if f_lo == T::zero() {
            return Ok(lo);
        }
        if f_hi == T::zero() {
            return Ok(hi);
        }

        if f_lo.signum() == f_hi.signum() {
            return Err(SolverError::NoBracket {
                a: lo.to_f64().unwrap_or(f64::NAN),
                b: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let two = T::from(2.0).unwrap();

        for iteration in 0..self.config.max_iterations {
            let half_width = (hi - lo) / two;
            let mid = lo + half_width;
            let f_mid = f(mid);

            tracing::trace!(
                iteration,
                x = mid.to_f64().unwrap_or(f64::NAN),
                residual = f_mid.to_f64().unwrap_or(f64::NAN),
                "bisection step"
            );

            if !f_mid.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "f({}) is not finite",
                    mid.to_f64().unwrap_or(f64::NAN)
                )));
            }

            if f_mid.abs() < self.config.tolerance || half_width <= self.config.step_tolerance {
                return Ok(mid);
            }

            if f_mid.signum() == f_lo.signum() {
                lo = mid;
                f_lo = f_mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
