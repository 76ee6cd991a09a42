//! Root finder with bisection fallback.

use super::{BisectionSolver, NewtonRaphsonSolver, SecantSolver, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Offset of the second secant starting point.
const SECANT_OFFSET: f64 = 0.1;

/// Open-method root finder that falls back to bisection.
///
/// Runs Newton-Raphson (or the secant method when no derivative is
/// available) from an initial guess. When that fails, or converges to a root
/// outside the supplied bracket, bisection on the bracket is tried instead.
/// All three methods share one [`SolverConfig`].
///
/// This is the kernel behind implied volatility, yield-to-maturity and
/// zero-curve bootstrapping.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{RootFinder, SolverConfig};
///
/// let finder = RootFinder::new(SolverConfig::default());
///
/// // Newton stalls on the flat derivative at x0 = 0, bisection recovers
/// let f = |x: f64| x * x * x - 8.0;
/// let f_prime = |x: f64| 3.0 * x * x;
/// let root = finder
///     .find_root_with_derivative(f, f_prime, 0.0, Some((0.0, 5.0)))
///     .unwrap();
/// assert!((root - 2.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct RootFinder<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> Default for RootFinder<T> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl<T: Float> RootFinder<T> {
    /// Create a root finder with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Newton-Raphson from `x0`, falling back to bisection on `bracket`.
    ///
    /// Without a bracket the Newton error is returned unchanged.
    pub fn find_root_with_derivative<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
        bracket: Option<(T, T)>,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let primary = NewtonRaphsonSolver::new(self.config).find_root(&f, f_prime, x0);
        self.with_fallback("newton", primary, f, bracket)
    }

    /// Secant method from `x0` and `x0 + 0.1`, falling back to bisection on
    /// `bracket`.
    pub fn find_root<F>(&self, f: F, x0: T, bracket: Option<(T, T)>) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let x1 = x0 + T::from(SECANT_OFFSET).unwrap();
        let primary = SecantSolver::new(self.config).find_root(&f, x0, x1);
        self.with_fallback("secant", primary, f, bracket)
    }

    fn with_fallback<F>(
        &self,
        method: &'static str,
        primary: Result<T, SolverError>,
        f: F,
        bracket: Option<(T, T)>,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let Some((a, b)) = bracket else {
            return primary;
        };

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match primary {
            Ok(root) if root >= lo && root <= hi => return Ok(root),
            Ok(root) => tracing::debug!(
                method,
                root = root.to_f64().unwrap_or(f64::NAN),
                lo = lo.to_f64().unwrap_or(f64::NAN),
                hi = hi.to_f64().unwrap_or(f64::NAN),
                "root outside bracket, falling back to bisection"
            ),
            Err(ref err) => tracing::debug!(
                method,
                error = %err,
                "open method failed, falling back to bisection"
            ),
        }

        BisectionSolver::new(self.config).find_root(f, lo, hi)
    }
}
