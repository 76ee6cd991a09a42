//! Stopping rules shared by the root finders.

use num_traits::Float;

/// Stopping rules for the root finders.
///
/// A root is accepted once the residual and the last step are both small,
/// so the two tolerances are kept apart. Inversion settings loaded from TOML
/// embed this struct; missing fields fall back to the defaults.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-10);
/// assert_eq!(config.max_iterations, 100);
///
/// let tight = SolverConfig {
///     tolerance: 1e-12,
///     ..config
/// };
/// assert!(tight.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Largest permissible `|f(x)|` at an accepted root.
    pub tolerance: T,

    /// Largest permissible distance between two consecutive iterates.
    ///
    /// For bisection this bounds the half-width of the final bracket.
    pub step_tolerance: T,

    /// Iteration budget; exhausting it yields
    /// `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Both tolerances 1e-10, 100 iterations.
    fn default() -> Self {
        let tolerance = T::from(1e-10).unwrap();
        Self {
            tolerance,
            step_tolerance: tolerance,
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Stopping rules from literal values.
    ///
    /// # Panics
    ///
    /// If either tolerance is not positive or `max_iterations == 0`. Values
    /// read from files go through [`SolverConfig::validate`] instead.
    pub fn new(tolerance: T, step_tolerance: T, max_iterations: usize) -> Self {
        let config = Self {
            tolerance,
            step_tolerance,
            max_iterations,
        };
        if let Err(message) = config.validate() {
            panic!("{}", message);
        }
        config
    }

    /// Tight stopping rules: both tolerances 1e-14, 500 iterations.
    pub fn high_precision() -> Self {
        let tolerance = T::from(1e-14).unwrap();
        Self {
            tolerance,
            step_tolerance: tolerance,
            max_iterations: 500,
        }
    }

    /// Relaxed stopping rules: both tolerances 1e-6, 50 iterations.
    pub fn fast() -> Self {
        let tolerance = T::from(1e-6).unwrap();
        Self {
            tolerance,
            step_tolerance: tolerance,
            max_iterations: 50,
        }
    }

    /// Check the configuration without panicking.
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.tolerance <= T::zero() || self.tolerance.is_nan() {
            return Err("tolerance must be positive".to_string());
        }
        if self.step_tolerance <= T::zero() || self.step_tolerance.is_nan() {
            return Err("step_tolerance must be positive".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0".to_string());
        }
        Ok(())
    }

    /// Whether an iterate with residual `f_val`, reached after a step of
    /// length `step`, is a root. An exact zero always is.
    #[inline]
    pub(crate) fn is_converged(&self, f_val: T, step: T) -> bool {
        f_val == T::zero() || (f_val.abs() < self.tolerance && step.abs() <= self.step_tolerance)
    }
}
