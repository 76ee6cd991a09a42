//! Numerical integration by Simpson's rule.
//!
//! - [`simpson`]: Composite Simpson's rule with a fixed partition count
//! - [`SimpsonIntegrator`]: Repeated partition doubling until two successive
//!   estimates agree
//!
//! Simpson's rule is exact for polynomials up to degree three.
//!
//! # Example
//!
//! ```
//! use pricer_core::math::quadrature::{simpson, SimpsonIntegrator};
//!
//! // ∫₀¹ x² dx = 1/3
//! let area = simpson(|x: f64| x * x, 0.0, 1.0, 2).unwrap();
//! assert!((area - 1.0 / 3.0).abs() < 1e-14);
//!
//! let integrator = SimpsonIntegrator::default();
//! let area = integrator.integrate(|x: f64| x.exp(), 0.0, 1.0).unwrap();
//! assert!((area - (1.0_f64.exp() - 1.0)).abs() < 1e-8);
//! ```

use crate::types::IntegrationError;
use num_traits::Float;

/// Composite Simpson's rule over `[a, b]` with `n` sub-intervals.
///
/// `n` must be even and at least 2. When `a > b` the signed integral is
/// returned, and `a == b` integrates to zero.
///
/// ```text
/// ∫ f ≈ h/3 [f(x₀) + 4 Σ f(x_odd) + 2 Σ f(x_even) + f(x_n)],  h = (b − a)/n
/// ```
pub fn simpson<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    if n < 2 || n % 2 != 0 {
        return Err(IntegrationError::InvalidPartitions { partitions: n });
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(IntegrationError::InvalidInterval {
            a: a.to_f64().unwrap_or(f64::NAN),
            b: b.to_f64().unwrap_or(f64::NAN),
        });
    }
    if a == b {
        return Ok(T::zero());
    }

    let n_t = T::from(n).unwrap();
    let h = (b - a) / n_t;
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let three = T::from(3.0).unwrap();

    let mut interior = T::zero();
    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        let weight = if i % 2 == 1 { four } else { two };
        interior = interior + weight * f(x);
    }

    Ok(h / three * (f(a) + interior + f(b)))
}

/// Adaptive Simpson integration by partition doubling.
///
/// Starts by comparing the 4- and 8-partition estimates and doubles the
/// partition count until two successive estimates differ by at most
/// `tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpsonIntegrator<T: Float> {
    /// Largest accepted difference between successive estimates.
    pub tolerance: T,
    /// Maximum number of partition doublings.
    pub max_refinements: usize,
}

impl<T: Float> Default for SimpsonIntegrator<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap(),
            max_refinements: 20,
        }
    }
}

impl<T: Float> SimpsonIntegrator<T> {
    /// Create an integrator with the given tolerance and refinement budget.
    pub fn new(tolerance: T, max_refinements: usize) -> Self {
        Self {
            tolerance,
            max_refinements,
        }
    }

    /// Integrate `f` over `[a, b]`.
    ///
    /// # Errors
    ///
    /// * `IntegrationError::InvalidInterval` - Non-finite bounds
    /// * `IntegrationError::MaxRefinementsExceeded` - Estimates never settled
    pub fn integrate<F>(&self, f: F, a: T, b: T) -> Result<T, IntegrationError>
    where
        F: Fn(T) -> T,
    {
        let mut partitions = 4;
        let mut previous = simpson(&f, a, b, partitions)?;

        for refinement in 1..=self.max_refinements {
            partitions *= 2;
            let current = simpson(&f, a, b, partitions)?;

            tracing::trace!(
                refinement,
                partitions,
                estimate = current.to_f64().unwrap_or(f64::NAN),
                "simpson refinement"
            );

            if (current - previous).abs() <= self.tolerance {
                return Ok(current);
            }
            previous = current;
        }

        Err(IntegrationError::MaxRefinementsExceeded {
            refinements: self.max_refinements,
            estimate: previous.to_f64().unwrap_or(f64::NAN),
        })
    }
}
