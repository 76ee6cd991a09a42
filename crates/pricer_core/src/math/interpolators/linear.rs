//! Piecewise linear interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator over strictly increasing knots.
///
/// Knots are sorted on construction; repeated x-coordinates are rejected
/// because they make a segment degenerate.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
/// assert_eq!(interp.domain(), (0.0, 2.0));
/// assert!((interp.interpolate(0.5).unwrap() - 1.0).abs() < 1e-12);
///
/// // Outside the knots the end values are held flat
/// assert_eq!(interp.interpolate_flat(5.0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Build an interpolator from knots `xs` and values `ys`.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Length mismatch, non-finite or
    ///   repeated knots
    /// * `InterpolationError::InsufficientData` - Fewer than two knots
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if xs.iter().any(|x| !x.is_finite()) {
            return Err(InterpolationError::InvalidInput(
                "knots must be finite".to_string(),
            ));
        }

        let mut knots: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        knots.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(w) = knots.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::InvalidInput(format!(
                "repeated knot at x = {}",
                w[0].0.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let (xs, ys) = knots.into_iter().unzip();
        Ok(Self { xs, ys })
    }

    /// Sorted knots.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Values in knot order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Interpolate inside the knots and hold the end values flat outside.
    pub fn interpolate_flat(&self, x: T) -> T {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            self.ys[0]
        } else if x >= self.xs[last] {
            self.ys[last]
        } else {
            self.segment_value(x)
        }
    }

    // Index i with xs[i] <= x < xs[i+1], clamped to [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.clamp(1, self.xs.len() - 1) - 1
    }

    #[inline]
    fn segment_value(&self, x: T) -> T {
        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        if !self.contains(x) {
            let (min, max) = self.domain();
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.segment_value(x))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
