//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a bounded domain.
///
/// Implementations are generic over `T: Float` and reject queries outside
/// [`Interpolator::domain`] with [`InterpolationError::OutOfBounds`].
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Valid interpolation range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Whether `x` lies inside the domain (endpoints included).
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (lo, hi) = self.domain();
        x >= lo && x <= hi
    }
}
