//! Interpolation methods for numerical computation.
//!
//! - [`Interpolator`]: Trait for 1D interpolation over a bounded domain
//! - [`LinearInterpolator`]: Piecewise linear interpolation between knots
//!
//! Curves use linear interpolation on zero rates, so nothing richer is needed
//! here.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! let y = interp.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
