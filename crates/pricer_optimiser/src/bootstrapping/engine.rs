//! Sequential zero-curve bootstrapping engine.
//!
//! This module provides `ZeroCurveBootstrapper`, which strips continuously
//! compounded zero rates from coupon bonds one maturity at a time.

use std::cell::Cell;

use pricer_core::math::interpolators::LinearInterpolator;
use pricer_core::math::solvers::RootFinder;
use pricer_models::config::InversionConfig;
use pricer_models::instruments::Bond;

use super::curve::BootstrappedZeroCurve;
use super::error::BootstrapError;

/// Tolerance for treating two payment times as the same date.
const TIME_EPSILON: f64 = 1e-10;

/// Sequential bootstrapping engine for bond sets.
///
/// Implements the standard stripping algorithm:
/// 1. Sort bonds by maturity
/// 2. Discount coupons falling on or before the last known pillar at rates
///    interpolated from the pillars already stripped
/// 3. Treat the zero rate `x` at the bond maturity as the unknown, with the
///    rate at each later coupon date on the line from the last pillar to `x`
/// 4. Solve `Σ c_i e^(-r_i(x) t_i) = B` with Newton-Raphson and bisection
///    fallback, then add every new coupon date as a pillar
///
/// All bonds must share a coupon frequency so that their coupon dates lie
/// on one grid.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::Bond;
/// use pricer_optimiser::bootstrapping::ZeroCurveBootstrapper;
///
/// let bonds = vec![
///     Bond::from_price(1.0, 3.0, 2, 100.0, 101.25).unwrap(),
///     Bond::from_price(1.5, 2.0, 2, 100.0, 99.95).unwrap(),
///     Bond::from_price(3.0, 5.0, 2, 100.0, 110.3).unwrap(),
/// ];
///
/// let curve = ZeroCurveBootstrapper::with_defaults()
///     .bootstrap(&bonds, 0.015)
///     .unwrap();
///
/// assert_eq!(curve.pillars(), &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
/// assert!(curve.max_residual() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroCurveBootstrapper {
    /// Root-finder settings for each maturity
    config: InversionConfig,
}

impl Default for ZeroCurveBootstrapper {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ZeroCurveBootstrapper {
    /// Create a bootstrapper with the given solver settings.
    pub fn new(config: InversionConfig) -> Self {
        Self { config }
    }

    /// Create a bootstrapper with [`InversionConfig::zero_rate`].
    pub fn with_defaults() -> Self {
        Self::new(InversionConfig::zero_rate())
    }

    /// Get the configuration.
    pub fn config(&self) -> &InversionConfig {
        &self.config
    }

    /// Strip a zero curve from `bonds`, anchored at `overnight_rate` at
    /// `t = 0`.
    ///
    /// Each bond is repriced at its own price, as implied by its yield.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if `bonds` is empty
    /// - `InvalidInput` for a non-finite overnight rate or bad settings
    /// - `MixedFrequency` if the bonds do not share a coupon frequency
    /// - `DuplicateMaturity` if two bonds mature together
    /// - `ConvergenceFailure` if a maturity cannot be solved
    pub fn bootstrap(
        &self,
        bonds: &[Bond],
        overnight_rate: f64,
    ) -> Result<BootstrappedZeroCurve, BootstrapError> {
        self.validate(bonds, overnight_rate)?;

        let mut sorted: Vec<&Bond> = bonds.iter().collect();
        sorted.sort_by(|a, b| a.maturity().total_cmp(&b.maturity()));

        tracing::debug!(
            bonds = sorted.len(),
            overnight_rate,
            frequency = sorted[0].frequency(),
            "bootstrapping zero curve"
        );

        let mut pillars = vec![0.0];
        let mut rates = vec![overnight_rate];
        let mut residuals = Vec::with_capacity(sorted.len());

        for bond in sorted {
            let residual = self.strip_bond(bond, &mut pillars, &mut rates)?;
            residuals.push(residual);
        }

        Ok(BootstrappedZeroCurve::new(pillars, rates, residuals)?)
    }

    fn validate(&self, bonds: &[Bond], overnight_rate: f64) -> Result<(), BootstrapError> {
        self.config
            .validate()
            .map_err(|e| BootstrapError::invalid_input(e.to_string()))?;

        let Some(first) = bonds.first() else {
            return Err(BootstrapError::insufficient_data(1, 0));
        };
        if !overnight_rate.is_finite() {
            return Err(BootstrapError::invalid_input(format!(
                "overnight rate must be finite, got {}",
                overnight_rate
            )));
        }
        if let Some(other) = bonds.iter().find(|b| b.frequency() != first.frequency()) {
            return Err(BootstrapError::MixedFrequency {
                expected: first.frequency(),
                found: other.frequency(),
            });
        }
        Ok(())
    }

    /// Solve the zero rate at the maturity of `bond` and append the new
    /// pillars. Returns the repricing residual.
    fn strip_bond(
        &self,
        bond: &Bond,
        pillars: &mut Vec<f64>,
        rates: &mut Vec<f64>,
    ) -> Result<f64, BootstrapError> {
        let last = pillars.len() - 1;
        let (last_time, last_rate) = (pillars[last], rates[last]);
        let maturity = bond.maturity();
        if maturity <= last_time + TIME_EPSILON {
            return Err(BootstrapError::duplicate_maturity(maturity));
        }

        let known = if pillars.len() >= 2 {
            Some(LinearInterpolator::new(pillars.as_slice(), rates.as_slice())?)
        } else {
            None
        };

        // Flows on or before the last pillar are fully determined; later
        // flows carry a weight on the unknown maturity rate
        let span = maturity - last_time;
        let mut fixed_value = 0.0;
        let mut free: Vec<(f64, f64, f64)> = Vec::new();
        for (t, amount) in bond.cashflows() {
            if t <= last_time + TIME_EPSILON {
                let r = known
                    .as_ref()
                    .map_or(last_rate, |curve| curve.interpolate_flat(t));
                fixed_value += amount * (-r * t).exp();
            } else {
                free.push((t, amount, (t - last_time) / span));
            }
        }

        let target = bond.price();
        let rate_at = |x: f64, weight: f64| last_rate + weight * (x - last_rate);
        let curve_price = |x: f64| {
            fixed_value
                + free
                    .iter()
                    .map(|&(t, a, w)| a * (-rate_at(x, w) * t).exp())
                    .sum::<f64>()
        };
        // Last point the solver tried, with its residual
        let last_tried = Cell::new((self.config.initial_guess, f64::NAN));
        let objective = |x: f64| {
            let residual = curve_price(x) - target;
            last_tried.set((x, residual));
            residual
        };
        let derivative = |x: f64| {
            -free
                .iter()
                .map(|&(t, a, w)| a * t * w * (-rate_at(x, w) * t).exp())
                .sum::<f64>()
        };

        let x = RootFinder::new(self.config.solver)
            .find_root_with_derivative(
                objective,
                derivative,
                self.config.initial_guess,
                Some(self.config.bracket()),
            )
            .map_err(|err| {
                let (rate, residual) = last_tried.get();
                tracing::warn!(maturity, rate, residual, error = %err, "zero rate not found");
                BootstrapError::ConvergenceFailure {
                    maturity,
                    residual,
                    reason: err.to_string(),
                }
            })?;

        for &(t, _, w) in &free {
            let rate = rate_at(x, w);
            tracing::debug!(pillar = t, rate, "zero rate pillar");
            pillars.push(t);
            rates.push(rate);
        }

        Ok(curve_price(x) - target)
    }
}
