//! Stream of dated cash flows discounted at per-flow rates.

use pricer_core::math::solvers::RootFinder;

use super::error::InstrumentError;
use crate::config::InversionConfig;

/// Cash flows `a_i` paid at `t_i` and discounted continuously at `r_i`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::CashflowSchedule;
///
/// let flows = CashflowSchedule::with_flat_rate(
///     vec![5.0, 5.0, 105.0],
///     vec![1.0, 2.0, 3.0],
///     0.04,
/// )
/// .unwrap();
/// let irr = flows.internal_rate_of_return(None).unwrap();
/// assert!((irr - 0.04).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashflowSchedule {
    amounts: Vec<f64>,
    times: Vec<f64>,
    rates: Vec<f64>,
}

impl CashflowSchedule {
    /// Creates a schedule with one discount rate per flow.
    ///
    /// # Errors
    /// - `LengthMismatch` if the three vectors differ in length
    /// - `InvalidParameter` for negative or non-finite times
    pub fn new(
        amounts: Vec<f64>,
        times: Vec<f64>,
        rates: Vec<f64>,
    ) -> Result<Self, InstrumentError> {
        for other in [times.len(), rates.len()] {
            if other != amounts.len() {
                return Err(InstrumentError::LengthMismatch {
                    expected: amounts.len(),
                    got: other,
                });
            }
        }
        if let Some(&t) = times.iter().find(|t| !(t.is_finite() && **t >= 0.0)) {
            return Err(InstrumentError::InvalidParameter {
                message: format!("cash flow times must be non-negative, got {}", t),
            });
        }
        Ok(Self {
            amounts,
            times,
            rates,
        })
    }

    /// Creates a schedule discounted at a single rate.
    pub fn with_flat_rate(
        amounts: Vec<f64>,
        times: Vec<f64>,
        rate: f64,
    ) -> Result<Self, InstrumentError> {
        let rates = vec![rate; amounts.len()];
        Self::new(amounts, times, rates)
    }

    /// Cash-flow amounts.
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Payment times in years.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Discount rate of each flow.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Number of flows.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Whether the schedule has no flows.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// `Σ a_i e^(-r_i t_i)`.
    pub fn present_value(&self) -> f64 {
        self.amounts
            .iter()
            .zip(&self.times)
            .zip(&self.rates)
            .map(|((a, t), r)| a * (-r * t).exp())
            .sum()
    }

    /// Present value with every flow discounted at `rate`.
    pub fn present_value_at(&self, rate: f64) -> f64 {
        self.amounts
            .iter()
            .zip(&self.times)
            .map(|(a, t)| a * (-rate * t).exp())
            .sum()
    }

    /// Flat rate `x` with `Σ a_i e^(-x t_i) = target_pv`.
    ///
    /// `target_pv` defaults to [`CashflowSchedule::present_value`]. Solved
    /// with Newton-Raphson from 0.1.
    pub fn internal_rate_of_return(&self, target_pv: Option<f64>) -> Result<f64, InstrumentError> {
        self.internal_rate_of_return_with(target_pv, &InversionConfig::yield_to_maturity())
    }

    /// Like [`CashflowSchedule::internal_rate_of_return`] with explicit
    /// inversion settings.
    pub fn internal_rate_of_return_with(
        &self,
        target_pv: Option<f64>,
        config: &InversionConfig,
    ) -> Result<f64, InstrumentError> {
        if self.is_empty() {
            return Err(InstrumentError::InvalidParameter {
                message: "cash flow schedule is empty".to_string(),
            });
        }

        let target = target_pv.unwrap_or_else(|| self.present_value());
        let residual = |x: f64| self.present_value_at(x) - target;
        let derivative = |x: f64| {
            -self
                .amounts
                .iter()
                .zip(&self.times)
                .map(|(a, t)| t * a * (-x * t).exp())
                .sum::<f64>()
        };

        RootFinder::new(config.solver)
            .find_root_with_derivative(
                residual,
                derivative,
                config.initial_guess,
                Some(config.bracket()),
            )
            .map_err(|err| {
                tracing::warn!(target_pv = target, error = %err, "internal rate of return not found");
                InstrumentError::RateNotFound {
                    target,
                    reason: err.to_string(),
                }
            })
    }
}
