//! Time value of money.
//!
//! Discrete discounting of level-spaced cash flows, conversion between
//! compounding conventions and mortgage amortisation.

use pricer_core::types::PricingError;

/// When the first of a series of periodic flows is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaymentTiming {
    /// First flow today (annuity due).
    Immediate,
    /// First flow one period from today (ordinary annuity).
    #[default]
    Arrears,
}

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Compounding {
    /// Continuous compounding.
    Continuous,
    /// Compounded the given number of times per year.
    Periodic(u32),
}

fn check_period_rate(rate: f64) -> Result<f64, PricingError> {
    validate_period_rate(rate).map(|rate| 1.0 + rate)
}

fn validate_period_rate(rate: f64) -> Result<f64, PricingError> {
    if rate.is_finite() && rate > -1.0 {
        Ok(rate)
    } else {
        Err(PricingError::InvalidInput(format!(
            "per-period rate must be finite and above -1, got {}",
            rate
        )))
    }
}

fn check_periods(periods: u32) -> Result<f64, PricingError> {
    if periods == 0 {
        Err(PricingError::InvalidInput(
            "compounding frequency must be at least 1".to_string(),
        ))
    } else {
        Ok(f64::from(periods))
    }
}

/// Present value of flows paid once per period at per-period rate `rate`.
///
/// Flow `i` is discounted by `(1 + rate)^-(i + offset)` where the offset is
/// 0 for [`PaymentTiming::Immediate`] and 1 for [`PaymentTiming::Arrears`].
///
/// # Examples
/// ```
/// use pricer_models::time_value::{present_value, PaymentTiming};
///
/// let pv = present_value(0.05, &[100.0, 100.0, 100.0], PaymentTiming::Arrears).unwrap();
/// assert!((pv - 272.3248029370478).abs() < 1e-10);
/// ```
pub fn present_value(rate: f64, flows: &[f64], timing: PaymentTiming) -> Result<f64, PricingError> {
    let growth = check_period_rate(rate)?;
    let offset = match timing {
        PaymentTiming::Immediate => 0,
        PaymentTiming::Arrears => 1,
    };
    Ok(flows
        .iter()
        .zip(offset..)
        .map(|(amount, period)| amount * growth.powi(-period))
        .sum())
}

/// Value at the last payment date of flows paid once per period.
///
/// Flow `i` of `n` is grown by `(1 + rate)^(n - 1 - i)`.
pub fn future_value(rate: f64, flows: &[f64]) -> Result<f64, PricingError> {
    let growth = check_period_rate(rate)?;
    Ok(flows
        .iter()
        .rev()
        .zip(0..)
        .map(|(amount, periods)| amount * growth.powi(periods))
        .sum())
}

/// Continuously compounded equivalent `m ln(1 + r/m)` of a rate compounded
/// `periods` times a year.
pub fn continuous_rate(rate: f64, periods: u32) -> Result<f64, PricingError> {
    let m = check_periods(periods)?;
    Ok(m * validate_period_rate(rate / m)?.ln_1p())
}

/// Re-express `rate` from one compounding convention in another.
///
/// # Examples
/// ```
/// use pricer_models::time_value::{convert_rate, Compounding};
///
/// // 6% semi-annual as a continuously compounded rate
/// let r = convert_rate(0.06, Compounding::Periodic(2), Compounding::Continuous).unwrap();
/// assert!((r - 0.05911760448308886).abs() < 1e-14);
/// ```
pub fn convert_rate(rate: f64, from: Compounding, to: Compounding) -> Result<f64, PricingError> {
    if from == to {
        if let Compounding::Periodic(m) = from {
            validate_period_rate(rate / check_periods(m)?)?;
        }
        return Ok(rate);
    }
    let continuous = match from {
        Compounding::Continuous => rate,
        Compounding::Periodic(m) => continuous_rate(rate, m)?,
    };
    match to {
        Compounding::Continuous => Ok(continuous),
        Compounding::Periodic(n) => {
            let n = check_periods(n)?;
            Ok(n * (continuous / n).exp_m1())
        }
    }
}

/// Level payment of a fully amortising loan.
///
/// `PV (r/m) / (1 - (1 + r/m)^(-m n))` for `n` years with `m` payments a
/// year at annual rate `r` compounded `m` times; `PV / (m n)` when `r` is 0.
///
/// # Examples
/// ```
/// use pricer_models::time_value::level_payment;
///
/// let monthly = level_payment(250_000.0, 15.0, 0.08, 12).unwrap();
/// assert!((monthly - 2389.130210825891).abs() < 1e-8);
/// ```
pub fn level_payment(
    principal: f64,
    years: f64,
    rate: f64,
    periods: u32,
) -> Result<f64, PricingError> {
    let m = check_periods(periods)?;
    if !(years.is_finite() && years > 0.0) {
        return Err(PricingError::InvalidInput(format!(
            "loan term must be positive, got {}",
            years
        )));
    }

    let payments = m * years;
    let period_rate = rate / m;
    if period_rate == 0.0 {
        return Ok(principal / payments);
    }
    let growth = check_period_rate(period_rate)?;
    Ok(principal * period_rate / (1.0 - growth.powf(-payments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FLOWS: [f64; 3] = [100.0, 100.0, 100.0];

    #[test]
    fn test_present_value_timing() {
        let arrears = present_value(0.05, &FLOWS, PaymentTiming::Arrears).unwrap();
        let due = present_value(0.05, &FLOWS, PaymentTiming::Immediate).unwrap();
        assert_relative_eq!(arrears, 272.3248029370478, epsilon = 1e-10);
        assert_relative_eq!(due, 285.94104308390024, epsilon = 1e-10);
        assert_relative_eq!(due, arrears * 1.05, epsilon = 1e-10);
        assert_eq!(present_value(0.05, &[], PaymentTiming::default()).unwrap(), 0.0);
    }

    #[test]
    fn test_future_value() {
        assert_relative_eq!(future_value(0.05, &FLOWS).unwrap(), 315.25, epsilon = 1e-10);
        // Future value is the arrears present value grown over the full term
        let pv = present_value(0.05, &FLOWS, PaymentTiming::Arrears).unwrap();
        assert_relative_eq!(future_value(0.05, &FLOWS).unwrap(), pv * 1.05_f64.powi(3), epsilon = 1e-10);
    }

    #[test]
    fn test_rate_conversions() {
        assert_relative_eq!(continuous_rate(0.06, 2).unwrap(), 0.05911760448308886, epsilon = 1e-15);
        assert_relative_eq!(
            convert_rate(0.05, Compounding::Continuous, Compounding::Periodic(12)).unwrap(),
            0.05010431149342143,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            convert_rate(0.06, Compounding::Periodic(2), Compounding::Periodic(4)).unwrap(),
            0.05955662603688783,
            epsilon = 1e-14
        );
        assert_eq!(
            convert_rate(0.07, Compounding::Periodic(4), Compounding::Periodic(4)).unwrap(),
            0.07
        );
    }

    #[test]
    fn test_conversion_round_trip() {
        for m in [1, 2, 4, 12, 365] {
            let there = convert_rate(0.045, Compounding::Periodic(m), Compounding::Continuous).unwrap();
            let back = convert_rate(there, Compounding::Continuous, Compounding::Periodic(m)).unwrap();
            assert_relative_eq!(back, 0.045, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_continuous_rate_small_period_rate() {
        // Daily compounding leaves r/m near 1e-4, where ln(1 + x) loses digits
        let r = continuous_rate(0.045, 365).unwrap();
        assert_relative_eq!(r, 365.0 * (0.045_f64 / 365.0).ln_1p(), epsilon = 1e-17);
        assert_relative_eq!(continuous_rate(1e-12, 12).unwrap(), 1e-12, max_relative = 1e-9);
    }

    #[test]
    fn test_level_payment() {
        assert_relative_eq!(
            level_payment(250_000.0, 15.0, 0.08, 12).unwrap(),
            2389.130210825891,
            epsilon = 1e-8
        );
        assert_relative_eq!(level_payment(1200.0, 1.0, 0.0, 12).unwrap(), 100.0);

        // Payments discounted at the loan rate repay the principal
        let payment = level_payment(10_000.0, 2.0, 0.06, 4).unwrap();
        let schedule = vec![payment; 8];
        let pv = present_value(0.015, &schedule, PaymentTiming::Arrears).unwrap();
        assert_relative_eq!(pv, 10_000.0, epsilon = 1e-8);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            present_value(-1.0, &FLOWS, PaymentTiming::Arrears),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(future_value(f64::NAN, &FLOWS).is_err());
        assert!(continuous_rate(0.05, 0).is_err());
        assert!(continuous_rate(-3.0, 2).is_err());
        assert!(convert_rate(0.05, Compounding::Continuous, Compounding::Periodic(0)).is_err());
        assert!(convert_rate(0.05, Compounding::Periodic(0), Compounding::Periodic(0)).is_err());
        assert!(convert_rate(-5.0, Compounding::Periodic(2), Compounding::Periodic(2)).is_err());
        assert!(level_payment(1000.0, 0.0, 0.05, 12).is_err());
        assert!(level_payment(1000.0, 10.0, 0.05, 0).is_err());
    }
}
