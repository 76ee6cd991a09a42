//! European vanilla option.
//!
//! Holds the contract and market inputs; premium, Greeks and d-terms are
//! computed from them on demand with [`BlackScholes`].

use crate::analytical::{implied_volatility, BlackScholes, Greeks};
use crate::config::InversionConfig;

use super::error::InstrumentError;
use super::option_type::OptionType;

fn require_positive(
    value: f64,
    err: impl FnOnce(f64) -> InstrumentError,
) -> Result<f64, InstrumentError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(err(value))
    }
}

fn check_spot(spot: f64) -> Result<f64, InstrumentError> {
    require_positive(spot, |spot| InstrumentError::InvalidSpot { spot })
}

fn check_strike(strike: f64) -> Result<f64, InstrumentError> {
    require_positive(strike, |strike| InstrumentError::InvalidStrike { strike })
}

fn check_expiry(expiry: f64) -> Result<f64, InstrumentError> {
    require_positive(expiry, |expiry| InstrumentError::InvalidExpiry { expiry })
}

fn check_volatility(volatility: f64) -> Result<f64, InstrumentError> {
    require_positive(volatility, |volatility| InstrumentError::InvalidVolatility {
        volatility,
    })
}

fn check_finite(value: f64, name: &str) -> Result<f64, InstrumentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InstrumentError::InvalidParameter {
            message: format!("{} must be finite, got {}", name, value),
        })
    }
}

/// European call or put on a dividend-paying underlying.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, VanillaOption};
///
/// let option = VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert!((option.premium() - 10.450583572185565).abs() < 1e-10);
///
/// // Back out volatility from a traded premium
/// let quoted = VanillaOption::from_price(
///     100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call, option.premium(),
/// )
/// .unwrap();
/// assert!((quoted.volatility() - 0.2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    model: BlackScholes<f64>,
    strike: f64,
    expiry: f64,
    option_type: OptionType,
}

impl VanillaOption {
    /// Creates an option on a non-dividend-paying underlying.
    ///
    /// # Errors
    /// `InvalidSpot`, `InvalidStrike`, `InvalidExpiry` or `InvalidVolatility`
    /// when the corresponding input is not strictly positive, or
    /// `InvalidParameter` for a non-finite rate.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        let model = BlackScholes::new(
            check_spot(spot)?,
            check_finite(rate, "rate")?,
            check_volatility(volatility)?,
        )?;
        Ok(Self {
            model,
            strike: check_strike(strike)?,
            expiry: check_expiry(expiry)?,
            option_type,
        })
    }

    /// Creates an option whose volatility is implied from a traded premium.
    ///
    /// Uses [`InversionConfig::implied_volatility`].
    ///
    /// # Errors
    /// Input validation errors as in [`VanillaOption::new`], or
    /// `InstrumentError::Analytical` when the premium cannot be inverted.
    pub fn from_price(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        dividend_yield: f64,
        option_type: OptionType,
        price: f64,
    ) -> Result<Self, InstrumentError> {
        let mut option = Self::new(spot, strike, expiry, rate, 0.2, option_type)?
            .with_dividend_yield(dividend_yield);
        option.set_premium(price)?;
        Ok(option)
    }

    /// Sets the continuous dividend yield.
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.model = self.model.with_dividend_yield(dividend_yield);
        self
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.model.spot()
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.model.rate()
    }

    /// Continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.model.dividend_yield()
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.model.volatility()
    }

    /// Same as [`VanillaOption::volatility`]; after [`VanillaOption::from_price`]
    /// or [`VanillaOption::set_premium`] this is the implied volatility.
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.volatility()
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// The underlying Black-Scholes model.
    #[inline]
    pub fn model(&self) -> &BlackScholes<f64> {
        &self.model
    }

    /// Black-Scholes premium.
    pub fn premium(&self) -> f64 {
        self.model.price(self.strike, self.expiry, self.option_type)
    }

    /// Payoff if exercised at the current spot.
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.payoff(self.spot(), self.strike)
    }

    /// d₁ term.
    pub fn d1(&self) -> f64 {
        self.model.d1(self.strike, self.expiry)
    }

    /// d₂ term.
    pub fn d2(&self) -> f64 {
        self.model.d2(self.strike, self.expiry)
    }

    /// ∂V/∂S.
    pub fn delta(&self) -> f64 {
        self.model.delta(self.strike, self.expiry, self.option_type)
    }

    /// ∂²V/∂S².
    pub fn gamma(&self) -> f64 {
        self.model.gamma(self.strike, self.expiry)
    }

    /// ∂V/∂σ.
    pub fn vega(&self) -> f64 {
        self.model.vega(self.strike, self.expiry)
    }

    /// ∂V/∂t in calendar time.
    pub fn theta(&self) -> f64 {
        self.model.theta(self.strike, self.expiry, self.option_type)
    }

    /// ∂V/∂r.
    pub fn rho(&self) -> f64 {
        self.model.rho(self.strike, self.expiry, self.option_type)
    }

    /// All Greeks at once.
    pub fn greeks(&self) -> Greeks<f64> {
        self.model.greeks(self.strike, self.expiry, self.option_type)
    }

    fn rebuild(&mut self, spot: f64, rate: f64, volatility: f64) -> Result<(), InstrumentError> {
        let dividend_yield = self.model.dividend_yield();
        self.model = BlackScholes::new(spot, rate, volatility)?.with_dividend_yield(dividend_yield);
        Ok(())
    }

    /// Updates the spot price.
    pub fn set_spot(&mut self, spot: f64) -> Result<(), InstrumentError> {
        let spot = check_spot(spot)?;
        self.rebuild(spot, self.rate(), self.volatility())
    }

    /// Updates the strike.
    pub fn set_strike(&mut self, strike: f64) -> Result<(), InstrumentError> {
        self.strike = check_strike(strike)?;
        Ok(())
    }

    /// Updates the time to expiry.
    pub fn set_expiry(&mut self, expiry: f64) -> Result<(), InstrumentError> {
        self.expiry = check_expiry(expiry)?;
        Ok(())
    }

    /// Updates the risk-free rate.
    pub fn set_rate(&mut self, rate: f64) -> Result<(), InstrumentError> {
        let rate = check_finite(rate, "rate")?;
        self.rebuild(self.spot(), rate, self.volatility())
    }

    /// Updates the dividend yield.
    pub fn set_dividend_yield(&mut self, dividend_yield: f64) -> Result<(), InstrumentError> {
        let dividend_yield = check_finite(dividend_yield, "dividend yield")?;
        self.model = self.model.with_dividend_yield(dividend_yield);
        Ok(())
    }

    /// Updates the volatility.
    pub fn set_volatility(&mut self, volatility: f64) -> Result<(), InstrumentError> {
        let volatility = check_volatility(volatility)?;
        self.rebuild(self.spot(), self.rate(), volatility)
    }

    /// Switches between call and put.
    pub fn set_option_type(&mut self, option_type: OptionType) {
        self.option_type = option_type;
    }

    /// Re-implies the volatility from a traded premium.
    ///
    /// On error the option is left unchanged.
    pub fn set_premium(&mut self, price: f64) -> Result<(), InstrumentError> {
        self.set_premium_with(price, &InversionConfig::implied_volatility())
    }

    /// Like [`VanillaOption::set_premium`] with explicit inversion settings.
    pub fn set_premium_with(
        &mut self,
        price: f64,
        config: &InversionConfig,
    ) -> Result<(), InstrumentError> {
        let volatility = implied_volatility(
            price,
            self.spot(),
            self.strike,
            self.expiry,
            self.rate(),
            self.dividend_yield(),
            self.option_type,
            config,
        )?;
        self.set_volatility(volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::AnalyticalError;
    use approx::assert_relative_eq;

    fn atm_call() -> VanillaOption {
        VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_new_validates_inputs() {
        let cases = [
            VanillaOption::new(0.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call),
            VanillaOption::new(100.0, -1.0, 1.0, 0.05, 0.2, OptionType::Call),
            VanillaOption::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call),
            VanillaOption::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call),
        ];
        assert!(matches!(cases[0], Err(InstrumentError::InvalidSpot { .. })));
        assert!(matches!(cases[1], Err(InstrumentError::InvalidStrike { .. })));
        assert!(matches!(cases[2], Err(InstrumentError::InvalidExpiry { .. })));
        assert!(matches!(cases[3], Err(InstrumentError::InvalidVolatility { .. })));

        // Same rule as set_rate
        for rate in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                VanillaOption::new(100.0, 100.0, 1.0, rate, 0.2, OptionType::Call),
                Err(InstrumentError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_premium_and_greeks() {
        let call = atm_call();
        assert_relative_eq!(call.premium(), 10.450583572185565, epsilon = 1e-12);
        assert_relative_eq!(call.d1(), 0.35, epsilon = 1e-14);
        assert_relative_eq!(call.d2(), 0.15, epsilon = 1e-14);
        assert_relative_eq!(call.delta(), 0.6368306511756191, epsilon = 1e-12);
        assert_relative_eq!(call.gamma(), 0.018762017345846895, epsilon = 1e-12);
        assert_relative_eq!(call.vega(), 37.52403469169379, epsilon = 1e-10);
        assert_relative_eq!(call.theta(), -6.414027546438196, epsilon = 1e-10);
        assert_relative_eq!(call.rho(), 53.232481545376345, epsilon = 1e-10);
        assert_eq!(call.greeks().delta, call.delta());
    }

    #[test]
    fn test_from_price_with_dividends() {
        let option =
            VanillaOption::from_price(50.0, 45.0, 0.75, 0.02, 0.01, OptionType::Call, 8.0).unwrap();
        assert_relative_eq!(option.implied_volatility(), 0.30330239401, epsilon = 1e-8);
        assert_relative_eq!(option.premium(), 8.0, epsilon = 1e-9);
        assert_eq!(option.dividend_yield(), 0.01);
    }

    #[test]
    fn test_from_price_out_of_bounds() {
        let result = VanillaOption::from_price(50.0, 45.0, 0.75, 0.02, 0.0, OptionType::Call, 60.0);
        assert!(matches!(
            result,
            Err(InstrumentError::Analytical(AnalyticalError::PriceOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_setters_validate_and_reprice() {
        let mut option = atm_call();
        let base = option.premium();

        option.set_spot(110.0).unwrap();
        assert!(option.premium() > base);
        assert!(option.set_spot(-1.0).is_err());
        assert_eq!(option.spot(), 110.0);

        option.set_dividend_yield(0.03).unwrap();
        option.set_rate(0.01).unwrap();
        assert_eq!(option.dividend_yield(), 0.03);
        assert_eq!(option.rate(), 0.01);
        assert!(option.set_rate(f64::NAN).is_err());

        assert!(option.set_strike(0.0).is_err());
        assert!(option.set_expiry(-0.5).is_err());
        assert!(option.set_volatility(0.0).is_err());
        option.set_volatility(0.3).unwrap();
        assert_eq!(option.volatility(), 0.3);

        option.set_option_type(OptionType::Put);
        assert!(option.delta() < 0.0);
    }

    #[test]
    fn test_set_premium_round_trip() {
        let mut option = atm_call().with_dividend_yield(0.02);
        option.set_option_type(OptionType::Put);
        let target = option.premium();

        option.set_volatility(0.5).unwrap();
        option.set_premium(target).unwrap();
        assert_relative_eq!(option.volatility(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_set_premium_failure_leaves_option_unchanged() {
        let mut option = atm_call();
        let before = option;
        assert!(option.set_premium(-1.0).is_err());
        assert_eq!(option, before);
    }

    #[test]
    fn test_intrinsic_value() {
        let mut option = atm_call();
        assert_eq!(option.intrinsic_value(), 0.0);
        option.set_spot(120.0).unwrap();
        assert_eq!(option.intrinsic_value(), 20.0);
        option.set_option_type(OptionType::Put);
        assert_eq!(option.intrinsic_value(), 0.0);
    }
}
