//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model with a continuous dividend
//! yield for pricing European call and put options with analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Expiries at or below this are treated as expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// First-order sensitivities and gamma of a European option.
///
/// Theta is the derivative with respect to calendar time, so it is usually
/// negative for long positions. Vega and rho are per unit (not per percent)
/// change in volatility and rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics with a continuous dividend yield.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price(100.0, 1.0, OptionType::Call);
/// let put_price = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model without dividends.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, continuous)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Invalid volatility
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero || spot.is_nan() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero || volatility.is_nan() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield: zero,
            volatility,
        })
    }

    /// Sets the continuous dividend yield `q`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2)
    ///     .unwrap()
    ///     .with_dividend_yield(0.03);
    /// assert_eq!(bs.dividend_yield(), 0.03);
    /// ```
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: T) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn is_expired(expiry: T) -> bool {
        expiry <= T::from(EXPIRY_EPSILON).unwrap()
    }

    /// Dividend discount factor e^(-qT).
    #[inline]
    fn carry_discount(&self, expiry: T) -> T {
        (-self.dividend_yield * expiry).exp()
    }

    /// Risk-free discount factor e^(-rT).
    #[inline]
    fn discount(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d1 term. Returns ±100 at expiry depending on moneyness.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European option price.
    ///
    /// Returns intrinsic value when `expiry` is effectively zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price(100.0, 1.0, OptionType::Call);
    /// assert!((price - 10.450583572185565).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return OptionType::Call.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * self.carry_discount(expiry) * norm_cdf(d1)
            - strike * self.discount(expiry) * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return OptionType::Put.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        strike * self.discount(expiry) * norm_cdf(-d2)
            - self.spot * self.carry_discount(expiry) * norm_cdf(-d1)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = -e^(-qT)·N(-d₁)
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let zero = T::zero();
        let one = T::one();

        if Self::is_expired(expiry) {
            return match option_type {
                OptionType::Call if self.spot > strike => one,
                OptionType::Put if self.spot < strike => -one,
                _ => zero,
            };
        }

        let d1 = self.d1(strike, expiry);
        let carry = self.carry_discount(expiry);

        match option_type {
            OptionType::Call => carry * norm_cdf(d1),
            OptionType::Put => -carry * norm_cdf(-d1),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.carry_discount(expiry) * norm_pdf(d1)
            / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁), identical for calls and puts.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!(bs.vega(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.spot * self.carry_discount(expiry) * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t, calendar time).
    ///
    /// - Call: -σ·S·e^(-qT)·φ(d₁)/(2√T) + q·S·e^(-qT)·N(d₁) - r·K·e^(-rT)·N(d₂)
    /// - Put: -σ·S·e^(-qT)·φ(d₁)/(2√T) - q·S·e^(-qT)·N(-d₁) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if Self::is_expired(expiry) {
            return T::zero();
        }

        let two = T::from(2.0).unwrap();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let forward_leg = self.spot * self.carry_discount(expiry);
        let strike_leg = strike * self.discount(expiry);

        let time_decay = -self.volatility * forward_leg * norm_pdf(d1) / (two * expiry.sqrt());

        match option_type {
            OptionType::Call => {
                time_decay + self.dividend_yield * forward_leg * norm_cdf(d1)
                    - self.rate * strike_leg * norm_cdf(d2)
            }
            OptionType::Put => {
                time_decay - self.dividend_yield * forward_leg * norm_cdf(-d1)
                    + self.rate * strike_leg * norm_cdf(-d2)
            }
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        if Self::is_expired(expiry) {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let scaled = strike * expiry * self.discount(expiry);

        match option_type {
            OptionType::Call => scaled * norm_cdf(d2),
            OptionType::Put => -scaled * norm_cdf(-d2),
        }
    }

    /// Computes all Greeks at once.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, OptionType::Put);
    /// assert!(greeks.delta < 0.0);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}
