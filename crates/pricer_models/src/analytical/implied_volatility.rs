//! Black-Scholes implied volatility.
//!
//! Inverts the dividend-aware Black-Scholes price for σ with Newton-Raphson
//! on vega, falling back to bisection on the configured bracket.

use pricer_core::math::solvers::RootFinder;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::config::InversionConfig;
use crate::instruments::OptionType;

/// No-arbitrage price range `[lower, upper)` of a European option.
///
/// `lower` is the discounted intrinsic value, `upper` the discounted spot
/// (calls) or discounted strike (puts).
pub fn price_bounds(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    option_type: OptionType,
) -> (f64, f64) {
    let forward_leg = spot * (-dividend_yield * expiry).exp();
    let strike_leg = strike * (-rate * expiry).exp();
    let lower = (option_type.sign::<f64>() * (forward_leg - strike_leg)).max(0.0);
    let upper = match option_type {
        OptionType::Call => forward_leg,
        OptionType::Put => strike_leg,
    };
    (lower, upper)
}

/// Solve for the volatility that reproduces `price`.
///
/// Newton-Raphson starts from `config.initial_guess` using vega as the
/// derivative. When it fails or leaves the bracket, bisection on
/// `config.bracket()` is used.
///
/// # Errors
/// - `InvalidSpot`, `InvalidStrike`, `InvalidExpiry` for non-positive inputs
/// - `PriceOutOfBounds` when no volatility can produce `price`
/// - `ImpliedVolatilityNotFound` when both solvers fail
///
/// # Examples
/// ```
/// use pricer_models::analytical::implied_volatility;
/// use pricer_models::config::InversionConfig;
/// use pricer_models::instruments::OptionType;
///
/// let sigma = implied_volatility(
///     8.0, 50.0, 45.0, 0.75, 0.02, 0.01,
///     OptionType::Call,
///     &InversionConfig::implied_volatility(),
/// )
/// .unwrap();
/// assert!((sigma - 0.303302394).abs() < 1e-8);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn implied_volatility(
    price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    dividend_yield: f64,
    option_type: OptionType,
    config: &InversionConfig,
) -> Result<f64, AnalyticalError> {
    if spot <= 0.0 || spot.is_nan() {
        return Err(AnalyticalError::InvalidSpot { spot });
    }
    if strike <= 0.0 || strike.is_nan() {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if expiry <= 0.0 || expiry.is_nan() {
        return Err(AnalyticalError::InvalidExpiry { expiry });
    }

    let (lower, upper) = price_bounds(spot, strike, expiry, rate, dividend_yield, option_type);
    if !price.is_finite() || price < lower || price >= upper {
        return Err(AnalyticalError::PriceOutOfBounds {
            price,
            lower,
            upper,
        });
    }

    // Non-positive trial volatilities evaluate to NaN so Newton bails out
    // and bisection takes over.
    let model = |sigma: f64| {
        BlackScholes::new(spot, rate, sigma)
            .ok()
            .map(|bs| bs.with_dividend_yield(dividend_yield))
    };
    let residual = |sigma: f64| {
        model(sigma).map_or(f64::NAN, |bs| bs.price(strike, expiry, option_type) - price)
    };
    let vega = |sigma: f64| model(sigma).map_or(f64::NAN, |bs| bs.vega(strike, expiry));

    let finder = RootFinder::new(config.solver);
    finder
        .find_root_with_derivative(residual, vega, config.initial_guess, Some(config.bracket()))
        .map_err(|err| {
            tracing::warn!(
                price,
                spot,
                strike,
                expiry,
                %option_type,
                error = %err,
                "implied volatility inversion failed"
            );
            AnalyticalError::ImpliedVolatilityNotFound {
                price,
                reason: err.to_string(),
            }
        })
}
