//! Integration tests for pricer_models.
//!
//! These tests exercise the public API end to end: quoted prices in,
//! implied parameters and risk measures out, with inversion settings loaded
//! the way an application would load them.

use approx::assert_relative_eq;
use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve};
use pricer_core::types::PricingError;
use pricer_models::analytical::{implied_volatility, AnalyticalError};
use pricer_models::config::{InversionConfig, InversionSettings};
use pricer_models::instruments::{Bond, CashflowSchedule, InstrumentError, OptionType, VanillaOption};
use pricer_models::time_value::{convert_rate, Compounding};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Options
// ============================================================================

/// A quoted premium implies a volatility that reprices both sides.
#[test]
fn test_quoted_call_and_put_share_volatility() {
    init_tracing();

    let call = VanillaOption::from_price(50.0, 45.0, 0.75, 0.02, 0.01, OptionType::Call, 8.0)
        .unwrap();
    assert_relative_eq!(call.implied_volatility(), 0.30330239401, epsilon = 1e-8);

    let mut put = call;
    put.set_option_type(OptionType::Put);
    let parity = call.premium() - put.premium();
    let forward = 50.0 * (-0.01_f64 * 0.75).exp() - 45.0 * (-0.02_f64 * 0.75).exp();
    assert_relative_eq!(parity, forward, epsilon = 1e-10);

    let quoted_put = VanillaOption::from_price(
        50.0,
        45.0,
        0.75,
        0.02,
        0.01,
        OptionType::Put,
        put.premium(),
    )
    .unwrap();
    assert_relative_eq!(quoted_put.volatility(), call.volatility(), epsilon = 1e-8);
}

/// A bad quote surfaces as an error, never as a stale volatility.
#[test]
fn test_failed_inversion_propagates() {
    init_tracing();

    let err = implied_volatility(
        0.001,
        100.0,
        50.0,
        1.0,
        0.05,
        0.0,
        OptionType::Call,
        &InversionConfig::implied_volatility(),
    )
    .unwrap_err();
    assert!(matches!(err, AnalyticalError::PriceOutOfBounds { .. }));

    let pricing: PricingError = InstrumentError::from(err).into();
    assert!(matches!(pricing, PricingError::InvalidInput(_)));
}

// ============================================================================
// Bonds and cash flows
// ============================================================================

/// A bond priced off a curve has a yield that reproduces the curve price.
#[test]
fn test_bond_priced_off_curve() {
    init_tracing();

    let curve = InterpolatedCurve::new(
        &[0.5, 1.0, 2.0, 5.0],
        &[0.02, 0.025, 0.03, 0.035],
        CurveInterpolation::Linear,
        true,
    )
    .unwrap();

    let template = Bond::new(5.0, 4.0, 2, 0.0).unwrap();
    let curve_price = template.price_from_curve(&curve).unwrap();

    let bond = Bond::from_price(5.0, 4.0, 2, 100.0, curve_price).unwrap();
    assert_relative_eq!(bond.price(), curve_price, epsilon = 1e-8);
    assert!(bond.yield_rate() > 0.03 && bond.yield_rate() < 0.035);

    // Bond cash flows discounted flat at the yield agree with the bond price
    let flows = bond.cashflows();
    let schedule = CashflowSchedule::with_flat_rate(
        flows.iter().map(|f| f.1).collect(),
        flows.iter().map(|f| f.0).collect(),
        bond.yield_rate(),
    )
    .unwrap();
    assert_relative_eq!(schedule.present_value(), bond.price(), epsilon = 1e-10);
    assert_relative_eq!(
        schedule.internal_rate_of_return(Some(curve_price)).unwrap(),
        bond.yield_rate(),
        epsilon = 1e-9
    );
}

/// Duration and convexity predict a small yield move.
#[test]
fn test_duration_convexity_approximation() {
    let bond = Bond::new(10.0, 5.0, 2, 0.045).unwrap();
    let dy = 0.001;
    let mut shifted = bond;
    shifted.set_yield_rate(0.045 + dy).unwrap();

    let predicted =
        bond.price() * (1.0 - bond.duration() * dy + 0.5 * bond.convexity() * dy * dy);
    assert_relative_eq!(shifted.price(), predicted, max_relative = 1e-6);
}

/// A semi-annual quote converts to the continuous yield the bond uses.
#[test]
fn test_par_bond_yield_matches_rate_conversion() {
    let par = Bond::from_price(3.0, 6.0, 2, 100.0, 100.0).unwrap();
    let expected = convert_rate(0.06, Compounding::Periodic(2), Compounding::Continuous).unwrap();
    assert_relative_eq!(par.yield_rate(), expected, epsilon = 1e-9);
}

// ============================================================================
// Configuration and serialisation
// ============================================================================

#[test]
fn test_settings_loaded_from_file() {
    let path = std::env::temp_dir().join(format!("inversion-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        [yield_to_maturity]
        initial_guess = 0.03
        lower_bound = -0.2
        upper_bound = 0.5

        [yield_to_maturity.solver]
        tolerance = 1e-12
        step_tolerance = 1e-12
        "#,
    )
    .unwrap();

    let settings = InversionSettings::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let bond = Bond::from_price_with(7.0, 3.5, 2, 100.0, 97.0, &settings.yield_to_maturity)
        .unwrap();
    assert_relative_eq!(bond.price(), 97.0, epsilon = 1e-10);
    assert_eq!(settings.zero_rate, InversionConfig::zero_rate());
}

#[test]
fn test_serde_round_trip() {
    let bond = Bond::new(4.0, 3.0, 4, 0.0625).unwrap().with_face(1000.0).unwrap();
    let json = serde_json::to_string(&bond).unwrap();
    let restored: Bond = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bond);

    let greeks = VanillaOption::new(100.0, 95.0, 0.5, 0.03, 0.25, OptionType::Put)
        .unwrap()
        .greeks();
    let value = serde_json::to_value(greeks).unwrap();
    assert!(value["delta"].as_f64().unwrap() < 0.0);

    let side: OptionType = serde_json::from_str("\"put\"").unwrap();
    assert_eq!(side, OptionType::Put);
}

#[test]
fn test_deserialised_bond_is_validated() {
    let bond: Bond = serde_json::from_str(
        r#"{"maturity": 2.0, "coupon_rate": 6.0, "frequency": 2, "yield_rate": 0.05}"#,
    )
    .unwrap();
    assert_eq!(bond.face(), 100.0);
    assert_eq!(bond.payment_times().len(), 4);

    let no_coupons = serde_json::from_str::<Bond>(
        r#"{"maturity": 2.0, "coupon_rate": 6.0, "frequency": 0, "yield_rate": 0.05}"#,
    );
    assert!(no_coupons.unwrap_err().to_string().contains("frequency"));

    let huge = serde_json::from_str::<Bond>(
        r#"{"maturity": 1e10, "coupon_rate": 6.0, "frequency": 12, "yield_rate": 0.05}"#,
    );
    assert!(huge.is_err());
}
