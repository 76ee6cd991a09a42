//! Inversion settings for implied quantities.
//!
//! Each closed-form price in this crate can be inverted for one parameter:
//! volatility from an option premium, yield from a bond price, a zero rate
//! from a bootstrapped bond. An [`InversionConfig`] carries the starting
//! point, the bisection fallback bracket and the [`SolverConfig`] used for
//! one such inversion. [`InversionSettings`] groups all three and can be
//! loaded from TOML:
//!
//! ```toml
//! [implied_volatility]
//! initial_guess = 0.2
//! lower_bound = 1e-6
//! upper_bound = 5.0
//!
//! [implied_volatility.solver]
//! tolerance = 1e-12
//!
//! [yield_to_maturity]
//! initial_guess = 0.05
//! lower_bound = -0.5
//! upper_bound = 2.0
//! ```
//!
//! Omitted tables fall back to the presets, omitted solver fields to
//! [`SolverConfig::default`].

use pricer_core::math::solvers::SolverConfig;
use thiserror::Error;

#[cfg(feature = "serde")]
use std::path::Path;

/// Configuration error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// TOML document could not be parsed.
    #[error("Failed to parse TOML: {0}")]
    ParseError(String),

    /// A setting is out of range.
    #[error("Invalid {target} setting: {message}")]
    InvalidSetting {
        /// Inversion target the setting belongs to
        target: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Starting point, fallback bracket and solver settings for one inversion.
///
/// # Examples
/// ```
/// use pricer_models::config::InversionConfig;
///
/// let config = InversionConfig::implied_volatility();
/// assert_eq!(config.initial_guess, 0.1);
/// assert_eq!(config.bracket(), (1e-6, 5.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InversionConfig {
    /// Starting point for Newton-Raphson.
    pub initial_guess: f64,
    /// Lower end of the bisection fallback bracket.
    pub lower_bound: f64,
    /// Upper end of the bisection fallback bracket.
    pub upper_bound: f64,
    /// Convergence settings shared by Newton and bisection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverConfig<f64>,
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self::implied_volatility()
    }
}

impl InversionConfig {
    /// Implied volatility: start at 10%, fall back to `[1e-6, 5]`.
    pub fn implied_volatility() -> Self {
        Self {
            initial_guess: 0.1,
            lower_bound: 1e-6,
            upper_bound: 5.0,
            solver: SolverConfig::default(),
        }
    }

    /// Bond yield to maturity: start at 10%, tolerances of 1e-9.
    pub fn yield_to_maturity() -> Self {
        Self {
            initial_guess: 0.1,
            lower_bound: -0.5,
            upper_bound: 2.0,
            solver: SolverConfig::new(1e-9, 1e-9, 100),
        }
    }

    /// Bootstrapped zero rate: start at 5%, fall back to `[-0.5, 1]`.
    pub fn zero_rate() -> Self {
        Self {
            initial_guess: 0.05,
            lower_bound: -0.5,
            upper_bound: 1.0,
            solver: SolverConfig::default(),
        }
    }

    /// Fallback bracket as `(lower, upper)`.
    #[inline]
    pub fn bracket(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    /// Check the settings without panicking.
    ///
    /// # Errors
    /// `ConfigError::InvalidSetting` for non-finite values, an empty bracket
    /// or an invalid solver configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for("inversion")
    }

    fn validate_for(&self, target: &'static str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidSetting { target, message };

        if !self.initial_guess.is_finite() {
            return Err(invalid(format!(
                "initial_guess must be finite, got {}",
                self.initial_guess
            )));
        }
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(invalid("bracket bounds must be finite".to_string()));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(invalid(format!(
                "lower_bound {} must be below upper_bound {}",
                self.lower_bound, self.upper_bound
            )));
        }
        self.solver.validate().map_err(invalid)
    }

    /// Parse a single inversion config from a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: InversionConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Inversion configs for every implied quantity in the workspace.
///
/// # Examples
/// ```
/// use pricer_models::config::{InversionConfig, InversionSettings};
///
/// let settings = InversionSettings::from_toml_str(
///     r#"
///     [zero_rate]
///     initial_guess = 0.02
///     lower_bound = -0.1
///     upper_bound = 0.5
///     "#,
/// )
/// .unwrap();
/// assert_eq!(settings.zero_rate.initial_guess, 0.02);
/// assert_eq!(settings.implied_volatility, InversionConfig::implied_volatility());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InversionSettings {
    /// Volatility from an option premium.
    #[cfg_attr(feature = "serde", serde(default = "InversionConfig::implied_volatility"))]
    pub implied_volatility: InversionConfig,
    /// Yield from a bond price.
    #[cfg_attr(feature = "serde", serde(default = "InversionConfig::yield_to_maturity"))]
    pub yield_to_maturity: InversionConfig,
    /// Zero rate from a bootstrapped bond.
    #[cfg_attr(feature = "serde", serde(default = "InversionConfig::zero_rate"))]
    pub zero_rate: InversionConfig,
}

impl Default for InversionSettings {
    fn default() -> Self {
        Self {
            implied_volatility: InversionConfig::implied_volatility(),
            yield_to_maturity: InversionConfig::yield_to_maturity(),
            zero_rate: InversionConfig::zero_rate(),
        }
    }
}

impl InversionSettings {
    /// Validate every target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.implied_volatility.validate_for("implied_volatility")?;
        self.yield_to_maturity.validate_for("yield_to_maturity")?;
        self.zero_rate.validate_for("zero_rate")
    }

    /// Parse settings from a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: InversionSettings =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }
}
