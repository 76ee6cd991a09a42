//! Call/put flag for European options.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Option side.
///
/// Parses from `C`/`call` and `P`/`put`, case-insensitively.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let put: OptionType = "put".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.payoff(90.0_f64, 100.0), 10.0);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            OptionType::Call => T::one(),
            OptionType::Put => -T::one(),
        }
    }

    /// Whether this is a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value `max(sign (S - K), 0)`.
    #[inline]
    pub fn payoff<T: Float>(self, spot: T, strike: T) -> T {
        (self.sign::<T>() * (spot - strike)).max(T::zero())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::InvalidParameter {
                message: format!("unknown option type '{}', expected call or put", s),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}
