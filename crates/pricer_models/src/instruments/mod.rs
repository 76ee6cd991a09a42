//! Financial instrument definitions.
//!
//! Instruments hold contract terms and market inputs and compute their
//! measures on demand. Each one that is quoted by price can also be built
//! from that price, with the missing parameter implied through the shared
//! root finder in `pricer_core`.
//!
//! # Instrument Types
//!
//! - [`VanillaOption`]: European call or put under Black-Scholes
//! - [`Bond`]: Fixed-coupon bond with a continuously compounded yield
//! - [`CashflowSchedule`]: Arbitrary dated cash flows with per-flow rates
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Bond, OptionType, VanillaOption};
//!
//! let put = VanillaOption::new(100.0, 105.0, 0.5, 0.03, 0.25, OptionType::Put).unwrap();
//! assert!(put.premium() > put.intrinsic_value());
//!
//! let bond = Bond::from_price(5.0, 4.0, 2, 100.0, 98.5).unwrap();
//! assert!(bond.yield_rate() > 0.04);
//! ```

mod bond;
mod cashflow;
mod error;
mod option_type;
mod vanilla;

pub use bond::{Bond, DEFAULT_FACE};
pub use cashflow::CashflowSchedule;
pub use error::InstrumentError;
pub use option_type::OptionType;
pub use vanilla::VanillaOption;
