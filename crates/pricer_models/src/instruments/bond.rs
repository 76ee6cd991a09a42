//! Fixed-coupon bond with a continuously compounded yield.
//!
//! Coupons of `R·F/(100·m)` are paid `m` times a year, counted back from
//! maturity `T`; the face value `F` is repaid with the last coupon. A bond
//! with `T = 1.25` and `m = 2` therefore pays at 0.25, 0.75 and 1.25.

use pricer_core::market_data::curves::YieldCurve;
use pricer_core::math::solvers::RootFinder;

use super::error::InstrumentError;
use crate::config::InversionConfig;

/// Face value used by [`Bond::new`].
pub const DEFAULT_FACE: f64 = 100.0;

/// Coupon times closer to zero than this are dropped from the schedule.
const TIME_EPSILON: f64 = 1e-12;

/// Longest payment schedule a bond may carry.
pub const MAX_PAYMENTS: f64 = 100_000.0;

/// Money-market day count: 360-day year over 365 calendar days.
const MONEY_MARKET_SCALE: f64 = 360.0 / 365.0;

fn check_maturity(maturity: f64) -> Result<f64, InstrumentError> {
    if maturity > 0.0 && maturity.is_finite() {
        Ok(maturity)
    } else {
        Err(InstrumentError::InvalidMaturity { maturity })
    }
}

fn check_frequency(frequency: u32) -> Result<u32, InstrumentError> {
    if frequency >= 1 {
        Ok(frequency)
    } else {
        Err(InstrumentError::InvalidFrequency { frequency })
    }
}

fn check_schedule(maturity: f64, frequency: u32) -> Result<(), InstrumentError> {
    let payments = (maturity * f64::from(frequency)).ceil();
    if payments <= MAX_PAYMENTS {
        Ok(())
    } else {
        Err(InstrumentError::InvalidParameter {
            message: format!(
                "schedule of {} payments (T = {}, m = {}) exceeds {}",
                payments, maturity, frequency, MAX_PAYMENTS
            ),
        })
    }
}

fn check_face(face: f64) -> Result<f64, InstrumentError> {
    if face > 0.0 && face.is_finite() {
        Ok(face)
    } else {
        Err(InstrumentError::InvalidFace { face })
    }
}

fn check_coupon_rate(coupon_rate: f64) -> Result<f64, InstrumentError> {
    if coupon_rate >= 0.0 && coupon_rate.is_finite() {
        Ok(coupon_rate)
    } else {
        Err(InstrumentError::InvalidParameter {
            message: format!("coupon rate must be non-negative, got {}", coupon_rate),
        })
    }
}

fn check_yield(yield_rate: f64) -> Result<f64, InstrumentError> {
    if yield_rate.is_finite() {
        Ok(yield_rate)
    } else {
        Err(InstrumentError::InvalidParameter {
            message: format!("yield must be finite, got {}", yield_rate),
        })
    }
}

/// Sum of `t^power · c · e^(-y t)` over the cash flows.
fn discounted_moment(flows: &[(f64, f64)], yield_rate: f64, power: i32) -> f64 {
    flows
        .iter()
        .map(|&(t, amount)| t.powi(power) * amount * (-yield_rate * t).exp())
        .sum()
}

/// Coupon-paying bond.
///
/// # Examples
/// ```
/// use pricer_models::instruments::Bond;
///
/// let bond = Bond::new(2.0, 6.0, 2, 0.05).unwrap();
/// assert!((bond.price() - 101.76110252627663).abs() < 1e-10);
///
/// let quoted = Bond::from_price(2.0, 6.0, 2, 100.0, bond.price()).unwrap();
/// assert!((quoted.yield_rate() - 0.05).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BondFields"))]
pub struct Bond {
    maturity: f64,
    coupon_rate: f64,
    frequency: u32,
    face: f64,
    yield_rate: f64,
}

/// Unchecked field set; deserialised bonds pass through [`Bond::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BondFields {
    maturity: f64,
    coupon_rate: f64,
    frequency: u32,
    #[serde(default = "default_face")]
    face: f64,
    yield_rate: f64,
}

#[cfg(feature = "serde")]
fn default_face() -> f64 {
    DEFAULT_FACE
}

#[cfg(feature = "serde")]
impl TryFrom<BondFields> for Bond {
    type Error = InstrumentError;

    fn try_from(fields: BondFields) -> Result<Self, Self::Error> {
        Bond::new(fields.maturity, fields.coupon_rate, fields.frequency, fields.yield_rate)?
            .with_face(fields.face)
    }
}

impl Bond {
    /// Creates a bond with face value 100.
    ///
    /// # Arguments
    /// * `maturity` - Years to maturity (must be positive)
    /// * `coupon_rate` - Annual coupon in percent of face (e.g. `5.0`)
    /// * `frequency` - Coupons per year (at least 1)
    /// * `yield_rate` - Continuously compounded yield
    ///
    /// # Errors
    /// `InvalidMaturity`, `InvalidFrequency` or `InvalidParameter` for a
    /// negative coupon, a non-finite yield or more than [`MAX_PAYMENTS`]
    /// payments.
    pub fn new(
        maturity: f64,
        coupon_rate: f64,
        frequency: u32,
        yield_rate: f64,
    ) -> Result<Self, InstrumentError> {
        let maturity = check_maturity(maturity)?;
        let frequency = check_frequency(frequency)?;
        check_schedule(maturity, frequency)?;
        Ok(Self {
            maturity,
            coupon_rate: check_coupon_rate(coupon_rate)?,
            frequency,
            face: DEFAULT_FACE,
            yield_rate: check_yield(yield_rate)?,
        })
    }

    /// Sets the face value.
    ///
    /// # Errors
    /// `InvalidFace` if `face` is not strictly positive.
    pub fn with_face(mut self, face: f64) -> Result<Self, InstrumentError> {
        self.face = check_face(face)?;
        Ok(self)
    }

    /// Creates a bond whose yield reproduces `price`.
    ///
    /// Uses [`InversionConfig::yield_to_maturity`].
    pub fn from_price(
        maturity: f64,
        coupon_rate: f64,
        frequency: u32,
        face: f64,
        price: f64,
    ) -> Result<Self, InstrumentError> {
        Self::from_price_with(
            maturity,
            coupon_rate,
            frequency,
            face,
            price,
            &InversionConfig::yield_to_maturity(),
        )
    }

    /// Like [`Bond::from_price`] with explicit inversion settings.
    pub fn from_price_with(
        maturity: f64,
        coupon_rate: f64,
        frequency: u32,
        face: f64,
        price: f64,
        config: &InversionConfig,
    ) -> Result<Self, InstrumentError> {
        let mut bond =
            Self::new(maturity, coupon_rate, frequency, config.initial_guess)?.with_face(face)?;
        bond.set_price_with(price, config)?;
        Ok(bond)
    }

    /// Years to maturity.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Annual coupon in percent of face.
    #[inline]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupons per year.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Face value.
    #[inline]
    pub fn face(&self) -> f64 {
        self.face
    }

    /// Continuously compounded yield to maturity.
    #[inline]
    pub fn yield_rate(&self) -> f64 {
        self.yield_rate
    }

    /// Whether the bond pays no coupons.
    #[inline]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }

    /// Amount of one coupon payment.
    #[inline]
    pub fn coupon(&self) -> f64 {
        self.coupon_rate * self.face / (100.0 * f64::from(self.frequency))
    }

    /// Payment times in ascending order, ending at maturity.
    pub fn payment_times(&self) -> Vec<f64> {
        let step = 1.0 / f64::from(self.frequency);
        let mut times: Vec<f64> = (0u32..)
            .map(|k| self.maturity - f64::from(k) * step)
            .take_while(|&t| t > TIME_EPSILON)
            .collect();
        times.reverse();
        times
    }

    /// `(time, amount)` pairs; the final amount includes the face value.
    pub fn cashflows(&self) -> Vec<(f64, f64)> {
        let coupon = self.coupon();
        let mut flows: Vec<(f64, f64)> =
            self.payment_times().into_iter().map(|t| (t, coupon)).collect();
        if let Some(last) = flows.last_mut() {
            last.1 += self.face;
        }
        flows
    }

    /// Price at the current yield: `Σ c_i e^(-y t_i)`.
    pub fn price(&self) -> f64 {
        discounted_moment(&self.cashflows(), self.yield_rate, 0)
    }

    /// dB/dy.
    pub fn price_derivative(&self) -> f64 {
        -discounted_moment(&self.cashflows(), self.yield_rate, 1)
    }

    /// Macaulay duration `Σ t_i c_i e^(-y t_i) / B`.
    pub fn macaulay_duration(&self) -> f64 {
        let flows = self.cashflows();
        discounted_moment(&flows, self.yield_rate, 1) / discounted_moment(&flows, self.yield_rate, 0)
    }

    /// Modified duration `-B'/B`.
    ///
    /// Under continuous compounding this equals the Macaulay duration.
    pub fn duration(&self) -> f64 {
        self.macaulay_duration()
    }

    /// Dollar duration `-B'`.
    pub fn dollar_duration(&self) -> f64 {
        -self.price_derivative()
    }

    /// Convexity `B''/B`.
    pub fn convexity(&self) -> f64 {
        let flows = self.cashflows();
        discounted_moment(&flows, self.yield_rate, 2) / discounted_moment(&flows, self.yield_rate, 0)
    }

    /// Annual coupon over price: `R/100 · F/B`.
    pub fn current_yield(&self) -> f64 {
        self.coupon_rate / 100.0 * self.face / self.price()
    }

    fn require_zero_coupon(&self) -> Result<(), InstrumentError> {
        if self.is_zero_coupon() {
            Ok(())
        } else {
            Err(InstrumentError::NotZeroCoupon {
                coupon_rate: self.coupon_rate,
            })
        }
    }

    /// Bank discount yield `(F - B)/F · 360/(365 T)`.
    ///
    /// # Errors
    /// `NotZeroCoupon` for coupon-paying bonds.
    pub fn bank_discount_yield(&self) -> Result<f64, InstrumentError> {
        self.require_zero_coupon()?;
        let discount = self.face - self.price();
        Ok(discount / self.face * MONEY_MARKET_SCALE / self.maturity)
    }

    /// Money-market (CD-equivalent) yield `(F - B)/B · 360/(365 T)`.
    ///
    /// # Errors
    /// `NotZeroCoupon` for coupon-paying bonds.
    pub fn money_market_yield(&self) -> Result<f64, InstrumentError> {
        self.require_zero_coupon()?;
        let price = self.price();
        Ok((self.face - price) / price * MONEY_MARKET_SCALE / self.maturity)
    }

    /// Price by discounting each cash flow on `curve` instead of the yield.
    pub fn price_from_curve<C: YieldCurve<f64>>(&self, curve: &C) -> Result<f64, InstrumentError> {
        self.cashflows()
            .into_iter()
            .try_fold(0.0, |total, (t, amount)| -> Result<f64, InstrumentError> {
                Ok(total + curve.present_value(amount, t)?)
            })
    }

    /// Updates the maturity.
    pub fn set_maturity(&mut self, maturity: f64) -> Result<(), InstrumentError> {
        let maturity = check_maturity(maturity)?;
        check_schedule(maturity, self.frequency)?;
        self.maturity = maturity;
        Ok(())
    }

    /// Updates the coupon rate (percent).
    pub fn set_coupon_rate(&mut self, coupon_rate: f64) -> Result<(), InstrumentError> {
        self.coupon_rate = check_coupon_rate(coupon_rate)?;
        Ok(())
    }

    /// Updates the coupon frequency.
    pub fn set_frequency(&mut self, frequency: u32) -> Result<(), InstrumentError> {
        let frequency = check_frequency(frequency)?;
        check_schedule(self.maturity, frequency)?;
        self.frequency = frequency;
        Ok(())
    }

    /// Updates the face value.
    pub fn set_face(&mut self, face: f64) -> Result<(), InstrumentError> {
        self.face = check_face(face)?;
        Ok(())
    }

    /// Updates the yield.
    pub fn set_yield_rate(&mut self, yield_rate: f64) -> Result<(), InstrumentError> {
        self.yield_rate = check_yield(yield_rate)?;
        Ok(())
    }

    /// Re-implies the yield from `price`.
    ///
    /// On error the bond is left unchanged.
    pub fn set_price(&mut self, price: f64) -> Result<(), InstrumentError> {
        self.set_price_with(price, &InversionConfig::yield_to_maturity())
    }

    /// Like [`Bond::set_price`] with explicit inversion settings.
    ///
    /// Newton-Raphson on the analytic dB/dy from `config.initial_guess`,
    /// with bisection on `config.bracket()` as fallback.
    pub fn set_price_with(
        &mut self,
        price: f64,
        config: &InversionConfig,
    ) -> Result<(), InstrumentError> {
        if price <= 0.0 || !price.is_finite() {
            return Err(InstrumentError::InvalidParameter {
                message: format!("bond price must be positive, got {}", price),
            });
        }

        let flows = self.cashflows();
        let residual = |y: f64| discounted_moment(&flows, y, 0) - price;
        let derivative = |y: f64| -discounted_moment(&flows, y, 1);

        let yield_rate = RootFinder::new(config.solver)
            .find_root_with_derivative(
                residual,
                derivative,
                config.initial_guess,
                Some(config.bracket()),
            )
            .map_err(|err| {
                tracing::warn!(
                    price,
                    maturity = self.maturity,
                    coupon_rate = self.coupon_rate,
                    error = %err,
                    "yield to maturity inversion failed"
                );
                InstrumentError::YieldNotFound {
                    price,
                    reason: err.to_string(),
                }
            })?;

        self.yield_rate = yield_rate;
        Ok(())
    }
}
