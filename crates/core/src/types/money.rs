//! Type-safe money representation using decimal arithmetic.
//!
//! [`Money`] is an immutable value object: every operation borrows `self`
//! and returns a new value. Arithmetic and comparisons between different
//! currencies are rejected instead of silently converted.

use core::fmt;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors produced by [`Money`] construction and arithmetic.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is below zero.
    #[error("amount cannot be negative (got {0})")]
    Negative(Decimal),
    /// A multiplication factor is below zero.
    #[error("factor cannot be negative (got {0})")]
    NegativeFactor(Decimal),
    /// The operands are in different currencies.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: Currency,
        /// Currency of the right-hand operand.
        found: Currency,
    },
    /// The arithmetic result does not fit in a decimal.
    #[error("amount overflow")]
    Overflow,
    /// The currency code is not supported.
    #[error("unsupported currency: {0}")]
    UnknownCurrency(String),
    /// The locale tag is not supported.
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),
}

/// Currencies accepted by the marketplace (ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Colombian peso.
    #[default]
    Cop,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Number of decimal places used when rounding and formatting.
    pub const MINOR_UNITS: u32 = 2;

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cop => "COP",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COP" => Ok(Self::Cop),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(MoneyError::UnknownCurrency(s.to_owned())),
        }
    }
}

/// Locales supported by [`Money::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Spanish (Colombia). The marketplace default.
    #[default]
    #[serde(rename = "es-CO")]
    EsCo,
    /// English (United States).
    #[serde(rename = "en-US")]
    EnUs,
    /// Spanish (Spain).
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    /// BCP 47 tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EsCo => "es-CO",
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    const fn separators(self) -> (char, char) {
        match self {
            Self::EsCo | Self::EsEs => ('.', ','),
            Self::EnUs => (',', '.'),
        }
    }

    const fn symbol(self, currency: Currency) -> &'static str {
        match (self, currency) {
            (_, Currency::Eur) => "€",
            (Self::EsCo, Currency::Cop) | (Self::EnUs, Currency::Usd) => "$",
            (Self::EsCo | Self::EsEs, Currency::Usd) => "US$",
            (Self::EnUs, Currency::Cop) => "COL$",
            (Self::EsEs, Currency::Cop) => "COP",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "es-co" => Ok(Self::EsCo),
            "en-us" => Ok(Self::EnUs),
            "es-es" => Ok(Self::EsEs),
            _ => Err(MoneyError::UnknownLocale(s.to_owned())),
        }
    }
}

/// A non-negative amount of money in a single currency.
///
/// # Examples
///
/// ```
/// use full_colombiano_core::{Currency, Money};
/// use rust_decimal::Decimal;
///
/// let ten = Money::new(Decimal::from(10), Currency::Cop).unwrap();
/// let five = Money::new(Decimal::from(5), Currency::Cop).unwrap();
/// assert_eq!(ten.add(&five).unwrap(), Money::new(Decimal::from(15), Currency::Cop).unwrap());
///
/// let dollars = Money::new(Decimal::from(5), Currency::Usd).unwrap();
/// assert!(ten.add(&dollars).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<RawMoney> for Money {
    type Error = MoneyError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Self::new(raw.amount, raw.currency)
    }
}

impl Money {
    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` if `amount` is below zero.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self { amount, currency })
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The amount as a floating point number, for display-only consumers.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }

    /// Sum of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }

    /// Difference of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ and
    /// `MoneyError::Negative` if `other` is larger than `self`.
    pub fn subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }

    /// Scale the amount by a non-negative factor, rounding to minor units.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NegativeFactor` if `factor` is below zero.
    pub fn multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(MoneyError::NegativeFactor(factor));
        }
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?
            .round_dp_with_strategy(Currency::MINOR_UNITS, RoundingStrategy::MidpointAwayFromZero);
        Self::new(amount, self.currency)
    }

    /// Whether `self` is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn is_greater_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount > other.amount)
    }

    /// Whether `self` is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn is_less_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount < other.amount)
    }

    /// Format for display in the given locale.
    ///
    /// ```
    /// use full_colombiano_core::{Currency, Locale, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::new(Decimal::new(123_450, 2), Currency::Cop).unwrap();
    /// assert_eq!(price.format(Locale::EsCo), "$ 1.234,50");
    /// ```
    #[must_use]
    pub fn format(&self, locale: Locale) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(Currency::MINOR_UNITS, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{rounded:.2}");
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let (group_sep, decimal_sep) = locale.separators();
        let number = format!("{}{decimal_sep}{fraction}", group_thousands(integer, group_sep));
        let symbol = locale.symbol(self.currency);

        match locale {
            Locale::EsCo => format!("{symbol} {number}"),
            Locale::EnUs => format!("{symbol}{number}"),
            Locale::EsEs => format!("{number} {symbol}"),
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Locale::default()))
    }
}

/// Insert `sep` between every group of three integer digits.
fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
