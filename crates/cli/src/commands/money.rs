//! Money formatting and arithmetic.

use rust_decimal::Decimal;

use full_colombiano_core::{Currency, Locale, Money, MoneyError};

/// Format an amount for display.
///
/// # Errors
///
/// Returns an error if the amount is negative.
pub fn format(amount: Decimal, currency: Currency, locale: Locale) -> Result<String, MoneyError> {
    Ok(Money::new(amount, currency)?.format(locale))
}

/// Add amounts of one currency.
///
/// # Errors
///
/// Returns an error if any amount is negative or the total overflows.
pub fn sum(currency: Currency, amounts: &[Decimal]) -> Result<Money, MoneyError> {
    amounts.iter().try_fold(Money::zero(currency), |total, amount| {
        total.add(&Money::new(*amount, currency)?)
    })
}
