//! Monetary amounts with display formatting.
//!
//! Order totals are stored as `NUMERIC` next to an ISO 4217 currency code.
//! [`Money::format`] produces the text shown in emails (`$1,234.50`).

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Money`] value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The currency code is not three ASCII letters.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// An amount in a given currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// Upper-case ISO 4217 currency code.
    pub currency: String,
}

impl Money {
    /// Create a new amount, normalising the currency code to upper case.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidCurrency`] unless `currency` is three ASCII letters.
    pub fn new(amount: Decimal, currency: &str) -> Result<Self, MoneyError> {
        let code = currency.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MoneyError::InvalidCurrency(currency.to_string()));
        }
        Ok(Self {
            amount,
            currency: code.to_ascii_uppercase(),
        })
    }

    /// Number of minor-unit digits shown for this currency.
    #[must_use]
    pub fn minor_digits(&self) -> u32 {
        match self.currency.as_str() {
            "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
            _ => 2,
        }
    }

    /// Currency symbol, if the currency has a well-known one.
    #[must_use]
    pub fn symbol(&self) -> Option<&'static str> {
        match self.currency.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" | "SGD" | "HKD" | "MXN" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" | "CNY" => Some("¥"),
            "INR" => Some("₹"),
            "KRW" => Some("₩"),
            "VND" => Some("₫"),
            _ => None,
        }
    }

    /// Format for display, e.g. `$1,234.50`, `-€3.00`, or `CHF 12.00`.
    #[must_use]
    pub fn format(&self) -> String {
        let digits = self.minor_digits();
        let rounded = self
            .amount
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.*}", digits as usize, rounded.abs());

        let (whole, fraction) = plain
            .split_once('.')
            .map_or((plain.as_str(), None), |(w, f)| (w, Some(f)));
        let mut number = group_thousands(whole);
        if let Some(fraction) = fraction {
            number.push('.');
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        match self.symbol() {
            Some(symbol) => format!("{sign}{symbol}{number}"),
            None => format!("{sign}{} {number}", self.currency),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Insert `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
