//! Provides a self-contained type for representing fiat prices and values.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;

/// A monetary value in a specific fiat currency.
///
/// The amount is stored in the currency's smallest unit (e.g. cents for USD)
/// so values coming back from the price APIs as floats are rounded exactly
/// once, on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    /// Returns the raw amount in the currency's smallest unit.
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    /// Creates a `FiatAmount` from a float as returned by a price API,
    /// rounding to the nearest minor unit.
    ///
    /// ```
    /// # use api::fiat_amount::FiatAmount;
    /// # use api::fiat_currency::FiatCurrency;
    /// let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
    /// assert_eq!(amount.as_minor_units(), 12346);
    /// ```
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Formats the amount with its currency symbol and thousands separators,
    /// e.g. "$2,247.82".
    pub fn to_string_with_symbol(&self) -> String {
        let plain = self.to_string();
        let (sign, digits) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (digits, None),
        };
        let grouped = group_thousands(major);
        match minor {
            Some(minor) => format!("{sign}{}{grouped}.{minor}", self.currency.symbol()),
            None => format!("{sign}{}{grouped}", self.currency.symbol()),
        }
    }
}

/// Inserts `,` between every group of three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats the amount as a plain numeric string, e.g. "25.34".
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_i64.pow(decimals as u32);
        let major_units = self.amount.abs() / divisor;
        let minor_units = self.amount.abs() % divisor;
        let sign = if self.amount < 0 { "-" } else { "" };

        write!(
            f,
            "{sign}{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_floats_to_minor_units() {
        let amount = FiatAmount::new_from_float(2247.826, FiatCurrency::USD);
        assert_eq!(amount.as_minor_units(), 224783);
        assert_eq!(amount.to_string(), "2247.83");

        let yen = FiatAmount::new_from_float(351234.6, FiatCurrency::JPY);
        assert_eq!(yen.as_minor_units(), 351235);
        assert_eq!(yen.to_string(), "351235");
    }

    #[test]
    fn small_negative_amounts_keep_their_sign() {
        let amount = FiatAmount::new_from_float(-0.049, FiatCurrency::USD);
        assert_eq!(amount.to_string(), "-0.05");
        assert_eq!(amount.to_string_with_symbol(), "-$0.05");
    }

    #[test]
    fn symbol_format_groups_thousands() {
        let amount = FiatAmount::new_from_float(1_234_567.89, FiatCurrency::USD);
        assert_eq!(amount.to_string_with_symbol(), "$1,234,567.89");

        let small = FiatAmount::new_from_float(0.99, FiatCurrency::EUR);
        assert_eq!(small.to_string_with_symbol(), "€0.99");

        let yen = FiatAmount::new_from_float(1000.0, FiatCurrency::JPY);
        assert_eq!(yen.to_string_with_symbol(), "¥1,000");
    }

    #[test]
    fn group_thousands_edges() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("7"), "7");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
    }
}
