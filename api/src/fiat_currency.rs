//! Defines the fiat currencies prices can be quoted in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency supported by the price providers, with its formatting rules.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl FiatCurrency {
    /// Returns the number of decimal digits used by the currency.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
        }
    }

    /// Returns the ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The lowercase code price APIs expect in `vs_currencies` style parameters.
    pub fn api_code(&self) -> String {
        self.code().to_ascii_lowercase()
    }
}
