use crate::fiat_currency::FiatCurrency;
use crate::price_providers::PriceProviderKind;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Whether balances and prices are also shown in a fiat currency.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum DisplayPreference {
    /// Native currency only. No price data is fetched or shown.
    NativeOnly,

    /// Fiat estimates are shown next to native amounts.
    FiatEnabled {
        /// The currency prices are quoted in.
        fiat: FiatCurrency,

        /// The service spot prices are read from.
        provider: PriceProviderKind,
    },
}

impl DisplayPreference {
    /// Creates a DisplayPreference instance from environment variables.
    ///
    /// # Environment Variables (case-insensitive for "true" or "false"):
    /// - `SHOW_FIAT`: "false" or "0" switches to native-only mode. Defaults to true.
    /// - `FIAT_CURRENCY`: "USD", "EUR", "GBP" or "JPY".
    /// - `PRICE_PROVIDER`: "coingecko" or "coinpaprika".
    pub fn from_env() -> Self {
        let show_fiat = env::var("SHOW_FIAT")
            .map(|val| !(val.eq_ignore_ascii_case("false") || val == "0"))
            .unwrap_or(true);

        if !show_fiat {
            return Self::NativeOnly;
        }

        let fiat = env::var("FIAT_CURRENCY")
            .ok()
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or_default();

        let provider = env::var("PRICE_PROVIDER")
            .ok()
            .and_then(|s| PriceProviderKind::from_str(&s).ok())
            .unwrap_or_default();

        Self::FiatEnabled { fiat, provider }
    }

    /// The fiat currency, or `None` in native-only mode.
    pub fn fiat(&self) -> Option<FiatCurrency> {
        match self {
            Self::NativeOnly => None,
            Self::FiatEnabled { fiat, .. } => Some(*fiat),
        }
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
