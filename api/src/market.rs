//! Market statistics for a chain's native asset.

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;

pub const NOT_AVAILABLE: &str = "N/A";

/// Market figures quoted in `fiat`. Any field the provider omits is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketData {
    pub fiat: FiatCurrency,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    /// In coins, not fiat.
    pub total_supply: Option<f64>,
    /// Percent.
    pub price_change_24h: Option<f64>,
}

impl MarketData {
    /// e.g. `$412.3B`
    pub fn market_cap_label(&self) -> String {
        self.billions(self.market_cap)
    }

    pub fn volume_24h_label(&self) -> String {
        self.billions(self.volume_24h)
    }

    /// e.g. `120.4M`
    pub fn total_supply_label(&self) -> String {
        match self.total_supply {
            Some(v) => format!("{:.1}M", v / 1e6),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// e.g. `-1.27%`
    pub fn price_change_label(&self) -> String {
        match self.price_change_24h {
            Some(v) => format!("{v:.2}%"),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// `None` when the change is unknown.
    pub fn is_positive_change(&self) -> Option<bool> {
        self.price_change_24h.map(|v| v >= 0.0)
    }

    fn billions(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{}{:.1}B", self.fiat.symbol(), v / 1e9),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_values() {
        let data = MarketData {
            fiat: FiatCurrency::USD,
            market_cap: Some(412_345_000_000.0),
            volume_24h: Some(18_960_000_000.0),
            total_supply: Some(120_430_000.0),
            price_change_24h: Some(-1.2666),
        };
        assert_eq!(data.market_cap_label(), "$412.3B");
        assert_eq!(data.volume_24h_label(), "$19.0B");
        assert_eq!(data.total_supply_label(), "120.4M");
        assert_eq!(data.price_change_label(), "-1.27%");
        assert_eq!(data.is_positive_change(), Some(false));
    }

    #[test]
    fn missing_values_are_not_available() {
        let data = MarketData {
            fiat: FiatCurrency::EUR,
            ..Default::default()
        };
        assert_eq!(data.market_cap_label(), NOT_AVAILABLE);
        assert_eq!(data.total_supply_label(), NOT_AVAILABLE);
        assert_eq!(data.price_change_label(), NOT_AVAILABLE);
        assert_eq!(data.is_positive_change(), None);
    }

    #[test]
    fn uses_fiat_symbol() {
        let data = MarketData {
            fiat: FiatCurrency::EUR,
            market_cap: Some(2.5e9),
            ..Default::default()
        };
        assert_eq!(data.market_cap_label(), "€2.5B");
    }
}
