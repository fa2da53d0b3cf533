//! Price chart series and the time windows the dashboard offers.

use serde::Deserialize;
use serde::Serialize;

/// The time window of the dashboard price chart.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum TimeFilter {
    #[strum(serialize = "1h")]
    Hour,
    #[default]
    #[strum(serialize = "24h")]
    Day,
    #[strum(serialize = "7d")]
    Week,
    #[strum(serialize = "30d")]
    Month,
}

impl TimeFilter {
    /// Label used in the filter select and chart titles, e.g. `"7d"`.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// The `days` parameter of the market chart request. The hourly view is
    /// cut from the one day series.
    pub fn days(&self) -> u32 {
        match self {
            Self::Hour | Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// Thins a provider series down to the points shown on the chart.
    pub fn downsample(&self, points: &[PricePoint]) -> Vec<PricePoint> {
        match self {
            Self::Hour => last(points, 12),
            Self::Day => last(points, 24),
            Self::Week => last(&every_nth(points, points.len() / 24), 24),
            Self::Month => last(&every_nth(points, points.len() / 30), 30),
        }
    }
}

impl std::fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One sample of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix time in milliseconds.
    pub timestamp_ms: i64,
    pub price: f64,
}

fn last(points: &[PricePoint], n: usize) -> Vec<PricePoint> {
    points[points.len().saturating_sub(n)..].to_vec()
}

fn every_nth(points: &[PricePoint], step: usize) -> Vec<PricePoint> {
    points.iter().step_by(step.max(1)).copied().collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Builds the chart series: downsamples, pins the final point to the current
/// spot price when one is known and rounds prices to two decimals.
pub fn chart_series(
    raw: &[PricePoint],
    filter: TimeFilter,
    spot_price: Option<f64>,
) -> Vec<PricePoint> {
    let mut series = filter.downsample(raw);
    if let (Some(point), Some(spot)) = (series.last_mut(), spot_price) {
        point.price = spot;
    }
    for point in series.iter_mut() {
        point.price = round_cents(point.price);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn series(len: usize) -> Vec<PricePoint> {
        (0..len)
            .map(|i| PricePoint {
                timestamp_ms: i as i64 * 1000,
                price: i as f64,
            })
            .collect()
    }

    fn prices(points: &[PricePoint]) -> Vec<f64> {
        points.iter().map(|p| p.price).collect()
    }

    #[test]
    fn parses_labels() {
        assert_eq!(TimeFilter::from_str("1h").unwrap(), TimeFilter::Hour);
        assert_eq!(TimeFilter::from_str("30d").unwrap(), TimeFilter::Month);
        assert!(TimeFilter::from_str("1y").is_err());
        assert_eq!(TimeFilter::default().label(), "24h");
    }

    #[test]
    fn hour_and_day_keep_the_tail() {
        let raw = series(288);
        let hour = TimeFilter::Hour.downsample(&raw);
        assert_eq!(hour.len(), 12);
        assert_eq!(hour[0].price, 276.0);

        let day = TimeFilter::Day.downsample(&raw);
        assert_eq!(day.len(), 24);
        assert_eq!(day.last().unwrap().price, 287.0);
    }

    #[test]
    fn week_takes_every_nth_then_tail() {
        // 168 hourly points -> every 7th -> 24 points
        let week = TimeFilter::Week.downsample(&series(168));
        assert_eq!(week.len(), 24);
        assert_eq!(prices(&week[..3]), vec![0.0, 7.0, 14.0]);
    }

    #[test]
    fn month_with_few_points_does_not_divide_by_zero() {
        let month = TimeFilter::Month.downsample(&series(10));
        assert_eq!(month.len(), 10);
        assert!(TimeFilter::Month.downsample(&[]).is_empty());
    }

    #[test]
    fn chart_series_pins_spot_price_and_rounds() {
        let raw = vec![
            PricePoint {
                timestamp_ms: 0,
                price: 2301.456,
            },
            PricePoint {
                timestamp_ms: 1,
                price: 2302.0,
            },
        ];
        let out = chart_series(&raw, TimeFilter::Day, Some(2310.129));
        assert_eq!(prices(&out), vec![2301.46, 2310.13]);

        let out = chart_series(&raw, TimeFilter::Day, None);
        assert_eq!(prices(&out), vec![2301.46, 2302.0]);
    }
}
