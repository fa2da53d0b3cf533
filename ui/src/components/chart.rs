//! Minimal SVG charts for the dashboard.

use dioxus::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 200.0;
const BAR_GAP: f64 = 4.0;

/// Maps a series onto a `width` x `height` box, first value at the left
/// edge and the largest value at the top. A flat series sits mid height.
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let Some((min, max)) = bounds(values) else {
        return vec![];
    };
    let range = max - min;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if range > 0.0 {
                height - (v - min) / range * height
            } else {
                height / 2.0
            };
            (i as f64 * step, y)
        })
        .collect()
}

/// `points` attribute of an SVG polyline.
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars scaled against the largest value, bottom aligned.
pub fn bar_rects(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return vec![];
    }
    let max = values.iter().copied().fold(0.0, f64::max);
    let slot = width / values.len() as f64;
    let bar_width = (slot - gap).max(1.0);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = if max > 0.0 { v.max(0.0) / max * height } else { 0.0 };
            Bar {
                x: i as f64 * slot + gap / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
}

/// A line chart with the lowest and highest value and the end labels.
#[component]
pub fn LineChart(values: Vec<f64>, first_label: String, last_label: String) -> Element {
    let points = polyline_attr(&line_points(&values, VIEW_WIDTH, VIEW_HEIGHT));
    let (low, high) = bounds(&values).unwrap_or_default();

    rsx! {
        figure {
            class: "chart",
            svg {
                "viewBox": "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                "preserveAspectRatio": "none",
                polyline {
                    "points": "{points}",
                    "fill": "none",
                    "stroke": "var(--pico-primary)",
                    "stroke-width": "2",
                    "vector-effect": "non-scaling-stroke",
                }
            }
            figcaption {
                class: "chart-axis",
                small { "{first_label}" }
                small { "low {low:.2} / high {high:.2}" }
                small { "{last_label}" }
            }
        }
    }
}

/// A bar chart with one label per bar.
#[component]
pub fn BarChart(values: Vec<f64>, labels: Vec<String>) -> Element {
    let bars = bar_rects(&values, VIEW_WIDTH, VIEW_HEIGHT, BAR_GAP);
    let tips: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}: {v}", labels.get(i).map(String::as_str).unwrap_or_default()))
        .collect();

    rsx! {
        figure {
            class: "chart",
            svg {
                "viewBox": "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                "preserveAspectRatio": "none",
                for (i, (bar, tip)) in bars.iter().zip(tips.iter()).enumerate() {
                    rect {
                        key: "{i}",
                        "x": format!("{:.1}", bar.x),
                        "y": format!("{:.1}", bar.y),
                        "width": format!("{:.1}", bar.width),
                        "height": format!("{:.1}", bar.height),
                        "fill": "var(--pico-primary)",
                        title { "{tip}" }
                    }
                }
            }
            figcaption {
                class: "chart-axis",
                for label in labels.iter() {
                    small { "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_spans_the_box() {
        let pts = line_points(&[10.0, 20.0, 15.0], 100.0, 50.0);
        assert_eq!(pts, vec![(0.0, 50.0), (50.0, 0.0), (100.0, 25.0)]);
        assert_eq!(polyline_attr(&pts), "0.0,50.0 50.0,0.0 100.0,25.0");
    }

    #[test]
    fn flat_and_empty_lines() {
        assert!(line_points(&[], 100.0, 50.0).is_empty());
        assert_eq!(line_points(&[3.0, 3.0], 100.0, 50.0), vec![(0.0, 25.0), (100.0, 25.0)]);
        assert_eq!(line_points(&[7.0], 100.0, 50.0), vec![(0.0, 25.0)]);
    }

    #[test]
    fn bars_scale_to_the_tallest() {
        let bars = bar_rects(&[50.0, 100.0, 0.0], 300.0, 80.0, 4.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 80.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 40.0);
        assert_eq!(bars[2].height, 0.0);
        assert_eq!(bars[0].width, 96.0);
        assert_eq!(bars[2].x, 202.0);
    }

    #[test]
    fn all_zero_bars_are_flat() {
        let bars = bar_rects(&[0.0, 0.0], 100.0, 80.0, 4.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 80.0));
    }
}
