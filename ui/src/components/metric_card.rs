use dioxus::prelude::*;

/// Direction of a change shown under a metric.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Trend {
    Up,
    Down,
}

/// One figure of the dashboard grid.
#[component]
pub fn MetricCard(
    title: String,
    value: String,
    #[props(optional)] icon: Option<&'static str>,
    #[props(optional)] change: Option<String>,
    #[props(optional)] trend: Option<Trend>,
) -> Element {
    let (change_class, arrow) = match trend {
        Some(Trend::Up) => ("metric-change metric-up", "▲ "),
        Some(Trend::Down) => ("metric-change metric-down", "▼ "),
        None => ("metric-change", ""),
    };

    rsx! {
        article {
            class: "metric-card",
            header {
                if let Some(icon) = icon {
                    span { class: "metric-icon", "{icon}" }
                }
                small { "{title}" }
            }
            div { class: "metric-value", "{value}" }
            if let Some(change) = change {
                small {
                    class: "{change_class}",
                    "{arrow}{change}"
                }
            }
        }
    }
}
