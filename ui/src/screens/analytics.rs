use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::metric_card::MetricCard;
use crate::components::pico::Card;
use crate::format;

/// Visitor statistics from the visit counter.
#[component]
pub fn AnalyticsScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    let mut visits_resource = use_resource(move || async move {
        // visit_count reports 0 on counter failures, so errors here are
        // transport level only.
        let count = api::visit_count()
            .await
            .inspect_err(|e| dioxus_logger::tracing::warn!("Error fetching visit count: {e}"))
            .unwrap_or_default();
        app_state_mut.visits.set(Some(count));
        count
    });

    let is_loading = visits_resource.read().is_none();
    let total = match *visits_resource.read() {
        Some(count) => format::grouped(count),
        None => "...".to_string(),
    };

    rsx! {
        div {
            class: "list-row",
            hgroup {
                style: "margin: 0;",
                h3 { "📈 Analytics Dashboard" }
                p { "ChainExplorer usage statistics" }
            }
            button {
                disabled: is_loading,
                "aria-busy": if is_loading { "true" } else { "false" },
                onclick: move |_| visits_resource.restart(),
                "Refresh"
            }
        }
        div {
            class: "metric-grid",
            MetricCard {
                title: "Total Visits",
                value: total.clone(),
                icon: "👥",
                change: "Since launch",
            }
            MetricCard {
                title: "Page Views",
                value: total,
                icon: "👁",
                change: "All pages combined",
            }
            MetricCard {
                title: "Status",
                value: "Active",
                icon: "🟢",
                change: "Tracking enabled",
            }
        }
        Card {
            h4 { "How it works" }
            p { "Each app load increments an anonymous visit counter." }
            h4 { "Privacy" }
            p { "No personal data is collected. Only anonymous visit counts are tracked." }
        }
    }
}
