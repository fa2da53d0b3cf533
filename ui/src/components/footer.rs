use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::format::grouped;

/// Page footer with the visitor counter.
#[component]
pub fn Footer() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let visits = (app_state_mut.visits)().unwrap_or(0);

    rsx! {
        footer {
            class: "app-footer",
            small { "ChainExplorer. Data from Alchemy, Blockstream and CoinGecko." }
            small {
                title: "Total visits",
                "👁 {grouped(visits)} visitors"
            }
        }
    }
}
