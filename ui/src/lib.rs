// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod format;
pub mod hooks;
mod screens;

use alloy_primitives::Address;
use alloy_primitives::B256;
use api::prefs::user_prefs::UserPrefs;
use api::search::RecentSearches;
use app_state::AppState;
use app_state_mut::AppStateMut;
use app_state_mut::Theme;
use components::footer::Footer;
use components::navigation::Navigation;
use components::pico::Container;
use components::toast::ToastViewport;
use components::toast::Toaster;
use screens::address::AddressScreen;
use screens::analytics::AnalyticsScreen;
use screens::block::BlockScreen;
use screens::dashboard::DashboardScreen;
use screens::transaction::TransactionScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, PartialEq, Debug, Default)]
enum Screen {
    #[default]
    Dashboard,
    Block(u64),
    Transaction(B256),
    /// `None` shows only the address search box.
    Address(Option<Address>),
    Analytics,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Block(_) => "Block",
            Screen::Transaction(_) => "Transaction",
            Screen::Address(_) => "Address",
            Screen::Analytics => "Analytics",
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        background-color: var(--pico-background-color);
        color: var(--pico-color);
    }
    .app-main-container > main { flex: 1; }

    .app-header nav { flex-wrap: wrap; }
    .app-header .brand { font-size: 1.25rem; }
    .app-header select { margin-bottom: 0; }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        border-bottom: 3px solid var(--pico-primary);
        border-radius: 0;
    }
    .tab-menu a:not(.active-tab) { color: var(--pico-muted-color); }

    .content { padding-bottom: 2rem; }

    .metric-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .metric-card { margin: 0; padding: 1rem; }
    .metric-card header { margin: -1rem -1rem 0.5rem -1rem; padding: 0.5rem 1rem; display: flex; gap: 0.5rem; }
    .metric-value { font-size: 1.4rem; font-weight: bold; }
    .metric-up { color: var(--pico-ins-color); }
    .metric-down { color: var(--pico-del-color); }

    .two-column { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }

    .chart svg { width: 100%; height: 200px; }
    .chart-axis { display: flex; justify-content: space-between; color: var(--pico-muted-color); }

    .search-bar { position: relative; margin-bottom: 1rem; }
    .search-suggestions {
        position: absolute; z-index: 10; left: 0; right: 0; top: 100%;
        list-style: none; margin: 0; padding: 0.5rem 1rem;
        background: var(--pico-card-background-color);
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
    }
    .search-suggestions li { list-style: none; }

    .list-row { display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color); flex-wrap: wrap; }
    .detail-row { display: flex; justify-content: space-between; align-items: center; padding: 0.4rem 0; flex-wrap: wrap; gap: 0.5rem 1rem; border-bottom: 1px solid var(--pico-muted-border-color); }
    .detail-row > div { word-break: break-all; text-align: right; }

    .hash-display { display: inline-flex; align-items: center; gap: 0.25rem; }
    .copy-button { padding: 0 0.4rem; margin: 0; font-size: 0.8rem; }

    .badge { display: inline-block; padding: 0.1rem 0.6rem; border-radius: 1rem; font-size: 0.8rem; background: var(--pico-muted-border-color); }
    .badge-success { background: var(--pico-ins-color); color: #fff; }
    .badge-danger { background: var(--pico-del-color); color: #fff; }

    .empty-state {
        display: flex; flex-direction: column; align-items: center; justify-content: center;
        padding: 2rem; text-align: center; color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        margin: 1rem 0;
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 1rem; opacity: 0.8; }

    .toast-viewport { position: fixed; right: 1rem; bottom: 1rem; z-index: 1000; display: flex; flex-direction: column; gap: 0.5rem; max-width: 360px; }
    .toast { margin: 0; padding: 0.75rem 1rem; cursor: pointer; box-shadow: var(--pico-card-box-shadow); }
    .toast p { margin: 0.25rem 0 0 0; font-size: 0.9rem; }
    .toast-destructive { border-left: 4px solid var(--pico-del-color); }

    .app-footer { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 0.5rem; padding: 1rem; color: var(--pico-muted-color); border-top: 1px solid var(--pico-muted-border-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "ChainExplorer" }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        // call the server apis concurrently
        let (prefs_result, visits_result) =
            tokio::join!(api::get_user_prefs(), api::record_visit());

        let user_prefs = match prefs_result {
            Ok(p) => p,
            Err(e) => return Err(e),
        };
        let visits = visits_result.unwrap_or_default();

        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);

        Ok((user_prefs, visits))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, visits))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*prefs),
                    user_prefs: *prefs,
                    visits: *visits,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState, user_prefs: UserPrefs, visits: u64) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let chain = use_signal(|| user_prefs.default_chain());
    let mut recent_searches = use_signal(RecentSearches::new);
    let theme = use_signal(Theme::default);
    let visits = use_signal(|| Some(visits));
    let api_notice_shown = use_signal(|| false);

    use_context_provider(|| AppStateMut {
        chain,
        recent_searches,
        theme,
        visits,
        api_notice_shown,
    });

    // browser storage is only reachable after hydration.
    use_effect(move || {
        recent_searches.set(compat::load_recent_searches());
    });

    let toasts = use_signal(Vec::new);
    let next_toast_id = use_signal(|| 0);
    use_context_provider(|| Toaster::new(toasts, next_toast_id));

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            "data-theme": theme().attr(),
            Container {
                Navigation {}
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::Block(number) => rsx! {
                            BlockScreen {
                                key: "{number}",
                                number,
                            }
                        },
                        Screen::Transaction(hash) => rsx! {
                            TransactionScreen {
                                key: "{hash}",
                                hash,
                            }
                        },
                        Screen::Address(address) => {
                            let key = format!("{address:?}");
                            rsx! {
                                AddressScreen {
                                    key: "{key}",
                                    address,
                                }
                            }
                        }
                        Screen::Analytics => rsx! {
                            AnalyticsScreen {}
                        },
                    }
                }
            }
            Footer {}
            ToastViewport {}
        }
    }
}
