use api::chain::Chain;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Theme;
use crate::Screen;

/// Top level tabs.
const TABS: [Screen; 3] = [Screen::Dashboard, Screen::Address(None), Screen::Analytics];

/// True when `active` belongs to the section `tab` opens.
fn is_active_tab(active: &Screen, tab: &Screen) -> bool {
    match (active, tab) {
        (Screen::Block(_) | Screen::Transaction(_), Screen::Dashboard) => true,
        (Screen::Address(_), Screen::Address(_)) => true,
        (active, tab) => active == tab,
    }
}

/// The navigation tabs.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        ul {
            class: "tab-menu",
            for (name, active, tab) in TABS
                .into_iter()
                .map(|tab| (tab.name(), is_active_tab(&active_screen.read(), &tab), tab))
            {
                li {
                    a {
                        href: "#",
                        class: if active { "active-tab" } else { "" },
                        "aria-current": if active { "page" } else { "false" },
                        onclick: move |event| {
                            event.prevent_default();
                            active_screen.set(tab.clone());
                        },
                        "{name}"
                    }
                }
            }
        }
    }
}

/// Network picker. Changing it refetches whatever the current screen shows.
#[component]
fn NetworkSelector() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let selected = (app_state_mut.chain)();

    rsx! {
        select {
            "aria-label": "Network",
            onchange: move |evt| {
                let chain = Chain::from_id(&evt.value());
                dioxus_logger::tracing::info!("network changed to {chain}");
                app_state_mut.chain.set(chain);
            },
            for chain in Chain::iter() {
                option {
                    value: "{chain.id()}",
                    selected: chain == selected,
                    "{chain.name()}"
                }
            }
        }
    }
}

#[component]
pub fn Navigation() -> Element {
    let active_screen = use_context::<Signal<Screen>>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let theme = (app_state_mut.theme)();
    let theme_icon = match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    rsx! {
        header {
            class: "app-header",
            nav {
                ul {
                    li {
                        strong { class: "brand", "⛓ ChainExplorer" }
                    }
                }
                Tabs { active_screen }
                ul {
                    li { NetworkSelector {} }
                    li {
                        button {
                            class: "secondary outline",
                            title: "Toggle theme",
                            onclick: move |_| app_state_mut.theme.set(theme.toggled()),
                            "{theme_icon}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    #[test]
    fn detail_screens_highlight_their_section() {
        assert!(is_active_tab(&Screen::Block(1), &Screen::Dashboard));
        assert!(is_active_tab(
            &Screen::Transaction(B256::ZERO),
            &Screen::Dashboard
        ));
        assert!(is_active_tab(
            &Screen::Address(Some(Default::default())),
            &Screen::Address(None)
        ));
        assert!(!is_active_tab(&Screen::Analytics, &Screen::Dashboard));
    }
}
