use std::time::Duration;

use api::search::classify;
use api::search::RecentSearches;
use api::search::SearchTarget;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::components::toast::use_toaster;
use crate::components::toast::Toaster;
use crate::Screen;

const BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Where a submitted query leads.
#[derive(Debug, Clone, PartialEq)]
enum SearchOutcome {
    Open(Screen),
    Notice {
        title: &'static str,
        description: &'static str,
    },
    Invalid,
}

/// Records a non-blank query in `recent`, whatever it turns out to be,
/// then resolves it.
fn submit(recent: &mut RecentSearches, query: &str) -> Option<SearchOutcome> {
    let target = classify(query)?;
    recent.push(query);

    Some(match target {
        SearchTarget::Block(number) => SearchOutcome::Open(Screen::Block(number)),
        SearchTarget::Transaction(hash) => SearchOutcome::Open(Screen::Transaction(hash)),
        SearchTarget::Address(address) => SearchOutcome::Open(Screen::Address(Some(address))),
        SearchTarget::Ens(_) => SearchOutcome::Notice {
            title: "ENS Support Coming Soon",
            description: "ENS domain resolution will be available in a future update",
        },
        SearchTarget::Invalid => SearchOutcome::Invalid,
    })
}

fn search(
    query: &str,
    mut app_state_mut: AppStateMut,
    mut active_screen: Signal<Screen>,
    mut toaster: Toaster,
) {
    let Some(outcome) = submit(&mut app_state_mut.recent_searches.write(), query) else {
        return;
    };
    compat::store_recent_searches(&app_state_mut.recent_searches.peek());

    match outcome {
        SearchOutcome::Open(screen) => active_screen.set(screen),
        SearchOutcome::Notice { title, description } => toaster.info(title, description),
        SearchOutcome::Invalid => toaster.error(
            "Invalid search",
            "Please enter a valid block number, transaction hash, or address",
        ),
    }
}

/// Search box for blocks, transactions and addresses with recent searches
/// as suggestions.
#[component]
pub fn SearchBar() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let active_screen = use_context::<Signal<Screen>>();
    let toaster = use_toaster();

    let mut query = use_signal(String::new);
    let mut show_suggestions = use_signal(|| false);

    let suggestions = use_memo(move || {
        let recent = app_state_mut.recent_searches.read();
        let q = query.read();
        if q.trim().is_empty() {
            recent.iter().cloned().collect::<Vec<_>>()
        } else {
            recent.matching(q.trim())
        }
    });

    rsx! {
        form {
            class: "search-bar",
            onsubmit: move |evt| {
                evt.prevent_default();
                show_suggestions.set(false);
                let q = query.read().trim().to_string();
                search(&q, app_state_mut, active_screen, toaster);
            },
            div {
                role: "group",
                input {
                    r#type: "search",
                    placeholder: "Search by block number, transaction hash, address or ENS name",
                    value: "{query}",
                    oninput: move |event| {
                        query.set(event.value());
                        show_suggestions.set(true);
                    },
                    onfocus: move |_| show_suggestions.set(true),
                    // late enough for a click on a suggestion to land first.
                    onblur: move |_| {
                        spawn(async move {
                            compat::sleep(BLUR_HIDE_DELAY).await;
                            show_suggestions.set(false);
                        });
                    },
                }
                button { r#type: "submit", "Search" }
            }
            if show_suggestions() && !suggestions.read().is_empty() {
                ul {
                    class: "search-suggestions",
                    li { small { "Recent searches" } }
                    for (label, suggestion) in suggestions.read().iter().map(|s| (s.clone(), s.clone())) {
                        li {
                            key: "{label}",
                            a {
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    show_suggestions.set(false);
                                    query.set(suggestion.clone());
                                    search(&suggestion, app_state_mut, active_screen, toaster);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::Address;

    use super::*;

    const ADDR: &str = "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5";

    #[test]
    fn every_submitted_query_is_recorded() {
        let mut recent = RecentSearches::new();

        assert_eq!(submit(&mut recent, "hello"), Some(SearchOutcome::Invalid));
        assert!(matches!(
            submit(&mut recent, "vitalik.eth"),
            Some(SearchOutcome::Notice {
                title: "ENS Support Coming Soon",
                ..
            })
        ));
        assert_eq!(
            submit(&mut recent, " 42 "),
            Some(SearchOutcome::Open(Screen::Block(42)))
        );

        let recorded: Vec<&String> = recent.iter().collect();
        assert_eq!(recorded, vec!["42", "vitalik.eth", "hello"]);
    }

    #[test]
    fn blank_query_is_neither_recorded_nor_resolved() {
        let mut recent = RecentSearches::new();
        assert_eq!(submit(&mut recent, "   "), None);
        assert!(recent.is_empty());
    }

    #[test]
    fn address_opens_the_address_screen() {
        let mut recent = RecentSearches::new();
        let address: Address = ADDR.parse().unwrap();
        assert_eq!(
            submit(&mut recent, ADDR),
            Some(SearchOutcome::Open(Screen::Address(Some(address))))
        );
    }
}
