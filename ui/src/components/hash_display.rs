use dioxus::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::pico::CopyButton;
use crate::components::pico::NoTitleModal;
use crate::format::abbreviate;
use crate::Screen;

/// An abbreviated hash or address with a copy button.
///
/// With `to` set the text links to that screen. Otherwise clicking it opens
/// a dialog with the full value.
#[component]
pub fn HashDisplay(
    value: String,
    #[props(default = 10)] head: usize,
    #[props(default = 8)] tail: usize,
    #[props(optional)] to: Option<Screen>,
) -> Element {
    let mut is_modal_open = use_signal(|| false);
    let abbreviated = abbreviate(&value, head, tail);

    rsx! {
        NoTitleModal {
            is_open: is_modal_open,
            div {
                style: "display: flex; flex-direction: column; align-items: center; text-align: center;",
                code {
                    style: "text-align: left; word-break: break-all; padding: 1rem; width: 100%; margin-bottom: 1rem;",
                    "{value}"
                }
                div {
                    style: "display: flex; justify-content: center; gap: 0.5rem;",
                    CopyButton { text_to_copy: value.clone() }
                    button {
                        class: "secondary",
                        onclick: move |_| is_modal_open.set(false),
                        "Close"
                    }
                }
            }
        }
        span {
            class: "hash-display",
            if let Some(screen) = to {
                ActionLink {
                    to: screen,
                    title: value.clone(),
                    code { "{abbreviated}" }
                }
            } else {
                code {
                    style: "cursor: pointer;",
                    title: "Click to view the full value",
                    onclick: move |_| is_modal_open.set(true),
                    "{abbreviated}"
                }
            }
            CopyButton { text_to_copy: value.clone() }
        }
    }
}

/// A labelled row for detail screens.
#[component]
pub fn DetailRow(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "detail-row",
            strong { "{label}" }
            div { {children} }
        }
    }
}
