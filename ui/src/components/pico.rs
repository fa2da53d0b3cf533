//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::compat;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum BadgeKind {
    #[default]
    Neutral,
    Success,
    Danger,
}

/// A small pill shaped label.
#[component]
pub fn Badge(#[props(default)] kind: BadgeKind, children: Element) -> Element {
    let class = match kind {
        BadgeKind::Neutral => "badge",
        BadgeKind::Success => "badge badge-success",
        BadgeKind::Danger => "badge badge-danger",
    };
    rsx! { span { class: "{class}", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

/// A compact button that copies `text_to_copy` to the clipboard and briefly
/// confirms it.
#[component]
pub fn CopyButton(text_to_copy: String) -> Element {
    let mut clipboard = compat::use_clipboard_writer();
    let mut copied = use_signal(|| false);

    rsx! {
        button {
            class: "secondary outline copy-button",
            title: "Copy to clipboard",
            onclick: move |evt| {
                evt.stop_propagation();
                clipboard.write(text_to_copy.clone());
                copied.set(true);
                spawn(async move {
                    compat::sleep(std::time::Duration::from_millis(1500)).await;
                    copied.set(false);
                });
            },
            if copied() { "✓" } else { "⧉" }
        }
    }
}

// A modal with no title bar that closes on backdrop click or Escape key.
#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    is_open: Signal<bool>,
    children: Element,
}

pub fn NoTitleModal(mut props: NoTitleModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                // keeps clicks on the content from reaching the backdrop.
                article {
                    onclick: |evt| evt.stop_propagation(),
                    {props.children}
                }
            }
        }
    }
}
