use dioxus::prelude::*;

use crate::Screen;

#[derive(Props, Clone, PartialEq)]
pub struct ActionLinkProps {
    /// Screen to navigate to on click.
    #[props(optional)]
    pub to: Option<Screen>,

    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,

    #[props(optional)]
    pub title: Option<String>,

    pub children: Element,
}

/// An in-app link. Navigation goes through the `Signal<Screen>` context
/// instead of the browser location.
#[component]
pub fn ActionLink(props: ActionLinkProps) -> Element {
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        a {
            href: "#",
            title: props.title.clone().unwrap_or_default(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();

                if let Some(target) = &props.to {
                    active_screen.set(target.clone());
                }

                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
