//! Short-lived notifications stacked in the bottom right corner.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::compat;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Info,
    Destructive,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    id: u64,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

/// Handle for pushing toasts, provided as context by `LoadedApp`.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new(toasts: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { toasts, next_id }
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Info);
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Destructive);
    }

    fn push(&mut self, title: String, description: String, kind: ToastKind) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            title,
            description,
            kind,
        });

        // owned by the root scope so it outlives the component that pushed it.
        let mut this = *self;
        spawn_forever(async move {
            compat::sleep(TOAST_LIFETIME).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts();

    rsx! {
        div {
            class: "toast-viewport",
            for toast in toasts.read().iter().cloned() {
                article {
                    key: "{toast.id}",
                    class: if toast.kind == ToastKind::Destructive { "toast toast-destructive" } else { "toast" },
                    role: "status",
                    onclick: move |_| toaster.dismiss(toast.id),
                    strong { "{toast.title}" }
                    if !toast.description.is_empty() {
                        p { "{toast.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    thread_local! {
        static OPEN_TOASTS: Cell<usize> = const { Cell::new(0) };
        static MOST_TOASTS: Cell<usize> = const { Cell::new(0) };
    }

    fn app() -> Element {
        let toasts = use_signal(Vec::new);
        let next_id = use_signal(|| 0);
        let toaster = use_context_provider(|| Toaster::new(toasts, next_id));
        let raiser_mounted = use_context_provider(|| Signal::new(true));

        let open = toaster.toasts().read().len();
        OPEN_TOASTS.with(|c| c.set(open));
        MOST_TOASTS.with(|c| c.set(c.get().max(open)));

        rsx! {
            if raiser_mounted() {
                Raiser {}
            }
        }
    }

    /// Pushes one toast and removes itself, like a screen navigated away from.
    #[component]
    fn Raiser() -> Element {
        let mut toaster = use_toaster();
        let mut mounted = use_context::<Signal<bool>>();
        use_hook(move || {
            toaster.info("Saved", "");
            mounted.set(false);
        });
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn toast_is_dismissed_after_its_component_unmounts() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + TOAST_LIFETIME * 2;
        while tokio::time::Instant::now() < deadline {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(500)) => {}
            }
            dom.render_immediate_to_vec();
        }

        assert_eq!(MOST_TOASTS.with(Cell::get), 1);
        assert_eq!(OPEN_TOASTS.with(Cell::get), 0);
    }
}
