// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// localStorage key holding the recent searches as JSON.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use api::search::RecentSearches;
    use dioxus::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Storage;
    use web_sys::Window;

    use super::RECENT_SEARCHES_KEY;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Writes to the browser clipboard.
    #[derive(Clone, Copy)]
    pub struct ClipboardWriter;

    impl ClipboardWriter {
        pub fn write(&mut self, text: String) {
            spawn(async move {
                if let Some(clipboard) = web_sys::window().map(|win: Window| win.navigator().clipboard()) {
                    if JsFuture::from(clipboard.write_text(&text)).await.is_err() {
                        dioxus_logger::tracing::warn!("clipboard write was rejected");
                    }
                }
            });
        }
    }

    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter
    }

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load_recent_searches() -> RecentSearches {
        local_storage()
            .and_then(|s| s.get_item(RECENT_SEARCHES_KEY).ok()?)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn store_recent_searches(searches: &RecentSearches) {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(searches) {
            Ok(json) => {
                if storage.set_item(RECENT_SEARCHES_KEY, &json).is_err() {
                    dioxus_logger::tracing::warn!("could not persist recent searches");
                }
            }
            Err(e) => dioxus_logger::tracing::warn!("could not encode recent searches: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use api::search::RecentSearches;
    use dioxus_clipboard::prelude::*;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Writes to the system clipboard.
    #[derive(Clone, Copy)]
    pub struct ClipboardWriter(UseClipboard);

    impl ClipboardWriter {
        pub fn write(&mut self, text: String) {
            if let Err(e) = self.0.set(text) {
                dioxus_logger::tracing::warn!("clipboard write failed: {e:?}");
            }
        }
    }

    /// Must be called from a component body, like any hook.
    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter(use_clipboard())
    }

    // searches only live for the session outside the browser.
    pub fn load_recent_searches() -> RecentSearches {
        RecentSearches::new()
    }

    pub fn store_recent_searches(_searches: &RecentSearches) {}
}
