use dioxus::prelude::*;

use crate::components::toast::use_toaster;
use crate::components::toast::Toaster;

/// Turns failed fetches into a log line plus an error toast.
#[derive(Clone, Copy)]
pub struct FetchNotifier {
    toaster: Toaster,
}

impl FetchNotifier {
    /// Checks a result by reference without consuming it.
    /// - If `Ok`: returns `true`.
    /// - If `Err`: logs it, shows "Failed to fetch {what}" and returns `false`.
    pub fn check_result_ref<T, E: std::fmt::Display>(&mut self, what: &str, result: &Result<T, E>) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => {
                self.notify(what, e);
                false
            }
        }
    }

    fn notify(&mut self, what: &str, error: &dyn std::fmt::Display) {
        dioxus_logger::tracing::warn!("Error fetching {what}: {error}");
        self.toaster.error("Error", format!("Failed to fetch {what}"));
    }
}

pub fn use_fetch_notifier() -> FetchNotifier {
    FetchNotifier {
        toaster: use_toaster(),
    }
}
