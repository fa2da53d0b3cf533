use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub user_prefs: UserPrefs,
}

/// Settings fixed for the lifetime of the app.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(user_prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { user_prefs }))
    }
}
