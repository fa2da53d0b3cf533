use super::display_preference::DisplayPreference;
use crate::chain::Chain;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs the explorer starts with.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
    default_chain: Chain,
}

impl UserPrefs {
    /// Reads `DEFAULT_CHAIN` plus the display preference variables.
    pub fn from_env() -> Self {
        Self {
            display_preference: DisplayPreference::from_env(),
            default_chain: std::env::var("DEFAULT_CHAIN")
                .map(|id| Chain::from_id(&id))
                .unwrap_or_default(),
        }
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    pub fn default_chain(&self) -> Chain {
        self.default_chain
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
