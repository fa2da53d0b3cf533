//! Anonymous visit counting through CountAPI.

use serde::Deserialize;

pub const DEFAULT_COUNTER_URL: &str = "https://api.countapi.xyz";

/// Counter namespace used when none is configured. Debug builds count
/// separately so local development does not inflate the public number.
pub fn default_counter_key() -> &'static str {
    if cfg!(debug_assertions) {
        "chainexplorer-dev"
    } else {
        "chainexplorer.app"
    }
}

#[derive(Deserialize, Debug)]
struct CounterResponse {
    #[serde(default)]
    value: Option<u64>,
}

pub struct VisitCounter {
    base_url: String,
    key: String,
}

impl VisitCounter {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            key: key.into(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{action}/{}/visits",
            self.base_url.trim_end_matches('/'),
            self.key
        )
    }

    /// Increments the counter and returns the new total.
    pub async fn hit(&self) -> Result<u64, reqwest::Error> {
        self.request("hit").await
    }

    /// Reads the counter without incrementing it.
    pub async fn count(&self) -> Result<u64, reqwest::Error> {
        self.request("get").await
    }

    async fn request(&self, action: &str) -> Result<u64, reqwest::Error> {
        let resp = reqwest::Client::new()
            .get(self.endpoint(action))
            .send()
            .await?
            .error_for_status()?
            .json::<CounterResponse>()
            .await?;
        Ok(resp.value.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_countapi_layout() {
        let counter = VisitCounter::new("https://api.countapi.xyz/", "chainexplorer.app");
        assert_eq!(
            counter.endpoint("hit"),
            "https://api.countapi.xyz/hit/chainexplorer.app/visits"
        );
        assert_eq!(
            counter.endpoint("get"),
            "https://api.countapi.xyz/get/chainexplorer.app/visits"
        );
    }
}
