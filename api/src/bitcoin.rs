//! Bitcoin chain height from the Blockstream Esplora API.

/// Reported when Blockstream cannot be reached.
pub const FALLBACK_BLOCK_HEIGHT: u64 = 870_000;

pub const DEFAULT_BLOCKSTREAM_URL: &str = "https://blockstream.info/api";

/// Returns the current tip height, or [`FALLBACK_BLOCK_HEIGHT`] if the request
/// fails for any reason.
pub async fn fetch_block_height(base_url: &str) -> u64 {
    match try_fetch_block_height(base_url).await {
        Ok(height) => height,
        Err(e) => {
            dioxus_logger::tracing::warn!("Error fetching Bitcoin block height: {e}");
            FALLBACK_BLOCK_HEIGHT
        }
    }
}

async fn try_fetch_block_height(base_url: &str) -> Result<u64, reqwest::Error> {
    let url = format!("{}/blocks/tip/height", base_url.trim_end_matches('/'));
    reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<u64>()
        .await
}
