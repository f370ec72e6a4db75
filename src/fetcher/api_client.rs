use reqwest::Client;
use std::time::{Duration, Instant};
use crate::errors::{BotError, Result};
use rand; // 0.8

pub const DEFAULT_BASE_URL: &str = "https://api.pixelstarships.com";

const ITEM_DESIGN_PATH: &str = "ItemService/ListItemDesigns2?languageKey=en";

pub struct ApiClient {
    client: Client,
    base_url: String,
    last_request: Instant,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            last_request: Instant::now(),
        }
    }

    pub fn production() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    // Fetches the raw item design sheet. The service occasionally throttles,
    // so back off once before giving up.
    pub async fn fetch_item_design_sheet(&mut self) -> Result<String> {
        // Add some randomness to the delay to avoid synchronization
        let delay = Duration::from_millis(500 + (rand::random::<u64>() % 100));
        self.respect_rate_limit(delay).await;

        let url = format!("{}/{}", self.base_url, ITEM_DESIGN_PATH);
        println!("Fetching item designs from: {}", url);

        let mut response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            println!("Rate limit hit, waiting 5 seconds before retry...");
            tokio::time::sleep(Duration::from_secs(5)).await;
            response = self.client.get(&url).send().await?;
        }

        let status = response.status();
        println!("Sheet response status: {}", status);
        self.last_request = Instant::now();

        if !status.is_success() {
            return Err(BotError::ApiError(format!(
                "item design request failed with status {}",
                status
            )));
        }

        Ok(response.text().await?)
    }

    async fn respect_rate_limit(&self, delay: Duration) {
        let elapsed = self.last_request.elapsed();
        if elapsed < delay {
            tokio::time::sleep(delay - elapsed).await;
        }
    }
}
