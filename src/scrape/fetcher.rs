use anyhow::{anyhow, Result};

/// Rendering proxy endpoint. DexScreener's table is drawn client-side, so
/// the page has to go through a service that executes the scripts first.
const SCRAPERAPI_ENDPOINT: &str = "https://api.scraperapi.com";

/// Fetches rendered HTML through ScraperAPI.
///
/// No retry here: a failed fetch is fatal to the current cycle and the next
/// scheduled cycle is the retry.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    api_key: String,
}

impl PageFetcher {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    pub async fn fetch_rendered_page(&self, target_url: &str) -> Result<String> {
        let response = self
            .client
            .get(SCRAPERAPI_ENDPOINT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("url", target_url),
                ("render", "true"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("ScraperAPI request failed: {}", response.status()));
        }

        Ok(response.text().await?)
    }
}
