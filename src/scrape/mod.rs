pub mod extractor;
pub mod fetcher;

pub use extractor::{extract_tokens, DEXSCREENER_ORIGIN};
pub use fetcher::PageFetcher;

use crate::config::Config;
use crate::storage::SnapshotStore;
use crate::types::TokenSnapshot;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::info;

/// The orchestrator's view of "fetch and parse" as a single unit.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_tokens(&self) -> Result<Vec<TokenSnapshot>>;
}

/// Production snapshot source: fetch the rendered page, persist the raw
/// HTML, extract the rows, persist the batch and the latest pointer.
pub struct ScraperService {
    fetcher: PageFetcher,
    store: SnapshotStore,
    target_url: String,
}

impl ScraperService {
    pub fn new(config: &Config, store: SnapshotStore) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            fetcher: PageFetcher::new(client, config.scraper.api_key.clone()),
            store,
            target_url: config.scraper.target_url.clone(),
        }
    }

    pub async fn fetch_and_parse(&self) -> Result<Vec<TokenSnapshot>> {
        let stamp = SnapshotStore::file_stamp(Utc::now());

        let html = self.fetcher.fetch_rendered_page(&self.target_url).await?;
        // raw page hits disk before parsing, for forensics on parse trouble
        self.store.write_html(&stamp, &html)?;

        let tokens = extract_tokens(&html);
        let path = self.store.write_snapshot(&stamp, &tokens)?;
        info!("✅ Parsed and saved {} tokens to {}", tokens.len(), path.display());

        Ok(tokens)
    }
}

#[async_trait]
impl SnapshotSource for ScraperService {
    async fn fetch_tokens(&self) -> Result<Vec<TokenSnapshot>> {
        self.fetch_and_parse().await
    }
}
