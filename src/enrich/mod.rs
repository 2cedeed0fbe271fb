use crate::types::{TokenInfo, TokenSnapshot};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

const PAIRS_API_BASE: &str = "https://api.dexscreener.com/latest/dex/pairs/solana";

#[derive(Debug, Deserialize)]
struct PairsResponse {
    pair: Option<PairDetail>,
}

#[derive(Debug, Deserialize)]
struct PairDetail {
    #[serde(rename = "baseToken")]
    base_token: Option<BaseTokenDto>,
}

#[derive(Debug, Deserialize)]
struct BaseTokenDto {
    address: String,
    name: String,
    symbol: String,
}

/// Result of one enrichment lookup. Both non-success variants mean "skip
/// this token silently"; they stay distinct so a future policy can treat a
/// transport error differently from a pair with no base token.
#[derive(Debug, Clone)]
pub enum EnrichOutcome {
    Enriched(TokenInfo),
    MissingBase,
    TransportError(String),
}

#[async_trait]
pub trait Enricher: Send + Sync {
    async fn enrich(&self, token: &TokenSnapshot) -> EnrichOutcome;
}

/// Resolves a token's mint address from the DexScreener pairs API, keyed by
/// the last path segment of the pair detail URL.
pub struct TokenEnricher {
    client: reqwest::Client,
}

impl TokenEnricher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    async fn lookup(&self, pair_url: &str) -> EnrichOutcome {
        let pair_id = pair_id_from_url(pair_url);
        let url = format!("{}/{}", PAIRS_API_BASE, pair_id);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return EnrichOutcome::TransportError(e.to_string()),
        };
        if !response.status().is_success() {
            return EnrichOutcome::TransportError(format!(
                "pairs API returned {}",
                response.status()
            ));
        }

        let body: PairsResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => return EnrichOutcome::TransportError(e.to_string()),
        };

        match outcome_from_response(body) {
            EnrichOutcome::Enriched(token_info) => {
                info!("✅ Dexscreener token info: {:?}", token_info);
                EnrichOutcome::Enriched(token_info)
            }
            other => other,
        }
    }
}

#[async_trait]
impl Enricher for TokenEnricher {
    async fn enrich(&self, token: &TokenSnapshot) -> EnrichOutcome {
        self.lookup(&token.pair_url).await
    }
}

impl Default for TokenEnricher {
    fn default() -> Self {
        Self::new()
    }
}

fn pair_id_from_url(pair_url: &str) -> &str {
    pair_url.rsplit('/').next().unwrap_or_default()
}

fn outcome_from_response(body: PairsResponse) -> EnrichOutcome {
    match body.pair.and_then(|p| p.base_token) {
        Some(base) => EnrichOutcome::Enriched(TokenInfo {
            address: base.address,
            name: base.name,
            symbol: base.symbol,
        }),
        None => EnrichOutcome::MissingBase,
    }
}
