use crate::alerts::{Notifier, TelegramNotifier};
use crate::config::Config;
use crate::enrich::{EnrichOutcome, Enricher, TokenEnricher};
use crate::filter::qualify;
use crate::logging::EventLog;
use crate::scrape::{ScraperService, SnapshotSource};
use crate::settings::{FileSettingsProvider, SettingsProvider};
use crate::storage::SnapshotStore;
use anyhow::Result;
use chrono::Utc;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};

/// Terminal state of one analysis cycle.
///
/// `Disabled` and `FetchFailed` are valid early exits, not errors; only a
/// missing/corrupt settings document makes `run_cycle` return `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Disabled,
    FetchFailed,
    Completed {
        fetched: usize,
        qualified: usize,
        alerted: usize,
    },
}

/// Sequences one scrape cycle: settings → fetch+parse → filter → per-token
/// enrich and dispatch. Strictly sequential per token; the Telegram API
/// rate-limits, so no concurrent dispatch.
pub struct AnalysisService<S, E, N, P> {
    source: S,
    enricher: E,
    notifier: N,
    settings: P,
    events: EventLog,
}

impl AnalysisService<ScraperService, TokenEnricher, TelegramNotifier, FileSettingsProvider> {
    /// Production wiring from environment configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = SnapshotStore::new(&config.storage.data_dir)?;
        Ok(Self::new(
            ScraperService::new(config, store),
            TokenEnricher::new(),
            TelegramNotifier::new(
                config.telegram.bot_token.clone(),
                config.telegram.chat_id.clone(),
            ),
            FileSettingsProvider::new(&config.storage.settings_path),
            EventLog::new(&config.storage.log_dir)?,
        ))
    }
}

impl<S, E, N, P> AnalysisService<S, E, N, P>
where
    S: SnapshotSource,
    E: Enricher,
    N: Notifier,
    P: SettingsProvider,
{
    pub fn new(source: S, enricher: E, notifier: N, settings: P, events: EventLog) -> Self {
        Self {
            source,
            enricher,
            notifier,
            settings,
            events,
        }
    }

    /// Run cycles forever on a fixed interval. Cycle failures are logged
    /// and the loop keeps going; the next tick is the retry.
    pub async fn start(&self, interval: Duration) {
        info!("🚀 Starting analysis loop, interval: {:?}", interval);
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            match self.run_cycle().await {
                Ok(outcome) => info!("Cycle finished: {:?}", outcome),
                Err(e) => error!("❌ Analysis cycle failed: {}", e),
            }
        }
    }

    /// One full analysis cycle. Zero-argument entry point for both the
    /// timer loop and on-demand invocation.
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        let settings = self.settings.load()?;

        self.events
            .info(&format!("🟡 [{}] Starting Moonshot analysis...", Utc::now().format("%H:%M:%S")));

        if !settings.enabled {
            self.events.warn("🚫 Alert logic is disabled via settings.json");
            return Ok(CycleOutcome::Disabled);
        }

        let tokens = match self.source.fetch_tokens().await {
            Ok(tokens) => tokens,
            Err(e) => {
                self.events.error(&format!("❌ Fetch and parse failed: {}", e));
                return Ok(CycleOutcome::FetchFailed);
            }
        };
        self.events
            .info(&format!("📥 Fetched {} tokens from DexScreener", tokens.len()));

        let qualifying = qualify(&tokens, &settings);
        self.events
            .info(&format!("🔍 Found {} qualifying tokens", qualifying.len()));

        let mut alerted = 0;
        for token in &qualifying {
            let mut token = token.clone();

            match self.enricher.enrich(&token).await {
                EnrichOutcome::Enriched(info) => token.address = Some(info.address),
                EnrichOutcome::MissingBase => {
                    self.events.warn(&format!(
                        "⚠️ Skipping alert for {} — token address could not be retrieved",
                        token.symbol
                    ));
                    continue;
                }
                EnrichOutcome::TransportError(e) => {
                    self.events.warn(&format!(
                        "⚠️ Skipping alert for {} — token lookup failed: {}",
                        token.symbol, e
                    ));
                    continue;
                }
            }

            self.events
                .info(&format!("📡 Sending alert for {} — ${}", token.symbol, token.price));
            match self.notifier.dispatch(&token).await {
                Ok(()) => alerted += 1,
                Err(e) => {
                    self.events.error(&format!(
                        "❌ Telegram alert failed for {}: {}",
                        token.symbol, e
                    ));
                }
            }
        }

        self.events
            .info(&format!("✅ Analysis completed at {}", Utc::now().format("%H:%M:%S")));

        Ok(CycleOutcome::Completed {
            fetched: tokens.len(),
            qualified: qualifying.len(),
            alerted,
        })
    }
}
