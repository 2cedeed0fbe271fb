use crate::types::TokenSnapshot;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn dispatch(&self, token: &TokenSnapshot) -> Result<()>;
}

/// Markdown alert body for one matched token. The swap link uses the mint
/// address when enrichment resolved one; the symbol fallback only matters
/// for manual/test invocations outside the enrichment-gated path.
pub fn format_alert(token: &TokenSnapshot) -> String {
    let mint = token.address.as_deref().unwrap_or(&token.symbol);

    format!(
        "🚨 *New Token Match*: ${symbol}\n\n\
         *Price:* ${price}\n\
         *Liquidity:* ${liquidity}\n\
         *Volume:* ${volume}\n\
         *1h Change:* {change_1h}%\n\
         *Age:* {age_minutes} minutes\n\n\
         [🔁 Swap on Jupiter](https://jup.ag/swap/SOL-TO-{mint})",
        symbol = token.symbol,
        price = token.price,
        liquidity = token.liquidity,
        volume = token.volume,
        change_1h = token.change_1h,
        age_minutes = token.age_minutes,
        mint = mint,
    )
}

/// Sends one Telegram message per matched token via the bot API.
///
/// Per-token and independent: a failed send is the caller's problem to log,
/// and never stops the rest of the batch.
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            bot_token,
            chat_id,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn dispatch(&self, token: &TokenSnapshot) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": format_alert(token),
            "parse_mode": "Markdown",
            "disable_web_page_preview": true,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("Telegram sendMessage failed: {}", response.status()));
        }

        Ok(())
    }
}
