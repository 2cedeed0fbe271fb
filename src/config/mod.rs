use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScraperConfig {
    pub api_key: String,
    pub target_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub log_dir: String,
    pub settings_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    pub poll_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv().ok();

        if std::env::var("SCRAPERAPI_API_KEY").is_err()
            || std::env::var("TELEGRAM_API_KEY").is_err()
            || std::env::var("TELEGRAM_CHAT_ID").is_err()
        {
            Self::print_config_help();
            return Err(anyhow::anyhow!("Missing required configuration"));
        }

        Ok(Config {
            scraper: ScraperConfig {
                api_key: required_env_var("SCRAPERAPI_API_KEY")?,
                target_url: env_var_or_default(
                    "DEXSCREENER_SOLANA_ENDPOINT",
                    "https://dexscreener.com/solana".to_string(),
                )?,
            },
            telegram: TelegramConfig {
                bot_token: required_env_var("TELEGRAM_API_KEY")?,
                chat_id: required_env_var("TELEGRAM_CHAT_ID")?,
            },
            storage: StorageConfig {
                data_dir: env_var_or_default("DATA_DIR", "data".to_string())?,
                log_dir: env_var_or_default("LOG_DIR", "logs".to_string())?,
                settings_path: env_var_or_default(
                    "SETTINGS_PATH",
                    "config/settings.json".to_string(),
                )?,
            },
            monitor: MonitorConfig {
                poll_interval_secs: env_var_or_default("POLL_INTERVAL_SECS", 1800)?,
            },
        })
    }

    fn print_config_help() {
        println!("\n🔧 Configuration guide");
        println!("{}", "=".repeat(50));
        println!("Please set the following environment variables:\n");

        println!("[required]");
        println!("SCRAPERAPI_API_KEY=<scraperapi.com key>");
        println!("TELEGRAM_API_KEY=<bot token>");
        println!("TELEGRAM_CHAT_ID=<chat id>\n");

        println!("[optional]");
        println!("DEXSCREENER_SOLANA_ENDPOINT=https://dexscreener.com/solana");
        println!("DATA_DIR=data");
        println!("LOG_DIR=logs");
        println!("SETTINGS_PATH=config/settings.json");
        println!("POLL_INTERVAL_SECS=1800\n");

        println!("{}", "=".repeat(50));
    }
}

fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn required_env_var(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required variable: {}", key))
}
