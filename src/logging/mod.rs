use anyhow::{anyhow, Result};
use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Append-only event log the dashboard reads back: one daily file plus a
/// rolling `system.log`, one line per event as `[ISO-timestamp] [LEVEL]
/// message`. Every event is also forwarded to `tracing`.
#[derive(Debug, Clone)]
pub struct EventLog {
    log_dir: PathBuf,
}

impl EventLog {
    pub fn new(log_dir: impl Into<PathBuf>) -> Result<Self> {
        let log_dir = log_dir.into();
        fs::create_dir_all(&log_dir).map_err(|e| anyhow!("Failed to create log dir: {}", e))?;
        Ok(Self { log_dir })
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", message);
        self.append("INFO", message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        self.append("WARN", message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", message);
        self.append("ERROR", message);
    }

    // A log write failure must never take down a cycle.
    fn append(&self, level: &str, message: &str) {
        let now = Utc::now();
        let line = format!(
            "[{}] [{}] {}\n",
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
            level,
            message
        );

        let daily = self.log_dir.join(format!("system-{}.log", now.format("%Y-%m-%d")));
        let latest = self.log_dir.join("system.log");
        for path in [daily, latest] {
            let result = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .and_then(|mut file| file.write_all(line.as_bytes()));
            if let Err(e) = result {
                tracing::error!("Failed to append to {}: {}", path.display(), e);
            }
        }
    }
}
