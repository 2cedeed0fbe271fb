use crate::types::TokenSnapshot;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Owns the on-disk snapshot layout:
///
/// ```text
/// data/
///   html/dexscreener_<stamp>.html   raw page per cycle, write-once
///   json/dexscreener_<stamp>.json   parsed batch per cycle, write-once
///   latest.json                     overwritten every cycle, atomically
/// ```
///
/// `latest.json` is replaced via write-to-temp-then-rename so a concurrent
/// reader sees either the old or the new complete file, never a partial one.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    base_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            base_dir: base_dir.into(),
        };
        fs::create_dir_all(store.html_dir())
            .map_err(|e| anyhow!("Failed to create html dir: {}", e))?;
        fs::create_dir_all(store.json_dir())
            .map_err(|e| anyhow!("Failed to create json dir: {}", e))?;
        Ok(store)
    }

    pub fn html_dir(&self) -> PathBuf {
        self.base_dir.join("html")
    }

    pub fn json_dir(&self) -> PathBuf {
        self.base_dir.join("json")
    }

    pub fn latest_path(&self) -> PathBuf {
        self.base_dir.join("latest.json")
    }

    /// Filesystem-safe ISO-8601 stamp, millisecond precision, sorts in
    /// chronological order as a plain string.
    pub fn file_stamp(now: DateTime<Utc>) -> String {
        now.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
    }

    /// Persist the raw page body before any parsing is attempted, so a
    /// parse failure still leaves the forensic input on disk.
    pub fn write_html(&self, stamp: &str, html: &str) -> Result<PathBuf> {
        let path = self.html_dir().join(format!("dexscreener_{}.html", stamp));
        fs::write(&path, html).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        Ok(path)
    }

    /// Persist one cycle's batch: the write-once timestamped file, then the
    /// "latest" pointer.
    pub fn write_snapshot(&self, stamp: &str, tokens: &[TokenSnapshot]) -> Result<PathBuf> {
        let payload = serde_json::to_string_pretty(tokens)?;

        let path = self.json_dir().join(format!("dexscreener_{}.json", stamp));
        fs::write(&path, &payload)
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;

        self.replace_latest(stamp, &payload)?;
        Ok(path)
    }

    // Temp file carries the cycle stamp so overlapping cycles never write
    // through the same temp path.
    fn replace_latest(&self, stamp: &str, payload: &str) -> Result<()> {
        let tmp = self.base_dir.join(format!(".latest-{}.tmp", stamp));
        fs::write(&tmp, payload).map_err(|e| anyhow!("Failed to write {}: {}", tmp.display(), e))?;
        fs::rename(&tmp, self.latest_path())
            .map_err(|e| anyhow!("Failed to replace latest.json: {}", e))?;
        Ok(())
    }

    pub fn read_latest(&self) -> Result<Vec<TokenSnapshot>> {
        let raw = fs::read_to_string(self.latest_path())
            .map_err(|e| anyhow!("Failed to read latest.json: {}", e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Snapshot filenames, newest first. Used by the dashboard listing.
    pub fn list_snapshots(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(self.json_dir())?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".json"))
            .collect();
        names.sort();
        names.reverse();
        Ok(names)
    }
}
