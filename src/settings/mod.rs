use crate::types::Settings;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

/// Capability seam for the orchestrator: thresholds come from somewhere
/// mutable and are loaded fresh on every cycle.
pub trait SettingsProvider: Send + Sync {
    fn load(&self) -> Result<Settings>;
}

/// Reads `settings.json` on every call, no caching, so edits made through
/// the settings page apply on the next cycle. A missing or corrupt file is
/// an error: there are no safe default thresholds to fall back to.
#[derive(Debug, Clone)]
pub struct FileSettingsProvider {
    path: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for FileSettingsProvider {
    fn load(&self) -> Result<Settings> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| anyhow!("Failed to read settings file {}: {}", self.path.display(), e))?;
        serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Invalid settings file {}: {}", self.path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_fresh_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let write = |enabled: bool| {
            let mut f = fs::File::create(&path).unwrap();
            write!(
                f,
                r#"{{"enabled":{},"minLiquidity":1,"minVolume":2,"minChange1h":3,"minTokenAgeMinutes":4,"maxTokenAgeMinutes":5}}"#,
                enabled
            )
            .unwrap();
        };

        let provider = FileSettingsProvider::new(&path);

        write(true);
        assert!(provider.load().unwrap().enabled);

        write(false);
        assert!(!provider.load().unwrap().enabled);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let provider = FileSettingsProvider::new("/nonexistent/settings.json");
        assert!(provider.load().is_err());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let provider = FileSettingsProvider::new(&path);
        assert!(provider.load().is_err());
    }
}
