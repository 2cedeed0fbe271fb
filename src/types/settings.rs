use serde::{Deserialize, Serialize};

/// Operator-configured alert thresholds, persisted as `settings.json`.
///
/// The file is re-read on every analysis cycle so edits made through the
/// settings page take effect on the next run. `min_token_age_minutes <=
/// max_token_age_minutes` is expected but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub enabled: bool,
    pub min_liquidity: f64,
    pub min_volume: f64,
    pub min_change_1h: f64,
    pub min_token_age_minutes: i64,
    pub max_token_age_minutes: i64,
}
