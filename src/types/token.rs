use serde::{Deserialize, Deserializer, Serialize};

/// One row of the DexScreener Solana table, captured during one scrape cycle.
///
/// Field names on disk match the original snapshot artifacts (`fullName`,
/// `ageMinutes`, `pairUrl`, ...), so older dashboards can keep reading them.
/// `txns` and `makers` stay as display strings; only the fields the filter
/// compares are normalized to numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    pub rank: String,
    #[serde(rename = "name")]
    pub symbol: String,
    pub full_name: String,
    /// Derived "BASE/QUOTE" label.
    pub pair: String,
    pub price: f64,
    /// Original display string, e.g. "5m", "2h".
    pub age: String,
    /// Normalized age; 9999 means unknown/very old.
    pub age_minutes: i64,
    pub txns: String,
    pub volume: f64,
    pub liquidity: f64,
    pub mcap: f64,
    pub makers: String,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    pub change_5m: f64,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    pub change_1h: f64,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    pub change_6h: f64,
    #[serde(default = "nan", deserialize_with = "null_as_nan")]
    pub change_24h: f64,
    /// Absolute URL of the pair detail page.
    pub pair_url: String,
    /// On-chain mint address, present only after successful enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Base-token details resolved from the DexScreener pairs API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

fn nan() -> f64 {
    f64::NAN
}

// Unparseable percent cells serialize as JSON null; read them back as NaN
// so the filter keeps failing closed on them.
fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenSnapshot {
        TokenSnapshot {
            rank: "#1".to_string(),
            symbol: "MOON".to_string(),
            full_name: "Moon Token".to_string(),
            pair: "MOON/SOL".to_string(),
            price: 0.0002,
            age: "5m".to_string(),
            age_minutes: 5,
            txns: "1,234".to_string(),
            volume: 500_000.0,
            liquidity: 100_000.0,
            mcap: 5_000_000.0,
            makers: "600".to_string(),
            change_5m: 5.0,
            change_1h: 120.0,
            change_6h: 300.0,
            change_24h: 1000.0,
            pair_url: "https://dexscreener.com/solana/99D5oi479AxQpQcfVKkTK6E7r1Y8KJSKhaA9dUBws1vd"
                .to_string(),
            address: None,
        }
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"name\":\"MOON\""));
        assert!(json.contains("\"fullName\":\"Moon Token\""));
        assert!(json.contains("\"ageMinutes\":5"));
        assert!(json.contains("\"change1h\":120.0"));
        assert!(json.contains("\"pairUrl\""));
        // absent address is omitted entirely
        assert!(!json.contains("address"));
    }

    #[test]
    fn test_nan_change_round_trips_as_null() {
        let mut token = sample();
        token.change_5m = f64::NAN;
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"change5m\":null"));

        let back: TokenSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.change_5m.is_nan());
        assert_eq!(back.change_1h, 120.0);
    }
}
