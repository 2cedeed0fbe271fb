use crate::types::{Settings, TokenSnapshot};

/// Apply the five threshold conjuncts, preserving input order.
///
/// All comparisons fail closed: a NaN field (unparseable percent cell)
/// makes its conjunct false, so the token is excluded rather than alerted
/// on bad data. The caller is responsible for skipping this entirely when
/// alerting is disabled.
pub fn qualify(tokens: &[TokenSnapshot], settings: &Settings) -> Vec<TokenSnapshot> {
    tokens
        .iter()
        .filter(|token| {
            token.liquidity >= settings.min_liquidity
                && token.volume >= settings.min_volume
                && token.change_1h >= settings.min_change_1h
                && token.age_minutes >= settings.min_token_age_minutes
                && token.age_minutes <= settings.max_token_age_minutes
        })
        .cloned()
        .collect()
}
