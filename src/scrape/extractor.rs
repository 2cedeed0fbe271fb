use crate::normalize::{parse_age_minutes, parse_formatted_number};
use crate::types::TokenSnapshot;
use scraper::{ElementRef, Html, Selector};

/// Origin prepended to the relative pair links in the table.
pub const DEXSCREENER_ORIGIN: &str = "https://dexscreener.com";

const ROW_MARKER: &str = ".ds-dex-table-row";

/// Parse the rendered token table into one record per row.
///
/// Extraction is total: a row missing a cell degrades that field to an
/// empty string / 0 / sentinel instead of dropping the row. Output order is
/// the document order of the rows, which is the site's ranking.
pub fn extract_tokens(html: &str) -> Vec<TokenSnapshot> {
    let document = Html::parse_document(html);

    let row = selector(ROW_MARKER);
    let rank = selector(".ds-dex-table-row-badge-pair-no");
    let base_symbol = selector(".ds-dex-table-row-base-token-symbol");
    let base_name = selector(".ds-dex-table-row-base-token-name-text");
    let quote_symbol = selector(".ds-dex-table-row-quote-token-symbol");
    let price = selector(".ds-dex-table-row-col-price");
    let age = selector(".ds-dex-table-row-col-pair-age");
    let txns = selector(".ds-dex-table-row-col-txns");
    let volume = selector(".ds-dex-table-row-col-volume");
    let liquidity = selector(".ds-dex-table-row-col-liquidity");
    let mcap = selector(".ds-dex-table-row-col-market-cap");
    let makers = selector(".ds-dex-table-row-col-makers");
    let change_5m = selector(".ds-dex-table-row-col-price-change-m5");
    let change_1h = selector(".ds-dex-table-row-col-price-change-h1");
    let change_6h = selector(".ds-dex-table-row-col-price-change-h6");
    let change_24h = selector(".ds-dex-table-row-col-price-change-h24");

    document
        .select(&row)
        .map(|el| {
            let raw_price = cell_text(el, &price).replace('$', "");
            let raw_age = cell_text(el, &age);
            let raw_volume = cell_text(el, &volume).replace('$', "");
            let raw_liquidity = cell_text(el, &liquidity).replace('$', "");
            let raw_mcap = cell_text(el, &mcap).replace('$', "");
            let symbol = cell_text(el, &base_symbol);
            let quote = cell_text(el, &quote_symbol);

            TokenSnapshot {
                rank: cell_text(el, &rank),
                pair: format!("{}/{}", symbol, quote),
                full_name: cell_text(el, &base_name),
                price: raw_price.trim().parse().unwrap_or(0.0),
                age_minutes: parse_age_minutes(if raw_age.is_empty() {
                    None
                } else {
                    Some(raw_age.as_str())
                }),
                age: raw_age,
                txns: cell_text(el, &txns),
                volume: parse_formatted_number(&raw_volume),
                liquidity: parse_formatted_number(&raw_liquidity),
                mcap: parse_formatted_number(&raw_mcap),
                makers: cell_text(el, &makers),
                change_5m: percent(&cell_text(el, &change_5m)),
                change_1h: percent(&cell_text(el, &change_1h)),
                change_6h: percent(&cell_text(el, &change_6h)),
                change_24h: percent(&cell_text(el, &change_24h)),
                pair_url: pair_url(el),
                symbol,
                address: None,
            }
        })
        .collect()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid cell selector")
}

fn cell_text(row: ElementRef, cell: &Selector) -> String {
    row.select(cell)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

// Unparseable percent cells become NaN so the qualification filter fails
// closed on them instead of treating them as 0%.
fn percent(raw: &str) -> f64 {
    raw.replace('%', "").trim().parse().unwrap_or(f64::NAN)
}

fn pair_url(row: ElementRef) -> String {
    match row.value().attr("href") {
        Some(href) => format!("{}{}", DEXSCREENER_ORIGIN, href),
        None => DEXSCREENER_ORIGIN.to_string(),
    }
}
