//! Normalizers for the human-formatted values DexScreener renders.
//!
//! Two independent parsers: magnitude suffixes ("10.2M", "270K") and pair
//! ages ("5m", "2h", "1d"). The letter `m` means minutes in one and nothing
//! in the other; they must stay separate functions.

/// Age value for missing or unrecognized input: unknown/very old.
pub const AGE_UNKNOWN_MINUTES: i64 = 9999;

/// Parse values like "10.2M", "270K" or "$1,234.5" into a plain number.
///
/// Suffix matching is uppercase-only and happens before stripping, so "5k"
/// parses as 5. Anything without a parseable mantissa yields 0.
pub fn parse_formatted_number(value: &str) -> f64 {
    let multiplier = if value.contains('M') {
        1_000_000.0
    } else if value.contains('K') {
        1_000.0
    } else {
        1.0
    };

    let stripped: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    leading_float(&stripped).map_or(0.0, |n| n * multiplier)
}

/// Convert "5m", "2h", "1d" display ages to minutes.
///
/// Missing or unrecognized input returns [`AGE_UNKNOWN_MINUTES`] so stale
/// rows fail the age-window filter instead of slipping through.
pub fn parse_age_minutes(age: Option<&str>) -> i64 {
    let Some(age) = age else {
        return AGE_UNKNOWN_MINUTES;
    };

    let unit = if age.contains('m') {
        1
    } else if age.contains('h') {
        60
    } else if age.contains('d') {
        1440
    } else {
        return AGE_UNKNOWN_MINUTES;
    };

    let digits: String = age.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<i64>() {
        Ok(n) => n * unit,
        Err(_) => AGE_UNKNOWN_MINUTES,
    }
}

// Longest numeric prefix, one decimal point at most. "10.2.3" -> 10.2,
// matching how the original parsed these cells.
fn leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_suffixes() {
        assert_eq!(parse_formatted_number("10.2M"), 10_200_000.0);
        assert_eq!(parse_formatted_number("270K"), 270_000.0);
        assert_eq!(parse_formatted_number("42"), 42.0);
        assert_eq!(parse_formatted_number("1.5M"), 1_500_000.0);
    }

    #[test]
    fn test_magnitude_strips_formatting_characters() {
        assert_eq!(parse_formatted_number("$1,234.5"), 1_234.5);
        assert_eq!(parse_formatted_number("$270K"), 270_000.0);
    }

    #[test]
    fn test_magnitude_unparseable_yields_zero() {
        assert_eq!(parse_formatted_number(""), 0.0);
        assert_eq!(parse_formatted_number("--"), 0.0);
        assert_eq!(parse_formatted_number("M"), 0.0);
    }

    #[test]
    fn test_magnitude_suffix_is_uppercase_only() {
        // lowercase k/m are not multipliers in the source data
        assert_eq!(parse_formatted_number("5k"), 5.0);
        assert_eq!(parse_formatted_number("5m"), 5.0);
    }

    #[test]
    fn test_age_units() {
        assert_eq!(parse_age_minutes(Some("5m")), 5);
        assert_eq!(parse_age_minutes(Some("2h")), 120);
        assert_eq!(parse_age_minutes(Some("1d")), 1440);
    }

    #[test]
    fn test_age_missing_or_unrecognized_is_sentinel() {
        assert_eq!(parse_age_minutes(None), AGE_UNKNOWN_MINUTES);
        assert_eq!(parse_age_minutes(Some("")), AGE_UNKNOWN_MINUTES);
        assert_eq!(parse_age_minutes(Some("soon")), AGE_UNKNOWN_MINUTES);
        assert_eq!(parse_age_minutes(Some("m")), AGE_UNKNOWN_MINUTES);
    }
}
