//! Ticker extraction from headline text.

/// NSE symbols recognized in headlines
const KNOWN_SYMBOLS: &[&str] = &[
    "TCS", "INFY", "WIPRO", "HCLTECH", "TECHM", "RELIANCE", "HDFCBANK",
    "ICICIBANK", "SBIN", "KOTAKBANK", "AXISBANK", "BHARTIARTL", "ITC",
    "HINDUNILVR", "LT", "ULTRACEMCO", "MARUTI", "ASIANPAINT", "NESTLEIND",
    "BAJFINANCE", "POWERGRID", "NTPC", "ONGC", "COALINDIA",
];

/// Max tickers attached to a single news item
const MAX_TICKERS: usize = 3;

/// Scan text for known ticker symbols. Matching is case-insensitive on the
/// input but only whole words resolve; results are deduplicated and capped.
pub fn extract_tickers(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    let mut found: Vec<String> = Vec::new();

    for word in upper.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word.len() < 2 || word.len() > 12 {
            continue;
        }
        if KNOWN_SYMBOLS.contains(&word) && !found.iter().any(|f| f.as_str() == word) {
            found.push(word.to_string());
            if found.len() == MAX_TICKERS {
                break;
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_known_symbols_only() {
        let tickers = extract_tickers("TCS and ACMECO sign deal with RELIANCE");
        assert_eq!(tickers, vec!["TCS", "RELIANCE"]);
    }

    #[test]
    fn test_caps_at_three_and_dedups() {
        let tickers = extract_tickers("TCS TCS INFY WIPRO HCLTECH RELIANCE");
        assert_eq!(tickers, vec!["TCS", "INFY", "WIPRO"]);
    }

    #[test]
    fn test_matches_regardless_of_input_case() {
        let tickers = extract_tickers("Infy posts strong quarter");
        assert_eq!(tickers, vec!["INFY"]);
    }

    #[test]
    fn test_empty_when_no_symbols_present() {
        assert!(extract_tickers("Markets closed for holiday").is_empty());
    }
}
