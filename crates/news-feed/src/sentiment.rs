//! Keyword sentiment scoring for headlines.
//!
//! Counts positive and negative financial keywords and maps the balance to
//! a score in [-1, 1], classified into the dashboard's three-way sentiment.

use dashboard_core::Sentiment;

const POSITIVE_KEYWORDS: &[&str] = &[
    "surges", "rally", "gains", "profit", "growth", "beats",
    "exceeds", "strong", "bullish", "upgrade", "optimistic",
    "breakthrough", "success", "record", "high", "soars",
    "buyback", "recovery", "rebound", "expansion",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "falls", "plunges", "losses", "decline", "weak", "misses",
    "cuts", "drops", "bearish", "downgrade", "pessimistic",
    "failure", "concern", "warning", "low", "crashes",
    "lawsuit", "investigation", "default", "bankruptcy",
];

/// Score text in [-1, 1]; zero when no keyword matches.
pub fn keyword_score(text: &str) -> f64 {
    let text = text.to_lowercase();

    let positive_count: i32 = POSITIVE_KEYWORDS
        .iter()
        .map(|kw| text.matches(kw).count() as i32)
        .sum();

    let negative_count: i32 = NEGATIVE_KEYWORDS
        .iter()
        .map(|kw| text.matches(kw).count() as i32)
        .sum();

    let total = positive_count + negative_count;
    if total == 0 {
        return 0.0;
    }

    ((positive_count - negative_count) as f64 / total as f64).clamp(-1.0, 1.0)
}

/// Classify a headline and excerpt pair.
pub fn classify(title: &str, excerpt: &str) -> Sentiment {
    Sentiment::from_score(keyword_score(&format!("{} {}", title, excerpt)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headline_scores_above_zero() {
        let score = keyword_score("Stock surges on strong earnings, record profit growth");
        assert!(score > 0.0);
    }

    #[test]
    fn test_negative_headline_scores_below_zero() {
        let score = keyword_score("Shares plunge as weak guidance and losses spook investors");
        assert!(score < 0.0);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(keyword_score("Board meeting scheduled for Tuesday"), 0.0);
        assert_eq!(
            classify("Board meeting scheduled for Tuesday", ""),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_classification_matches_score_direction() {
        assert_eq!(
            classify("Markets rally to record high", "Strong gains across sectors"),
            Sentiment::Bullish
        );
        assert_eq!(
            classify("Bank faces lawsuit and investigation", "Shares drop on the warning"),
            Sentiment::Bearish
        );
    }
}
