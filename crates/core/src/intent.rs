use regex::Regex;

use crate::domain::intent::Intent;

/// Rule table in priority order. First match wins, so overlapping keywords
/// resolve by position here, never by specificity: "book me an agent"
/// classifies as booking because that rule precedes handoff.
const RULES: [(Intent, &str); 5] = [
    (Intent::Quote, r"\b(quote|price|cost|fare|estimate)\b"),
    (Intent::Track, r"\b(track|status|where is|lr\s*\d+)\b"),
    (Intent::Booking, r"\b(book|pickup|schedule|dispatch)\b"),
    (Intent::Faq, r"\b(time|hours|insurance|docs|document|capacity|areas)\b"),
    (Intent::Handoff, r"\b(agent|human|call me|talk to someone)\b"),
];

/// Keyword-rule intent classifier. Pure: no state beyond the compiled
/// rule list, safe to share across request tasks.
pub struct IntentClassifier {
    rules: Vec<(Intent, Regex)>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(intent, pattern)| {
                (*intent, Regex::new(pattern).expect("intent rule pattern is a valid regex"))
            })
            .collect();
        Self { rules }
    }

    /// Lowercases the text and returns the intent of the first rule that
    /// matches, or `Fallback` when none do. Never fails.
    pub fn classify(&self, text: &str) -> Intent {
        let normalized = text.to_lowercase();
        self.rules
            .iter()
            .find(|(_, pattern)| pattern.is_match(&normalized))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Fallback)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::intent::Intent;

    use super::IntentClassifier;

    fn classify(text: &str) -> Intent {
        IntentClassifier::new().classify(text)
    }

    #[test]
    fn classifies_each_intent_from_its_keywords() {
        assert_eq!(classify("what is the fare to Lucknow?"), Intent::Quote);
        assert_eq!(classify("where is my shipment"), Intent::Track);
        assert_eq!(classify("schedule a truck for Monday"), Intent::Booking);
        assert_eq!(classify("do you provide insurance"), Intent::Faq);
        assert_eq!(classify("I want to talk to someone"), Intent::Handoff);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("QUOTE please"), Intent::Quote);
        assert_eq!(classify("Track My Parcel"), Intent::Track);
    }

    #[test]
    fn keywords_require_word_boundaries() {
        // "subcostal" contains "cost" but not as a word.
        assert_eq!(classify("subcostal margin"), Intent::Fallback);
        assert_eq!(classify("bookkeeper society"), Intent::Fallback);
    }

    #[test]
    fn lr_number_matches_track() {
        assert_eq!(classify("lr 48213"), Intent::Track);
        assert_eq!(classify("LR48213"), Intent::Track);
        // "lr" with no digits is not a tracking reference.
        assert_eq!(classify("lr pending"), Intent::Fallback);
    }

    #[test]
    fn no_keyword_yields_fallback() {
        assert_eq!(classify("hello there"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("नमस्ते"), Intent::Fallback);
    }

    #[test]
    fn earlier_rule_wins_every_pairwise_conflict() {
        // One keyword from each category, combined pairwise; the rule
        // table's declared order must decide every conflict.
        let keywords = [
            (Intent::Quote, "price"),
            (Intent::Track, "status"),
            (Intent::Booking, "book"),
            (Intent::Faq, "insurance"),
            (Intent::Handoff, "agent"),
        ];
        for (i, (first_intent, first_word)) in keywords.iter().enumerate() {
            for (second_intent, second_word) in keywords.iter().skip(i + 1) {
                let text = format!("{first_word} and {second_word}");
                assert_eq!(classify(&text), *first_intent, "`{text}`");
                let reversed = format!("{second_word} and {first_word}");
                assert_eq!(classify(&reversed), *first_intent, "`{reversed}`");
                assert_ne!(first_intent, second_intent);
            }
        }
    }

    #[test]
    fn booking_beats_handoff_regardless_of_word_order() {
        assert_eq!(classify("can an agent book a pickup for me"), Intent::Booking);
    }
}
