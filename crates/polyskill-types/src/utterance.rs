//! Immutable view over one inbound dialog turn.
//!
//! An [`Utterance`] is built once per request by the wire layer and never
//! mutated afterwards. The dialog engine reads tokens, recognized entities,
//! and the raw text; foreign-looking words for the translator fallback are
//! derived at construction time.

use serde::{Deserialize, Serialize};

/// First code point of the Cyrillic range the platform tokenizer emits.
const CYRILLIC_START: char = '\u{0410}';
/// One past the last code point of that range (exclusive).
const CYRILLIC_END: char = '\u{0450}';

/// Recognized entities grouped by type, as delivered by the platform NLU.
///
/// Place entities arrive as ordered component lists (e.g. country, city,
/// street) and are joined with spaces when a single query string is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub persons: Vec<String>,
    #[serde(default)]
    pub places: Vec<Vec<String>>,
    #[serde(default)]
    pub numbers: Vec<f64>,
    #[serde(default)]
    pub datetimes: Vec<String>,
}

/// Read-only projection of one inbound turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    /// Stable identifier of the conversation this turn belongs to.
    pub session_id: String,
    /// True on the first turn of a conversation.
    pub is_new_session: bool,
    /// Lowercase words in utterance order, as produced by the tokenizer.
    pub tokens: Vec<String>,
    /// Original unsegmented text (punctuation preserved).
    pub raw_text: String,
    pub entities: Entities,
    /// Words of `raw_text` whose first character falls outside the
    /// Cyrillic block. Used as the translator's payload fallback.
    pub foreign_words: Vec<String>,
}

impl Utterance {
    /// Build an utterance, deriving `foreign_words` from the raw text.
    pub fn new(
        session_id: String,
        is_new_session: bool,
        tokens: Vec<String>,
        raw_text: String,
        entities: Entities,
    ) -> Self {
        let foreign_words = foreign_words(&raw_text);
        Self {
            session_id,
            is_new_session,
            tokens,
            raw_text,
            entities,
            foreign_words,
        }
    }

    /// First place entity joined into a single geocoder query, if any.
    pub fn first_place(&self) -> Option<String> {
        self.entities
            .places
            .first()
            .filter(|parts| !parts.is_empty())
            .map(|parts| parts.join(" "))
    }
}

/// Whitespace-split words of `text` whose first character is outside the
/// Cyrillic block `U+0410..U+0450`.
fn foreign_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| {
            word.chars()
                .next()
                .is_some_and(|c| !(CYRILLIC_START..CYRILLIC_END).contains(&c))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(raw: &str) -> Utterance {
        Utterance::new(
            "s1".to_string(),
            false,
            raw.split_whitespace().map(str::to_lowercase).collect(),
            raw.to_string(),
            Entities::default(),
        )
    }

    #[test]
    fn test_foreign_words_latin_only() {
        let u = utterance("переведи мама and hello");
        assert_eq!(u.foreign_words, vec!["and", "hello"]);
    }

    #[test]
    fn test_foreign_words_all_cyrillic() {
        let u = utterance("переведи привет на английский");
        assert!(u.foreign_words.is_empty());
    }

    #[test]
    fn test_foreign_words_lowercase_cyrillic_is_native() {
        // 'я' (U+044F) is the last lowercase letter inside the block.
        let u = utterance("яблоко");
        assert!(u.foreign_words.is_empty());
    }

    #[test]
    fn test_foreign_words_digit_counts_as_foreign() {
        let u = utterance("переведи 42");
        assert_eq!(u.foreign_words, vec!["42"]);
    }

    #[test]
    fn test_first_place_joins_components() {
        let mut u = utterance("погода");
        u.entities.places = vec![vec!["Россия".to_string(), "Москва".to_string()]];
        assert_eq!(u.first_place().as_deref(), Some("Россия Москва"));
    }

    #[test]
    fn test_first_place_empty() {
        let u = utterance("погода");
        assert!(u.first_place().is_none());
    }
}
