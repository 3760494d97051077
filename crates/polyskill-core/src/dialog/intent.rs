//! Intent keyword sets and token-set matching.
//!
//! Intents are detected by keyword-set intersection against the
//! normalized token list, never by substring search -- "пока" inside
//! "покажи" must not trigger exit. The sets are disjoint by convention;
//! callers check exit-intent first so it always pre-empts task intent.

/// Words that end the current state and return to the menu.
pub const EXIT_WORDS: &[&str] = &["выход", "пока", "выйти", "уйти", "покинуть"];

/// Words that acknowledge the previous reply.
pub const THANKS_WORDS: &[&str] = &["спасибо", "класс", "круто"];

/// Words that trigger a translation attempt.
pub const TRANSLATE_WORDS: &[&str] = &["переведи", "переведите", "перевод"];

/// Words that trigger a URL scan.
pub const SCAN_WORDS: &[&str] = &[
    "проверь",
    "просканируй",
    "сканируй",
    "проверить",
    "просканировать",
    "сканировать",
    "ссылка",
];

/// True when any token is one of the keywords.
pub fn mentions_any(tokens: &[String], keywords: &[&str]) -> bool {
    tokens.iter().any(|t| keywords.contains(&t.as_str()))
}

/// True when `word` appears as a whole token.
pub fn mentions(tokens: &[String], word: &str) -> bool {
    tokens.iter().any(|t| t == word)
}
