//! URL recognition.
//!
//! A single anchored regex decides whether text is a URL: optional
//! scheme, optional "www.", label segments (Latin or Cyrillic), a final
//! top-level label of 2-8 characters, optional path. The full original
//! utterance is tried first (punctuation preserved); if it is not a
//! URL, individual tokens are scanned for the first match to support
//! "scan <url> please" phrasing.

use std::sync::LazyLock;

use regex::Regex;

use polyskill_types::utterance::Utterance;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((http|https)://)?(www\.)?([A-Za-zА-Яа-я0-9][A-Za-zА-Яа-я0-9\-]*\.?)*\.[A-Za-zА-Яа-я0-9-]{2,8}(/([\w#!:.?+=&%@\-/])*)?",
    )
    .expect("url pattern is valid")
});

/// Whether `text` starts with something URL-shaped.
pub fn looks_like_url(text: &str) -> bool {
    URL_PATTERN.is_match(text)
}

/// The URL carried by an utterance, if any.
///
/// The whole raw text wins over token-level matches. `None` means "no
/// URL found" and is reported as a clarification request, not an error.
pub fn find_url(utterance: &Utterance) -> Option<&str> {
    if looks_like_url(&utterance.raw_text) {
        return Some(utterance.raw_text.as_str());
    }
    utterance
        .tokens
        .iter()
        .map(String::as_str)
        .find(|token| looks_like_url(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyskill_types::utterance::Entities;

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
    fn test_plain_domain() {
        assert!(looks_like_url("example.com"));
        assert!(looks_like_url("www.example.com"));
    }

    #[test]
    fn test_scheme_and_path() {
        assert!(looks_like_url("https://example.com/page?id=1"));
        assert!(looks_like_url("http://sub.example.co.uk/a/b#frag"));
    }

    #[test]
    fn test_cyrillic_domain() {
        assert!(looks_like_url("яндекс.рф"));
    }

    #[test]
    fn test_plain_words_are_not_urls() {
        assert!(!looks_like_url("привет"));
        assert!(!looks_like_url("проверь ссылку"));
    }

    #[test]
    fn test_find_url_prefers_whole_utterance() {
        let u = utterance("https://example.com/page");
        assert_eq!(find_url(&u), Some("https://example.com/page"));
    }

    #[test]
    fn test_find_url_scans_tokens() {
        let u = utterance("проверь example.com пожалуйста");
        assert_eq!(find_url(&u), Some("example.com"));
    }

    #[test]
    fn test_find_url_none() {
        let u = utterance("проверь что-нибудь");
        assert_eq!(find_url(&u), None);
    }
}
