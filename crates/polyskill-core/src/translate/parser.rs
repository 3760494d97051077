//! Natural-language translation request parser.
//!
//! Extracts the text to translate and the ISO-639-1 language pair from
//! a tokenized utterance like "переведи привет с русского на японский".
//! Defaults to ru -> en when no language is named. The precomputed
//! foreign-word list serves as the payload fallback when stripping
//! empties the candidate tokens ("переведи hello" keeps "hello").

use polyskill_types::translation::{TranslationOutcome, TranslationRequest};

use super::languages::LanguageTable;

/// Politeness/trigger words that never belong to the payload.
const STOP_WORDS: &[&str] = &[
    "алиса",
    "переведи",
    "переведите",
    "перевод",
    "слово",
    "слова",
    "предложение",
    "предложения",
];

const DEFAULT_FROM: &str = "ru";
const DEFAULT_TO: &str = "en";

/// Parse one utterance into a [`TranslationRequest`].
///
/// Never fails: every malformed input maps to a non-`Ok`
/// [`TranslationOutcome`].
pub fn parse(tokens: &[String], foreign_words: &[String]) -> TranslationRequest {
    let candidates: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !STOP_WORDS.contains(t))
        .collect();

    let (from, to) = detect_languages(tokens);

    let Some(from) = from else {
        return TranslationRequest::failed(
            TranslationOutcome::UnknownSourceLanguage,
            "unresolved",
            to.unwrap_or("unresolved"),
        );
    };
    let Some(to) = to else {
        return TranslationRequest::failed(
            TranslationOutcome::UnknownTargetLanguage,
            from,
            "unresolved",
        );
    };

    let mut payload = strip_language_phrases(&candidates, from, to);
    if payload.is_empty() {
        payload = foreign_words.to_vec();
    }
    if payload.is_empty() {
        return TranslationRequest::failed(TranslationOutcome::EmptyPayload, from, to);
    }

    if from == to {
        let outcome = if from == "ru" && !foreign_words.is_empty() {
            // Both codes defaulted/collapsed to "ru" while the utterance
            // still holds foreign-looking words: we cannot tell whether
            // the user meant to name a language at all.
            TranslationOutcome::AmbiguousSameLanguage
        } else {
            TranslationOutcome::SameLanguagePair
        };
        return TranslationRequest::failed(outcome, from, to);
    }

    TranslationRequest {
        source_text: payload.join(" "),
        language_from: from.to_string(),
        language_to: to.to_string(),
        outcome: TranslationOutcome::Ok,
    }
}

/// Pairwise scan for "с/от <...ского>" (source) and "на <...ский>"
/// (target) phrases. A recognized phrase with an adjective the table
/// does not know yields `None` for that side; an absent phrase keeps
/// the default. The last phrase of each kind wins.
fn detect_languages(tokens: &[String]) -> (Option<&'static str>, Option<&'static str>) {
    let mut from = Some(DEFAULT_FROM);
    let mut to = Some(DEFAULT_TO);

    for pair in tokens.windows(2) {
        let (word, next) = (pair[0].as_str(), pair[1].as_str());
        if (word == "с" || word == "от") && next.contains("ского") {
            from = LanguageTable::code_for(&capitalize(&nominative_from_genitive(next)));
        } else if word == "на" && next.contains("ский") {
            to = LanguageTable::code_for(&capitalize(next));
        }
    }

    (from, to)
}

/// Remove the language-naming phrases themselves from the candidate
/// tokens. Matching happens on the space-joined form, longer variants
/// first ("с английского языка" before "с английского").
fn strip_language_phrases(candidates: &[&str], from: &str, to: &str) -> Vec<String> {
    let mut joined = candidates.join(" ");

    if let Some(name) = LanguageTable::name_for(from) {
        let stem = drop_last_chars(&name.to_lowercase(), 2);
        for preposition in ["с", "от"] {
            let phrase = format!("{preposition} {stem}ого");
            let long = format!("{phrase} языка");
            if joined.contains(&long) {
                joined = joined.replace(&long, "");
            } else if joined.contains(&phrase) {
                joined = joined.replace(&phrase, "");
            }
        }
    }

    if let Some(name) = LanguageTable::name_for(to) {
        let phrase = format!("на {}", name.to_lowercase());
        let long = format!("{phrase} язык");
        if joined.contains(&long) {
            joined = joined.replace(&long, "");
        } else if joined.contains(&phrase) {
            joined = joined.replace(&phrase, "");
        }
    }

    joined.split_whitespace().map(str::to_string).collect()
}

/// "английского" -> "английский": drop the genitive "ого", append "ий".
fn nominative_from_genitive(word: &str) -> String {
    let mut adjective = drop_last_chars(word, 3);
    adjective.push_str("ий");
    adjective
}

fn drop_last_chars(s: &str, n: usize) -> String {
    let keep = s.chars().count().saturating_sub(n);
    s.chars().take(keep).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_ru_en() {
        let req = parse(&tokens(&["переведи", "мама"]), &[]);
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.language_from, "ru");
        assert_eq!(req.language_to, "en");
        assert_eq!(req.source_text, "мама");
    }

    #[test]
    fn test_target_language_phrase() {
        let req = parse(&tokens(&["переведи", "привет", "на", "английский"]), &[]);
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.language_from, "ru");
        assert_eq!(req.language_to, "en");
        assert_eq!(req.source_text, "привет");
    }

    #[test]
    fn test_full_language_pair() {
        let req = parse(
            &tokens(&["переведи", "hello", "с", "английского", "на", "русский"]),
            &tokens(&["hello"]),
        );
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.language_from, "en");
        assert_eq!(req.language_to, "ru");
        assert_eq!(req.source_text, "hello");
    }

    #[test]
    fn test_long_phrase_with_language_word() {
        let req = parse(
            &tokens(&[
                "переведи",
                "кот",
                "с",
                "русского",
                "языка",
                "на",
                "японский",
                "язык",
            ]),
            &[],
        );
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.language_to, "ja");
        assert_eq!(req.source_text, "кот");
    }

    #[test]
    fn test_ot_preposition_sets_source() {
        let req = parse(
            &tokens(&["переведи", "bonjour", "от", "французского", "на", "русский"]),
            &tokens(&["bonjour"]),
        );
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.language_from, "fr");
        assert_eq!(req.language_to, "ru");
        assert_eq!(req.source_text, "bonjour");
    }

    #[test]
    fn test_unknown_source_language_short_circuits() {
        let req = parse(
            &tokens(&["переведи", "слово", "с", "клингонского", "на", "русский"]),
            &[],
        );
        assert_eq!(req.outcome, TranslationOutcome::UnknownSourceLanguage);
        assert!(req.source_text.is_empty());
    }

    #[test]
    fn test_unknown_target_language_short_circuits() {
        let req = parse(&tokens(&["переведи", "кот", "на", "эльфийский"]), &[]);
        assert_eq!(req.outcome, TranslationOutcome::UnknownTargetLanguage);
        assert_eq!(req.language_from, "ru");
    }

    #[test]
    fn test_foreign_word_fallback() {
        // Stop-word stripping leaves nothing, but the raw utterance
        // still carries the foreign token.
        let req = parse(&tokens(&["переведи", "слово"]), &tokens(&["cat"]));
        assert_eq!(req.outcome, TranslationOutcome::Ok);
        assert_eq!(req.source_text, "cat");
    }

    #[test]
    fn test_empty_payload() {
        let req = parse(&tokens(&["переведи", "слово"]), &[]);
        assert_eq!(req.outcome, TranslationOutcome::EmptyPayload);
    }

    #[test]
    fn test_same_language_pair() {
        let req = parse(
            &tokens(&["переведи", "привет", "с", "русского", "на", "русский"]),
            &[],
        );
        assert_eq!(req.outcome, TranslationOutcome::SameLanguagePair);
    }

    #[test]
    fn test_ambiguous_same_language_with_foreign_words() {
        // ru -> ru by default while foreign words are present: cannot
        // tell whether a language was meant at all.
        let req = parse(
            &tokens(&["переведи", "hello", "на", "русский"]),
            &tokens(&["hello"]),
        );
        assert_eq!(req.outcome, TranslationOutcome::AmbiguousSameLanguage);
    }

    #[test]
    fn test_non_ru_same_pair_is_not_ambiguous() {
        let req = parse(
            &tokens(&["переведи", "hello", "с", "английского", "на", "английский"]),
            &tokens(&["hello"]),
        );
        assert_eq!(req.outcome, TranslationOutcome::SameLanguagePair);
    }

    #[test]
    fn test_last_language_phrase_wins() {
        let req = parse(
            &tokens(&["переведи", "кот", "на", "японский", "на", "французский"]),
            &[],
        );
        assert_eq!(req.language_to, "fr");
    }
}
