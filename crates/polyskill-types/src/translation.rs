//! Translation request produced by the request parser.

use serde::{Deserialize, Serialize};

use std::fmt;

/// How parsing a translation utterance ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationOutcome {
    /// Payload and both language codes resolved.
    Ok,
    /// The "from" language adjective is not in the language table.
    UnknownSourceLanguage,
    /// The "to" language adjective is not in the language table.
    UnknownTargetLanguage,
    /// Nothing left to translate after stripping, and no foreign words.
    EmptyPayload,
    /// Both languages resolved to the same code.
    SameLanguagePair,
    /// Both codes are "ru" but foreign words were present, so the user
    /// probably never meant to name a language at all.
    AmbiguousSameLanguage,
}

impl fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TranslationOutcome::Ok => "ok",
            TranslationOutcome::UnknownSourceLanguage => "unknown_source_language",
            TranslationOutcome::UnknownTargetLanguage => "unknown_target_language",
            TranslationOutcome::EmptyPayload => "empty_payload",
            TranslationOutcome::SameLanguagePair => "same_language_pair",
            TranslationOutcome::AmbiguousSameLanguage => "ambiguous_same_language",
        };
        write!(f, "{name}")
    }
}

/// Parser output: the substring to translate plus the language pair.
///
/// `language_from` / `language_to` hold ISO-639-1 codes when resolved;
/// on a table miss the outcome short-circuits before text extraction, so
/// a non-`Ok` request may carry an empty `source_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_text: String,
    pub language_from: String,
    pub language_to: String,
    pub outcome: TranslationOutcome,
}

impl TranslationRequest {
    /// A failed parse carrying only the outcome and whatever codes resolved.
    pub fn failed(
        outcome: TranslationOutcome,
        language_from: impl Into<String>,
        language_to: impl Into<String>,
    ) -> Self {
        Self {
            source_text: String::new(),
            language_from: language_from.into(),
            language_to: language_to.into(),
            outcome,
        }
    }
}
