//! Error types shared across the Polyskill crates.
//!
//! Collaborator clients surface their own enums (`ScanError`,
//! `TranslateError`, `GeoError`, `ImageError`); the dialog engine folds
//! every one of them into [`DialogError`] and recovers locally -- no
//! error class is fatal to the process and nothing is retried.

use thiserror::Error;

/// Turn-level error taxonomy. Always recovered into a user-facing reply
/// inside the dialog engine; never crosses the dispatch boundary.
#[derive(Debug, Error)]
pub enum DialogError {
    /// User input was ambiguous or incomplete; produces a re-prompt.
    #[error("clarification needed: {0}")]
    ClarificationNeeded(String),

    /// An external dependency failed or timed out; state unchanged.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The parser could not resolve a language name.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Errors from the URL reputation scanner.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan submission rejected: {0}")]
    SubmissionFailed(String),

    #[error("analysis report unavailable: {0}")]
    ReportUnavailable(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the translation collaborator.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The service echoed the input back unchanged; the language pair
    /// did not apply. Reported as a failure, never as a no-op success.
    #[error("language pair invalid")]
    LanguagePairInvalid,

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the geocoder, static map, and weather collaborators.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("no geocoder result for '{0}'")]
    NotFound(String),

    #[error("malformed geo response: {0}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the skill image store.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image upload rejected: {0}")]
    UploadFailed(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<ScanError> for DialogError {
    fn from(e: ScanError) -> Self {
        DialogError::UpstreamUnavailable(e.to_string())
    }
}

impl From<GeoError> for DialogError {
    fn from(e: GeoError) -> Self {
        DialogError::UpstreamUnavailable(e.to_string())
    }
}

impl From<ImageError> for DialogError {
    fn from(e: ImageError) -> Self {
        DialogError::UpstreamUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_error_display() {
        let err = DialogError::ClarificationNeeded("no url found".to_string());
        assert_eq!(err.to_string(), "clarification needed: no url found");
    }

    #[test]
    fn test_translate_error_display() {
        assert_eq!(
            TranslateError::LanguagePairInvalid.to_string(),
            "language pair invalid"
        );
    }

    #[test]
    fn test_scan_error_folds_into_upstream_unavailable() {
        let err: DialogError = ScanError::Transport("timeout".to_string()).into();
        assert!(matches!(err, DialogError::UpstreamUnavailable(_)));
    }
}
