//! TranslationProvider trait definition.

use polyskill_types::error::TranslateError;

/// Port for the external translation service.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in polyskill-infra (e.g. `MyMemoryTranslator`).
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `from` to `to` (ISO-639-1 codes).
    ///
    /// A service response equal to the input after whitespace
    /// normalization must surface as
    /// [`TranslateError::LanguagePairInvalid`], never as a successful
    /// no-op translation.
    fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> impl std::future::Future<Output = Result<String, TranslateError>> + Send;
}
