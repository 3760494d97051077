//! MyMemoryTranslator -- concrete [`TranslationProvider`] over the
//! MyMemory translation API (RapidAPI edition).
//!
//! MyMemory answers an unsupported or nonsensical language pair by
//! echoing the input back verbatim instead of failing. That echo is
//! detected here (whitespace-normalized comparison) and reported as
//! [`TranslateError::LanguagePairInvalid`], so the dialog layer never
//! presents an untranslated input as a translation.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use polyskill_core::translate::TranslationProvider;
use polyskill_types::error::TranslateError;

const RAPIDAPI_HOST: &str = "translated-mymemory---translation-memory.p.rapidapi.com";

pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            api_key,
            base_url: format!("https://{RAPIDAPI_HOST}"),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl TranslationProvider for MyMemoryTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(format!("{}/api/get", self.base_url))
            .query(&[
                ("langpair", format!("{from}|{to}").as_str()),
                ("q", text),
                ("mt", "1"),
                ("onlyprivate", "0"),
            ])
            .header("x-rapidapi-key", self.api_key.expose_secret())
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslateError::Transport(format!(
                "status {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        let translated = body.response_data.translated_text;
        if is_echo(text, &translated) {
            return Err(TranslateError::LanguagePairInvalid);
        }
        Ok(translated)
    }
}

/// True when the service returned the input unchanged up to whitespace.
fn is_echo(input: &str, output: &str) -> bool {
    normalize(input) == normalize(output)
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"responseData": {"translatedText": "hello", "match": 1}, "responseStatus": 200}"#,
        )
        .unwrap();
        assert_eq!(body.response_data.translated_text, "hello");
    }

    #[test]
    fn test_echo_detected_up_to_whitespace() {
        assert!(is_echo("привет мир", "привет  мир"));
        assert!(is_echo(" привет мир ", "привет мир"));
    }

    #[test]
    fn test_real_translation_is_not_an_echo() {
        assert!(!is_echo("привет", "hello"));
    }
}
