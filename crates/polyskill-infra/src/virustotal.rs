//! VirusTotalScanner -- concrete [`UrlScanner`] over the VirusTotal v3 API.
//!
//! A scan is two calls: submit the URL (`POST /api/v3/urls`) to obtain
//! an analysis id, then fetch the analysis (`GET /api/v3/analyses/{id}`)
//! and tally one vote per engine verdict. Engines whose `result` is
//! null have not finished voting and are skipped.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed
//! when building the `x-apikey` header.

use std::collections::BTreeMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use polyskill_core::scan::UrlScanner;
use polyskill_types::error::ScanError;
use polyskill_types::reputation::ReputationTally;

pub struct VirusTotalScanner {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    data: SubmitData,
}

#[derive(Deserialize)]
struct SubmitData {
    id: String,
}

#[derive(Deserialize)]
struct AnalysisResponse {
    data: AnalysisData,
}

#[derive(Deserialize)]
struct AnalysisData {
    attributes: AnalysisAttributes,
}

#[derive(Deserialize)]
struct AnalysisAttributes {
    /// Engine name -> per-engine verdict. BTreeMap keeps the tally
    /// order deterministic for a given report.
    #[serde(default)]
    results: BTreeMap<String, EngineResult>,
}

#[derive(Deserialize)]
struct EngineResult {
    /// Verdict category, or null while the engine is still scanning.
    result: Option<String>,
}

impl VirusTotalScanner {
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            api_key,
            base_url: "https://www.virustotal.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn submit(&self, url: &str) -> Result<String, ScanError> {
        let response = self
            .client
            .post(format!("{}/api/v3/urls", self.base_url))
            .header("x-apikey", self.api_key.expose_secret())
            .form(&[("url", url)])
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScanError::SubmissionFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| ScanError::SubmissionFailed(e.to_string()))?;
        Ok(body.data.id)
    }

    async fn analysis(&self, analysis_id: &str) -> Result<AnalysisResponse, ScanError> {
        let response = self
            .client
            .get(format!("{}/api/v3/analyses/{}", self.base_url, analysis_id))
            .header("x-apikey", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ScanError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScanError::ReportUnavailable(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ScanError::ReportUnavailable(e.to_string()))
    }
}

impl UrlScanner for VirusTotalScanner {
    async fn scan(&self, url: &str) -> Result<ReputationTally, ScanError> {
        let analysis_id = self.submit(url).await?;
        tracing::debug!(%analysis_id, "url submitted for analysis");

        let report = self.analysis(&analysis_id).await?;
        let mut tally = ReputationTally::new();
        for engine in report.data.attributes.results.values() {
            if let Some(verdict) = &engine.result {
                tally.record(verdict);
            }
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_parses() {
        let body: SubmitResponse =
            serde_json::from_str(r#"{"data": {"id": "u-abc123", "type": "analysis"}}"#).unwrap();
        assert_eq!(body.data.id, "u-abc123");
    }

    #[test]
    fn test_analysis_skips_null_verdicts() {
        let body: AnalysisResponse = serde_json::from_str(
            r#"{
                "data": {
                    "attributes": {
                        "results": {
                            "EngineA": {"result": "clean"},
                            "EngineB": {"result": null},
                            "EngineC": {"result": "clean"},
                            "EngineD": {"result": "unrated"}
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let mut tally = ReputationTally::new();
        for engine in body.data.attributes.results.values() {
            if let Some(verdict) = &engine.result {
                tally.record(verdict);
            }
        }
        assert_eq!(tally.get("clean"), Some(2));
        assert_eq!(tally.get("unrated"), Some(1));
        assert!(!tally.contains("null"));
    }

    #[test]
    fn test_analysis_without_results_is_empty() {
        let body: AnalysisResponse =
            serde_json::from_str(r#"{"data": {"attributes": {}}}"#).unwrap();
        assert!(body.data.attributes.results.is_empty());
    }
}
