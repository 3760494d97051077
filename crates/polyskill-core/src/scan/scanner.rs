//! UrlScanner trait definition.

use polyskill_types::error::ScanError;
use polyskill_types::reputation::ReputationTally;

/// Port for the URL reputation service.
///
/// Implementations live in polyskill-infra (e.g. `VirusTotalScanner`).
pub trait UrlScanner: Send + Sync {
    /// Submit `url` for analysis and return the per-verdict engine tally.
    fn scan(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<ReputationTally, ScanError>> + Send;
}
