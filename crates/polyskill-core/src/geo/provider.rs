//! Collaborator trait definitions for the weather and maps states.
//!
//! All four ports are synchronous request/response network calls with
//! no caching and no retry; implementations impose a bounded per-call
//! timeout so one slow dependency cannot stall a turn indefinitely.
//! Implementations live in polyskill-infra.

use polyskill_types::error::{GeoError, ImageError};
use polyskill_types::geo::{GeoPoint, WeatherFact};

/// Resolve a free-form place name to coordinates.
pub trait Geocoder: Send + Sync {
    fn geocode(
        &self,
        place: &str,
    ) -> impl std::future::Future<Output = Result<GeoPoint, GeoError>> + Send;
}

/// Render a satellite map crop around a point, returning a fetchable
/// image URL.
pub trait StaticMapRenderer: Send + Sync {
    fn render(
        &self,
        point: GeoPoint,
    ) -> impl std::future::Future<Output = Result<String, GeoError>> + Send;
}

/// Current weather at a point.
pub trait WeatherProvider: Send + Sync {
    fn current(
        &self,
        point: GeoPoint,
    ) -> impl std::future::Future<Output = Result<WeatherFact, GeoError>> + Send;
}

/// The skill's hosted image storage.
///
/// Uploaded map crops accumulate against a quota, so the maps state
/// prunes every image except the one it just attached.
pub trait ImageStore: Send + Sync {
    /// Upload a remote image by URL; returns the hosted image id.
    fn upload_by_url(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, ImageError>> + Send;

    /// Ids of all currently hosted images.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<String>, ImageError>> + Send;

    fn delete(
        &self,
        image_id: &str,
    ) -> impl std::future::Future<Output = Result<(), ImageError>> + Send;
}
