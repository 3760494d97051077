//! YandexStaticMap -- concrete [`StaticMapRenderer`] over the Yandex
//! static maps API.
//!
//! The "render" is just a URL: the static maps endpoint takes its
//! parameters in the query string, and the image store later fetches
//! the URL itself. One GET is issued here to confirm the crop actually
//! renders before the URL is handed on.

use std::time::Duration;

use polyskill_core::geo::StaticMapRenderer;
use polyskill_types::error::GeoError;
use polyskill_types::geo::GeoPoint;

/// Span of the crop in degrees. Tight enough to show a single place.
const SPAN: &str = "0.002,0.002";
/// Satellite layer with labels.
const LAYERS: &str = "sat,skl";

pub struct YandexStaticMap {
    client: reqwest::Client,
    base_url: String,
}

impl YandexStaticMap {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            base_url: "https://static-maps.yandex.ru".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn crop_url(&self, point: GeoPoint) -> String {
        format!(
            "{}/1.x/?ll={},{}&spn={}&l={}",
            self.base_url, point.lon, point.lat, SPAN, LAYERS
        )
    }
}

impl StaticMapRenderer for YandexStaticMap {
    async fn render(&self, point: GeoPoint) -> Result<String, GeoError> {
        let url = self.crop_url(point);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeoError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoError::MalformedResponse(format!(
                "map render failed with status {}",
                response.status()
            )));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_url_is_lon_comma_lat() {
        let map = YandexStaticMap::new(Duration::from_secs(1));
        let url = map.crop_url(GeoPoint { lat: 55.755864, lon: 37.617698 });
        assert!(url.contains("ll=37.617698,55.755864"));
        assert!(url.contains("spn=0.002,0.002"));
        assert!(url.contains("l=sat,skl"));
    }
}
