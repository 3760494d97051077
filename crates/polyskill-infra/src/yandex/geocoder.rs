//! YandexGeocoder -- concrete [`Geocoder`] over the Yandex geocoder API.
//!
//! The geocoder envelope nests the answer seven levels deep, so the
//! response is walked with a JSON pointer instead of a typed mirror of
//! the whole structure. An empty `featureMember` list means the place
//! was not found.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use polyskill_core::geo::Geocoder;
use polyskill_types::error::GeoError;
use polyskill_types::geo::GeoPoint;

const POS_POINTER: &str = "/response/GeoObjectCollection/featureMember/0/GeoObject/Point/pos";

pub struct YandexGeocoder {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl YandexGeocoder {
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            api_key,
            base_url: "https://geocode-maps.yandex.ru".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl Geocoder for YandexGeocoder {
    async fn geocode(&self, place: &str) -> Result<GeoPoint, GeoError> {
        let response = self
            .client
            .get(format!("{}/1.x/", self.base_url))
            .query(&[
                ("format", "json"),
                ("apikey", self.api_key.expose_secret()),
                ("geocode", place),
            ])
            .send()
            .await
            .map_err(|e| GeoError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoError::Transport(format!("status {}", response.status())));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GeoError::MalformedResponse(e.to_string()))?;

        let pos = body
            .pointer(POS_POINTER)
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| GeoError::NotFound(place.to_string()))?;
        parse_pos(pos)
    }
}

/// The geocoder returns coordinates as `"lon lat"`.
fn parse_pos(pos: &str) -> Result<GeoPoint, GeoError> {
    let mut parts = pos.split_whitespace();
    let lon = parts.next().and_then(|p| p.parse::<f64>().ok());
    let lat = parts.next().and_then(|p| p.parse::<f64>().ok());
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(GeoPoint { lat, lon }),
        _ => Err(GeoError::MalformedResponse(format!("bad pos '{pos}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pos_is_lon_then_lat() {
        let point = parse_pos("37.617698 55.755864").unwrap();
        assert!((point.lat - 55.755864).abs() < 1e-9);
        assert!((point.lon - 37.617698).abs() < 1e-9);
    }

    #[test]
    fn test_parse_pos_rejects_garbage() {
        assert!(parse_pos("not coordinates").is_err());
        assert!(parse_pos("37.6").is_err());
    }

    #[test]
    fn test_pointer_walks_envelope() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{
                "response": {
                    "GeoObjectCollection": {
                        "featureMember": [
                            {"GeoObject": {"Point": {"pos": "37.617698 55.755864"}}}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            body.pointer(POS_POINTER).and_then(serde_json::Value::as_str),
            Some("37.617698 55.755864")
        );
    }

    #[test]
    fn test_pointer_misses_on_empty_feature_list() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{"response": {"GeoObjectCollection": {"featureMember": []}}}"#,
        )
        .unwrap();
        assert!(body.pointer(POS_POINTER).is_none());
    }
}
