//! YandexWeather -- concrete [`WeatherProvider`] over the Yandex
//! weather forecast API.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use polyskill_core::geo::WeatherProvider;
use polyskill_types::error::GeoError;
use polyskill_types::geo::{GeoPoint, WeatherFact};

pub struct YandexWeather {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

#[derive(Deserialize)]
struct ForecastResponse {
    fact: Fact,
    yesterday: Yesterday,
}

#[derive(Deserialize)]
struct Fact {
    temp: i32,
    feels_like: i32,
    condition: String,
    wind_speed: f64,
}

#[derive(Deserialize)]
struct Yesterday {
    temp: i32,
}

impl YandexWeather {
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            api_key,
            base_url: "https://api.weather.yandex.ru".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl WeatherProvider for YandexWeather {
    async fn current(&self, point: GeoPoint) -> Result<WeatherFact, GeoError> {
        let response = self
            .client
            .get(format!("{}/v2/forecast", self.base_url))
            .query(&[
                ("lat", point.lat.to_string().as_str()),
                ("lon", point.lon.to_string().as_str()),
                ("extra", "true"),
            ])
            .header("X-Yandex-API-Key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| GeoError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeoError::Transport(format!("status {}", response.status())));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| GeoError::MalformedResponse(e.to_string()))?;

        Ok(WeatherFact {
            temp: body.fact.temp,
            feels_like: body.fact.feels_like,
            condition: body.fact.condition,
            wind_speed: body.fact.wind_speed,
            yesterday_temp: body.yesterday.temp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_parses_fact_and_yesterday() {
        let body: ForecastResponse = serde_json::from_str(
            r#"{
                "fact": {
                    "temp": -3,
                    "feels_like": -8,
                    "condition": "overcast",
                    "wind_speed": 4.2,
                    "humidity": 91
                },
                "yesterday": {"temp": -1},
                "forecasts": []
            }"#,
        )
        .unwrap();
        assert_eq!(body.fact.temp, -3);
        assert_eq!(body.fact.condition, "overcast");
        assert_eq!(body.yesterday.temp, -1);
    }
}
