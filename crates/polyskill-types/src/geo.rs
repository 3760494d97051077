//! Geographic value objects shared by the weather and maps states.

use serde::{Deserialize, Serialize};

/// A point on the map, as returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Current weather at a point, plus yesterday's temperature for contrast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFact {
    /// Current temperature, degrees Celsius.
    pub temp: i32,
    /// Perceived temperature, degrees Celsius.
    pub feels_like: i32,
    /// Provider condition code (e.g. "clear", "overcast").
    pub condition: String,
    /// Wind speed, m/s.
    pub wind_speed: f64,
    /// Yesterday's temperature at the same point.
    pub yesterday_temp: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_serde() {
        let point = GeoPoint { lat: 55.75, lon: 37.62 };
        let json = serde_json::to_string(&point).unwrap();
        let parsed: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, point);
    }
}
