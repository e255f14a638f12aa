//! Forecast service client
//!
//! One endpoint: `POST {base_url}/forecast_data` with the sensor id and
//! coordinates. The first hourly temperature and humidity values are taken
//! as current conditions; elevation is used as-is.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::state::{Coordinates, ForecastReading};

/// Request body for `/forecast_data`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub sensor_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ForecastRequest {
    pub fn new(sensor_id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Response body from `/forecast_data`
///
/// Everything is optional so that a missing field is reported as
/// [`ForecastError::Malformed`] instead of a generic decode error.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
    #[serde(default)]
    pub elevation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<f64>,
}

impl ForecastResponse {
    /// Current conditions: the first value of each hourly series.
    pub fn current(&self) -> Result<ForecastReading, ForecastError> {
        let hourly = self
            .hourly
            .as_ref()
            .ok_or(ForecastError::Malformed("hourly"))?;
        let temperature = *hourly
            .temperature_2m
            .first()
            .ok_or(ForecastError::Malformed("hourly.temperature_2m"))?;
        let humidity = *hourly
            .relative_humidity_2m
            .first()
            .ok_or(ForecastError::Malformed("hourly.relative_humidity_2m"))?;
        let elevation = self
            .elevation
            .ok_or(ForecastError::Malformed("elevation"))?;

        Ok(ForecastReading {
            temperature,
            humidity,
            elevation,
        })
    }
}

/// Anything that can answer a forecast request
pub trait ForecastSource: Send + Sync {
    fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> impl Future<Output = Result<ForecastReading, ForecastError>> + Send;
}

/// HTTP client for the forecast service
#[derive(Clone, Debug)]
pub struct ForecastClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ForecastClient {
    /// Build a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/forecast_data", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ForecastSource for ForecastClient {
    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastReading, ForecastError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            sensor_id = %request.sensor_id,
            latitude = request.latitude,
            longitude = request.longitude,
            "Requesting forecast"
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status));
        }

        let body = response.bytes().await?;
        let data: ForecastResponse = serde_json::from_slice(&body)?;
        data.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).expect("valid json")
    }

    #[test]
    fn test_current_takes_first_hourly_values() {
        let response = parse(
            r#"{"hourly":{"temperature_2m":[21.3,22.0],"relative_humidity_2m":[80,75]},"elevation":1450}"#,
        );
        let reading = response.current().expect("reading");
        assert_eq!(reading.temperature, 21.3);
        assert_eq!(reading.humidity, 80.0);
        assert_eq!(reading.elevation, 1450.0);
    }

    #[test]
    fn test_missing_or_empty_series_is_malformed() {
        let cases = [
            (r#"{"elevation":1450}"#, "hourly"),
            (
                r#"{"hourly":{"temperature_2m":[],"relative_humidity_2m":[80]},"elevation":1450}"#,
                "hourly.temperature_2m",
            ),
            (
                r#"{"hourly":{"temperature_2m":[20.0]},"elevation":1450}"#,
                "hourly.relative_humidity_2m",
            ),
            (
                r#"{"hourly":{"temperature_2m":[20.0],"relative_humidity_2m":[80]}}"#,
                "elevation",
            ),
        ];

        for (json, field) in cases {
            match parse(json).current() {
                Err(ForecastError::Malformed(missing)) => assert_eq!(missing, field),
                other => panic!("expected Malformed({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_request_body_shape() {
        let request = ForecastRequest::new("sensor-7", Coordinates::new(9.86, -83.92));
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"sensor_id": "sensor-7", "latitude": 9.86, "longitude": -83.92})
        );
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ForecastClient::with_client(reqwest::Client::new(), "http://host:8000/");
        assert_eq!(client.endpoint(), "http://host:8000/forecast_data");
    }
}
