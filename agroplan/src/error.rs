//! Error types
//!
//! Location and forecast errors stay typed up to the resolver, which turns
//! them into a [`ResolveFailure`] plus fallback values. [`ConfigError`]
//! covers invalid command-line input and is reported before the TUI starts.

use std::time::Duration;

use crate::state::ResolveFailure;

/// Errors from a location provider.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// No location capability is configured.
    #[error("location is not supported on this host")]
    Unsupported,

    /// The provider answered but refused to locate us.
    #[error("location lookup denied: {0}")]
    Denied(String),

    /// No answer within the configured timeout.
    #[error("location lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The provider returned coordinates outside ±90/±180.
    #[error("location provider returned invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Transport failure talking to a remote provider.
    #[error("location request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl LocationError {
    /// The user-facing failure kind this error collapses into.
    pub fn failure(&self) -> ResolveFailure {
        match self {
            LocationError::Unsupported => ResolveFailure::CapabilityUnavailable,
            _ => ResolveFailure::LocationUnavailable,
        }
    }
}

/// Errors from the forecast service client.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// Network or timeout error.
    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("forecast service returned {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON shape.
    #[error("forecast response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body decoded but a required value was missing or empty.
    #[error("forecast response is missing {0}")]
    Malformed(&'static str),
}

impl ForecastError {
    /// The user-facing failure kind this error collapses into.
    pub fn failure(&self) -> ResolveFailure {
        match self {
            ForecastError::Request(_) | ForecastError::Status(_) => ResolveFailure::FetchFailed,
            ForecastError::Decode(_) | ForecastError::Malformed(_) => {
                ResolveFailure::MalformedResponse
            }
        }
    }
}

/// Invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("--location fixed requires both --lat and --lon")]
    MissingCoordinates,

    #[error("--lat and --lon must be given together")]
    IncompleteCoordinates,

    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),

    #[error("{flag} must be an http(s) URL, got {url:?}")]
    InvalidUrl { flag: &'static str, url: String },

    #[error("--http-timeout-secs must be at least 1")]
    ZeroTimeout,

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_errors_map_to_failures() {
        assert_eq!(
            LocationError::Unsupported.failure(),
            ResolveFailure::CapabilityUnavailable
        );
        assert_eq!(
            LocationError::Denied("user refused".into()).failure(),
            ResolveFailure::LocationUnavailable
        );
        assert_eq!(
            LocationError::Timeout(Duration::from_secs(10)).failure(),
            ResolveFailure::LocationUnavailable
        );
    }

    #[test]
    fn test_forecast_errors_map_to_failures() {
        assert_eq!(
            ForecastError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).failure(),
            ResolveFailure::FetchFailed
        );
        assert_eq!(
            ForecastError::Malformed("hourly.temperature_2m").failure(),
            ResolveFailure::MalformedResponse
        );
        let decode = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        assert_eq!(
            ForecastError::Decode(decode).failure(),
            ResolveFailure::MalformedResponse
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidUrl {
            flag: "--forecast-url",
            url: "ftp://x".into(),
        };
        assert_eq!(
            err.to_string(),
            "--forecast-url must be an http(s) URL, got \"ftp://x\""
        );
    }
}
