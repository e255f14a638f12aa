//! Command-line configuration
//!
//! [`Args`] is what clap parses (flags and `AGROPLAN_*` environment
//! variables). [`DashboardConfig`] is the validated form the rest of the
//! program uses.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::error::ConfigError;
use crate::forecast::ForecastClient;
use crate::location::{
    CachedLocator, FixedLocator, IpLocator, Locator, PositionOptions, Unsupported, DEFAULT_GEO_URL,
};
use crate::resolver::{Resolver, ResolverConfig, DEFAULT_SENSOR_ID};
use crate::state::Coordinates;

pub const DEFAULT_FORECAST_URL: &str = "http://localhost:8000";

/// How the dashboard finds its position
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationMode {
    /// Use --lat/--lon if given, otherwise IP geolocation
    #[default]
    Auto,
    /// IP geolocation
    Ip,
    /// --lat/--lon only
    Fixed,
    /// No location capability; always fall back
    Off,
}

/// AgroPlan - agricultural planning dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "agroplan", version)]
#[command(about = "Agricultural planning dashboard with a live farm forecast")]
pub struct Args {
    /// Base URL of the forecast service
    #[arg(long, env = "AGROPLAN_FORECAST_URL", default_value = DEFAULT_FORECAST_URL)]
    pub forecast_url: String,

    /// Sensor identifier sent with forecast requests
    #[arg(long, env = "AGROPLAN_SENSOR_ID", default_value = DEFAULT_SENSOR_ID)]
    pub sensor_id: String,

    /// Location source
    #[arg(long, value_enum, default_value_t = LocationMode::Auto)]
    pub location: LocationMode,

    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// IP geolocation endpoint
    #[arg(long, env = "AGROPLAN_GEO_URL", default_value = DEFAULT_GEO_URL)]
    pub geo_url: String,

    /// Timeout for each HTTP request and the location lookup
    #[arg(long, default_value_t = 10)]
    pub http_timeout_secs: u64,

    /// Write logs here (filtered by RUST_LOG)
    #[arg(long, env = "AGROPLAN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Resolve once, print the result as JSON and exit
    #[arg(long)]
    pub once: bool,
}

/// Validated location source
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationSetting {
    Fixed(Coordinates),
    Ip,
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub forecast_url: String,
    pub geo_url: String,
    pub http_timeout: Duration,
    pub location: LocationSetting,
    pub resolver: ResolverConfig,
    pub log_file: Option<PathBuf>,
    pub once: bool,
}

/// The resolver the dashboard runs with
pub type DashboardResolver = Resolver<Locator, ForecastClient>;

impl TryFrom<Args> for DashboardConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        check_url("--forecast-url", &args.forecast_url)?;
        check_url("--geo-url", &args.geo_url)?;
        if args.http_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let coordinates = match (args.lat, args.lon) {
            (Some(latitude), Some(longitude)) => Some(check_coordinates(latitude, longitude)?),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteCoordinates),
        };

        let location = match (args.location, coordinates) {
            (LocationMode::Fixed, None) => return Err(ConfigError::MissingCoordinates),
            (LocationMode::Fixed | LocationMode::Auto, Some(c)) => LocationSetting::Fixed(c),
            (LocationMode::Auto | LocationMode::Ip, _) => LocationSetting::Ip,
            (LocationMode::Off, _) => LocationSetting::Unsupported,
        };

        let http_timeout = Duration::from_secs(args.http_timeout_secs);
        let position_options = PositionOptions {
            timeout: http_timeout,
            ..PositionOptions::default()
        };

        Ok(Self {
            forecast_url: args.forecast_url,
            geo_url: args.geo_url,
            http_timeout,
            location,
            resolver: ResolverConfig {
                sensor_id: args.sensor_id,
                position_options,
            },
            log_file: args.log_file,
            once: args.once,
        })
    }
}

impl DashboardConfig {
    /// Build the resolver: one shared HTTP client for both remote services.
    pub fn build_resolver(&self) -> Result<DashboardResolver, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()?;

        let locator = match self.location {
            LocationSetting::Fixed(coordinates) => Locator::Fixed(FixedLocator(coordinates)),
            LocationSetting::Ip => {
                Locator::Ip(CachedLocator::new(IpLocator::new(http.clone(), &self.geo_url)))
            }
            LocationSetting::Unsupported => Locator::Unsupported(Unsupported),
        };
        let forecast = ForecastClient::with_client(http, &self.forecast_url);

        Ok(Resolver::new(locator, forecast, self.resolver.clone()))
    }
}

fn check_url(flag: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            flag,
            url: url.to_string(),
        })
    }
}

fn check_coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, ConfigError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ConfigError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ConfigError::LongitudeOutOfRange(longitude));
    }
    Ok(Coordinates::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DashboardConfig, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("agroplan").chain(args.iter().copied()))
            .expect("arguments should parse");
        DashboardConfig::try_from(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).expect("valid");
        assert_eq!(config.location, LocationSetting::Ip);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.resolver.position_options.high_accuracy);
        assert_eq!(
            config.resolver.position_options.maximum_age,
            Duration::from_secs(600)
        );
        assert!(!config.once);
    }

    #[test]
    fn test_auto_with_coordinates_is_fixed() {
        let config = parse(&["--lat", "9.86", "--lon", "-83.92"]).expect("valid");
        assert_eq!(
            config.location,
            LocationSetting::Fixed(Coordinates::new(9.86, -83.92))
        );
    }

    #[test]
    fn test_fixed_requires_coordinates() {
        assert!(matches!(
            parse(&["--location", "fixed"]),
            Err(ConfigError::MissingCoordinates)
        ));
        assert!(matches!(
            parse(&["--location", "fixed", "--lat", "9.0"]),
            Err(ConfigError::IncompleteCoordinates)
        ));
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(matches!(
            parse(&["--lat", "91", "--lon", "0"]),
            Err(ConfigError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            parse(&["--lat", "0", "--lon", "-181"]),
            Err(ConfigError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_off_and_url_checks() {
        let config = parse(&["--location", "off"]).expect("valid");
        assert_eq!(config.location, LocationSetting::Unsupported);

        assert!(matches!(
            parse(&["--forecast-url", "localhost:8000"]),
            Err(ConfigError::InvalidUrl { flag: "--forecast-url", .. })
        ));
        assert!(matches!(
            parse(&["--http-timeout-secs", "0"]),
            Err(ConfigError::ZeroTimeout)
        ));
    }

    #[test]
    fn test_build_resolver_keeps_sensor_id() {
        let config = parse(&["--sensor-id", "finca-7", "--location", "off"]).expect("valid");
        let resolver = config.build_resolver().expect("resolver");
        assert_eq!(resolver.config().sensor_id, "finca-7");
    }
}
