//! Location providers
//!
//! A [`LocationProvider`] answers one question: where are we? Which provider
//! runs is decided by configuration:
//!
//! - [`FixedLocator`]: coordinates given on the command line
//! - [`IpLocator`]: an IP geolocation lookup over HTTP
//! - [`Unsupported`]: no capability at all
//!
//! [`CachedLocator`] wraps any of them and reuses a fix younger than
//! [`PositionOptions::maximum_age`].

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::LocationError;
use crate::state::Coordinates;

/// Default IP geolocation endpoint
pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json/";

/// Options for a position request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionOptions {
    /// Ask the provider for its most precise fix
    pub high_accuracy: bool,
    /// Give up on a request after this long
    pub timeout: Duration,
    /// A cached fix at most this old is acceptable
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(10 * 60),
        }
    }
}

/// Source of the current position
pub trait LocationProvider: Send + Sync {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Always answers with the same coordinates
#[derive(Clone, Copy, Debug)]
pub struct FixedLocator(pub Coordinates);

impl LocationProvider for FixedLocator {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// No location capability
#[derive(Clone, Copy, Debug, Default)]
pub struct Unsupported;

impl LocationProvider for Unsupported {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// IP geolocation response (`ip-api.com` shape)
#[derive(Debug, Deserialize)]
struct IpLookup {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Locates the host by its public IP address
#[derive(Clone, Debug)]
pub struct IpLocator {
    http: reqwest::Client,
    url: String,
}

impl IpLocator {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    async fn lookup(&self, options: &PositionOptions) -> Result<Coordinates, LocationError> {
        let response = self
            .http
            .get(&self.url)
            .timeout(options.timeout)
            .send()
            .await?
            .error_for_status()?;
        let lookup: IpLookup = response.json().await?;

        if lookup.status != "success" {
            let reason = lookup.message.unwrap_or(lookup.status);
            return Err(LocationError::Denied(reason));
        }

        match (lookup.lat, lookup.lon) {
            (Some(latitude), Some(longitude)) => {
                let coordinates = Coordinates::new(latitude, longitude);
                if coordinates.is_valid() {
                    Ok(coordinates)
                } else {
                    Err(LocationError::InvalidCoordinates {
                        latitude,
                        longitude,
                    })
                }
            }
            _ => Err(LocationError::Denied("lookup returned no coordinates".into())),
        }
    }
}

impl LocationProvider for IpLocator {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        if options.high_accuracy {
            tracing::debug!("IP geolocation is city-level; high accuracy not available");
        }

        match tokio::time::timeout(options.timeout, self.lookup(options)).await {
            Ok(result) => result,
            Err(_) => Err(LocationError::Timeout(options.timeout)),
        }
    }
}

/// Reuses a previous fix while it is younger than `maximum_age`
///
/// The dashboard asks for a position once per run, so only callers that
/// hold one [`Resolver`](crate::resolver::Resolver) and call `resolve`
/// repeatedly ever hit the cache.
#[derive(Debug)]
pub struct CachedLocator<L> {
    inner: L,
    last_fix: Mutex<Option<(Instant, Coordinates)>>,
}

impl<L: LocationProvider> CachedLocator<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            last_fix: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: LocationProvider> LocationProvider for CachedLocator<L> {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        let mut last_fix = self.last_fix.lock().await;
        if let Some((taken_at, coordinates)) = *last_fix {
            if taken_at.elapsed() <= options.maximum_age {
                tracing::debug!(age = ?taken_at.elapsed(), "Reusing cached location fix");
                return Ok(coordinates);
            }
        }

        let coordinates = self.inner.current_position(options).await?;
        *last_fix = Some((Instant::now(), coordinates));
        Ok(coordinates)
    }
}

/// The provider chosen at startup
#[derive(Debug)]
pub enum Locator {
    Fixed(FixedLocator),
    Ip(CachedLocator<IpLocator>),
    Unsupported(Unsupported),
}

impl LocationProvider for Locator {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        match self {
            Locator::Fixed(locator) => locator.current_position(options).await,
            Locator::Ip(locator) => locator.current_position(options).await,
            Locator::Unsupported(locator) => locator.current_position(options).await,
        }
    }
}
