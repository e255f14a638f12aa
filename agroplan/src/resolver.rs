//! Location-and-forecast resolver
//!
//! One location request, then at most one forecast request. Every failure
//! becomes data: fallback numbers plus an `error_message` in the returned
//! [`ForecastState`]. Nothing here returns an error to the caller.
//!
//! The dashboard drives [`Resolver::locate`] and [`Resolver::fetch`] as two
//! separate tasks (see `Effect`), feeding the outcomes back through
//! [`ForecastState::apply_location`] and [`ForecastState::apply_forecast`].
//! [`Resolver::resolve`] composes the same steps for one-shot use.

use tokio_util::sync::CancellationToken;

use crate::forecast::{ForecastRequest, ForecastSource};
use crate::location::{LocationProvider, PositionOptions};
use crate::state::{Coordinates, ForecastReading, ForecastState, ResolveFailure};

/// Default sensor identifier sent with forecast requests
pub const DEFAULT_SENSOR_ID: &str = "agroplan-dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub sensor_id: String,
    pub position_options: PositionOptions,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            sensor_id: DEFAULT_SENSOR_ID.to_string(),
            position_options: PositionOptions::default(),
        }
    }
}

/// Resolves live farm conditions with fallback
#[derive(Debug)]
pub struct Resolver<L, F> {
    locator: L,
    forecast: F,
    config: ResolverConfig,
}

impl<L, F> Resolver<L, F>
where
    L: LocationProvider,
    F: ForecastSource,
{
    pub fn new(locator: L, forecast: F, config: ResolverConfig) -> Self {
        Self {
            locator,
            forecast,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Ask the location provider for a fix.
    pub async fn locate(&self) -> Result<Coordinates, ResolveFailure> {
        tracing::debug!(options = ?self.config.position_options, "Requesting location");
        match self
            .locator
            .current_position(&self.config.position_options)
            .await
        {
            Ok(coordinates) => {
                tracing::debug!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "Location resolved"
                );
                Ok(coordinates)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Location failed, falling back to reference values");
                Err(e.failure())
            }
        }
    }

    /// Fetch current conditions at `coordinates`.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<ForecastReading, ResolveFailure> {
        let request = ForecastRequest::new(self.config.sensor_id.clone(), coordinates);
        match self.forecast.forecast(&request).await {
            Ok(reading) => {
                tracing::debug!(
                    temperature = reading.temperature,
                    humidity = reading.humidity,
                    elevation = reading.elevation,
                    "Forecast loaded"
                );
                Ok(reading)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Forecast failed, using default values");
                Err(e.failure())
            }
        }
    }

    /// Run the full sequence and return the settled state.
    pub async fn resolve(&self) -> ForecastState {
        let mut state = ForecastState::default();
        state.begin();

        let location = self.locate().await;
        let located = location.is_ok();
        state.apply_location(location);

        if located {
            let reading = self.fetch(state.coordinates).await;
            state.apply_forecast(reading);
        }

        state
    }

    /// Like [`resolve`](Self::resolve), but gives up when `lifetime` is
    /// cancelled. In-flight requests are dropped and `None` is returned.
    pub async fn resolve_until(&self, lifetime: &CancellationToken) -> Option<ForecastState> {
        tokio::select! {
            biased;
            _ = lifetime.cancelled() => {
                tracing::debug!("Resolution cancelled");
                None
            }
            state = self.resolve() => Some(state),
        }
    }
}
