//! Effects declared by the reducer and run by the main loop

use crate::state::Coordinates;

/// Task key for the location request
pub const LOCATE_TASK: &str = "locate";
/// Task key for the forecast request
pub const FORECAST_TASK: &str = "forecast";

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the location provider for a fix
    Locate,
    /// Fetch current conditions for the given coordinates
    FetchForecast(Coordinates),
}
