//! Application state
//!
//! [`ForecastState`] is the live-conditions record the resolver fills in.
//! [`AppState`] wraps it with the dashboard's view state (active tab,
//! per-tab selection, units, notice visibility). Only the reducer mutates
//! either one.

use serde::Serialize;

use crate::fixtures;

/// Temperature shown when live data cannot be obtained (°C)
pub const FALLBACK_TEMPERATURE: f64 = 24.0;
/// Relative humidity shown when live data cannot be obtained (%)
pub const FALLBACK_HUMIDITY: f64 = 78.0;
/// Elevation shown when live data cannot be obtained (m)
pub const FALLBACK_ELEVATION: f64 = 1435.0;

/// Spinner frame period
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// A latitude/longitude pair in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Reference location (San José, Costa Rica) used until a fix arrives
    pub const REFERENCE: Coordinates = Coordinates {
        latitude: 9.9281,
        longitude: -84.0907,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside ±90 / ±180.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Current conditions taken from a forecast response
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ForecastReading {
    pub temperature: f64,
    pub humidity: f64,
    pub elevation: f64,
}

impl ForecastReading {
    pub const FALLBACK: ForecastReading = ForecastReading {
        temperature: FALLBACK_TEMPERATURE,
        humidity: FALLBACK_HUMIDITY,
        elevation: FALLBACK_ELEVATION,
    };
}

/// Where the resolver is in its single pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvePhase {
    #[default]
    NotStarted,
    AwaitingLocation,
    AwaitingForecast,
    Resolved,
}

/// Origin of the numbers currently in [`ForecastState`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    #[default]
    Pending,
    Live,
    Fallback,
}

/// Why live data was replaced by fallback values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveFailure {
    /// No location capability is configured on this host
    CapabilityUnavailable,
    /// The location request failed, was refused or timed out
    LocationUnavailable,
    /// Network error or non-success status from the forecast service
    FetchFailed,
    /// The forecast response was missing the expected series
    MalformedResponse,
}

impl ResolveFailure {
    /// Notice shown to the user for this failure
    pub fn notice(&self) -> &'static str {
        match self {
            ResolveFailure::CapabilityUnavailable => {
                "Location is not supported here; showing reference values"
            }
            ResolveFailure::LocationUnavailable => {
                "Location unavailable; showing reference location and default values"
            }
            ResolveFailure::FetchFailed | ResolveFailure::MalformedResponse => {
                "Forecast fetch failed; using default values"
            }
        }
    }
}

/// Live conditions for the farm view
///
/// `None` readings mean "pending". The record changes at most twice per
/// run: once for the location outcome and once for the forecast outcome.
/// Outcomes that arrive in any other phase are ignored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForecastState {
    pub coordinates: Coordinates,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub elevation: Option<f64>,
    pub error_message: Option<String>,
    pub failure: Option<ResolveFailure>,
    pub phase: ResolvePhase,
    pub source: ReadingSource,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self {
            coordinates: Coordinates::REFERENCE,
            temperature: None,
            humidity: None,
            elevation: None,
            error_message: None,
            failure: None,
            phase: ResolvePhase::NotStarted,
            source: ReadingSource::Pending,
        }
    }
}

impl ForecastState {
    /// Enter `AwaitingLocation`. Returns false if resolution already began.
    pub fn begin(&mut self) -> bool {
        if self.phase != ResolvePhase::NotStarted {
            return false;
        }
        self.phase = ResolvePhase::AwaitingLocation;
        true
    }

    /// Apply the location outcome.
    ///
    /// A fix moves to `AwaitingForecast`; a failure applies fallback values
    /// and finishes. Returns false when not awaiting a location.
    pub fn apply_location(&mut self, outcome: Result<Coordinates, ResolveFailure>) -> bool {
        if self.phase != ResolvePhase::AwaitingLocation {
            return false;
        }
        match outcome {
            Ok(coordinates) => {
                self.coordinates = coordinates;
                self.error_message = None;
                self.failure = None;
                self.phase = ResolvePhase::AwaitingForecast;
            }
            Err(failure) => {
                self.coordinates = Coordinates::REFERENCE;
                self.apply_fallback(failure);
            }
        }
        true
    }

    /// Apply the forecast outcome. Returns false when not awaiting a forecast.
    pub fn apply_forecast(&mut self, outcome: Result<ForecastReading, ResolveFailure>) -> bool {
        if self.phase != ResolvePhase::AwaitingForecast {
            return false;
        }
        match outcome {
            Ok(reading) => {
                self.set_reading(reading);
                self.error_message = None;
                self.failure = None;
                self.source = ReadingSource::Live;
                self.phase = ResolvePhase::Resolved;
            }
            Err(failure) => self.apply_fallback(failure),
        }
        true
    }

    fn apply_fallback(&mut self, failure: ResolveFailure) {
        self.set_reading(ForecastReading::FALLBACK);
        self.error_message = Some(failure.notice().to_string());
        self.failure = Some(failure);
        self.source = ReadingSource::Fallback;
        self.phase = ResolvePhase::Resolved;
    }

    fn set_reading(&mut self, reading: ForecastReading) {
        self.temperature = Some(reading.temperature);
        self.humidity = Some(reading.humidity);
        self.elevation = Some(reading.elevation);
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == ResolvePhase::Resolved
    }

    /// Whether the view should show a loading affordance
    pub fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            ResolvePhase::AwaitingLocation | ResolvePhase::AwaitingForecast
        )
    }
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn format(&self, celsius: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{:.1}°C", celsius),
            TempUnit::Fahrenheit => format!("{:.1}°F", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}

/// Dashboard tabs, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Farm,
    Climate,
    Crops,
    Market,
    Scenarios,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::Farm,
        Tab::Climate,
        Tab::Crops,
        Tab::Market,
        Tab::Scenarios,
        Tab::Reports,
    ];
    pub const COUNT: usize = Self::ALL.len();

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Farm => "Farm",
            Tab::Climate => "Climate",
            Tab::Crops => "Crops",
            Tab::Market => "Market",
            Tab::Scenarios => "Scenarios",
            Tab::Reports => "Reports",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Tab at `index`, if any (`1`-`7` keys map to 0-6)
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Number of selectable items on this tab
    pub fn item_count(&self) -> usize {
        match self {
            Tab::Overview => fixtures::AGENTS.len(),
            Tab::Farm => fixtures::WEEKLY_FORECAST.len(),
            Tab::Climate => fixtures::CLIMATE_SCENARIOS.len(),
            Tab::Crops => fixtures::CROPS.len(),
            Tab::Market => fixtures::MARKET_HORIZONS.len(),
            Tab::Scenarios => fixtures::PLAN_TYPES.len(),
            Tab::Reports => fixtures::REPORT_TEMPLATES.len(),
        }
    }

    /// Number of values the tab's secondary setting can take (0 if none)
    pub fn setting_count(&self) -> usize {
        match self {
            Tab::Climate => fixtures::CLIMATE_RANGE_MAX,
            Tab::Market => fixtures::TARGET_MARKETS.len(),
            Tab::Scenarios => fixtures::PLANNING_HORIZONS.len(),
            Tab::Reports => fixtures::REPORT_FORMATS.len(),
            Tab::Overview | Tab::Farm | Tab::Crops => 0,
        }
    }

    fn default_setting(&self) -> usize {
        match self {
            Tab::Climate => fixtures::CLIMATE_RANGE_DEFAULT - 1,
            Tab::Scenarios => fixtures::PLANNING_HORIZON_DEFAULT,
            _ => 0,
        }
    }
}

/// Everything the dashboard renders
#[derive(Clone, Debug)]
pub struct AppState {
    pub forecast: ForecastState,
    pub tab: Tab,
    /// Selected item per tab, indexed by [`Tab::index`]
    pub selected: [usize; Tab::COUNT],
    /// Secondary setting per tab (prediction window, target market,
    /// planning horizon, output format)
    pub settings: [usize; Tab::COUNT],
    pub unit: TempUnit,
    /// The user dismissed the current notice
    pub notice_dismissed: bool,
    /// Animation frame counter for the loading spinner
    pub tick_count: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            forecast: ForecastState::default(),
            tab: Tab::default(),
            selected: [0; Tab::COUNT],
            settings: Tab::ALL.map(|tab| tab.default_setting()),
            unit: TempUnit::default(),
            notice_dismissed: false,
            tick_count: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected item on `tab`
    pub fn selection(&self, tab: Tab) -> usize {
        self.selected[tab.index()]
    }

    /// Move the active tab's selection by `delta`, wrapping around.
    pub fn cycle_selection(&mut self, delta: isize) -> bool {
        let count = self.tab.item_count();
        if count < 2 {
            return false;
        }
        let slot = &mut self.selected[self.tab.index()];
        *slot = (*slot as isize + delta).rem_euclid(count as isize) as usize;
        true
    }

    /// Secondary setting on `tab`
    pub fn setting(&self, tab: Tab) -> usize {
        self.settings[tab.index()]
    }

    /// Move the active tab's secondary setting by `delta`, wrapping around.
    pub fn cycle_setting(&mut self, delta: isize) -> bool {
        let count = self.tab.setting_count();
        if count < 2 {
            return false;
        }
        let slot = &mut self.settings[self.tab.index()];
        *slot = (*slot as isize + delta).rem_euclid(count as isize) as usize;
        true
    }

    /// Climate prediction window in months
    pub fn climate_range(&self) -> usize {
        self.setting(Tab::Climate) + 1
    }

    /// The notice banner text, unless there is none or it was dismissed
    pub fn visible_notice(&self) -> Option<&str> {
        if self.notice_dismissed {
            return None;
        }
        self.forecast.error_message.as_deref()
    }
}
