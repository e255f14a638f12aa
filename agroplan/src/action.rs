//! Dashboard actions
//!
//! Intents and results share a name prefix so they land in one category:
//! `ResolveStart` starts resolution, `LocationDid*` and `ForecastDid*` carry
//! the outcomes of the two async steps back into the store.

use agroplan_runtime::ActionSummary;

use crate::state::{Coordinates, ForecastReading, ResolveFailure, Tab};

/// Application actions, categories inferred from their names
///
/// - `resolve`: ResolveStart
/// - `location`: LocationDidResolve, LocationDidFail
/// - `forecast`: ForecastDidLoad, ForecastDidFail
/// - `tab`, `selection`, `setting`, `units`, `notice`: view changes
/// - uncategorized: Tick, Quit
#[derive(agroplan_runtime::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Resolution =====
    /// Intent: begin the one-time location + forecast resolution
    ResolveStart,

    /// Result: the location provider returned a fix
    LocationDidResolve(Coordinates),

    /// Result: no fix (unsupported, refused, timed out)
    LocationDidFail(ResolveFailure),

    /// Result: forecast loaded
    ForecastDidLoad(ForecastReading),

    /// Result: forecast request or payload failed
    ForecastDidFail(ResolveFailure),

    // ===== View =====
    TabNext,
    TabPrev,
    TabSelect(Tab),
    SelectionNext,
    SelectionPrev,
    /// Cycle the active tab's secondary setting
    SettingNext,
    SettingPrev,
    /// Switch between °C and °F
    UnitsToggle,
    /// Hide the notice banner
    NoticeDismiss,

    // ===== Global =====
    /// Spinner animation frame
    Tick,
    Quit,
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::LocationDidResolve(c) => {
                format!("LocationDidResolve({:.4}, {:.4})", c.latitude, c.longitude)
            }
            Action::ForecastDidLoad(r) => format!(
                "ForecastDidLoad {{ temp: {:.1}°C, humidity: {:.0}% }}",
                r.temperature, r.humidity
            ),
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agroplan_runtime::Action as _;

    #[test]
    fn test_categories() {
        assert_eq!(Action::ResolveStart.category(), Some("resolve"));
        assert!(Action::LocationDidFail(ResolveFailure::LocationUnavailable).is_location());
        assert!(Action::ForecastDidFail(ResolveFailure::FetchFailed).is_forecast());
        assert!(Action::TabSelect(Tab::Farm).is_tab());
        assert_eq!(Action::NoticeDismiss.category(), Some("notice"));
        assert!(Action::SettingPrev.is_setting());
        assert_eq!(Action::Quit.category(), None);
    }

    #[test]
    fn test_summary_is_compact() {
        let action = Action::LocationDidResolve(Coordinates::new(9.92812345, -84.0907));
        assert_eq!(action.summary(), "LocationDidResolve(9.9281, -84.0907)");
        assert_eq!(action.name(), "LocationDidResolve");
    }
}
