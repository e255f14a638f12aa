//! Reducer: (state, action) -> DispatchResult<Effect>
//!
//! All state changes happen here. Async work is only requested, as an
//! [`Effect`]; the main loop runs it and sends a `*Did*` action back.

use agroplan_runtime::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, ForecastState, Tab};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Resolution =====
        Action::ResolveStart => {
            if state.forecast.begin() {
                DispatchResult::changed_with(Effect::Locate)
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::LocationDidResolve(coordinates) => {
            if state.forecast.apply_location(Ok(coordinates)) {
                DispatchResult::changed_with(Effect::FetchForecast(coordinates))
            } else {
                tracing::debug!("Ignoring location fix outside AwaitingLocation");
                DispatchResult::unchanged()
            }
        }

        Action::LocationDidFail(failure) => settle(state, |s| s.apply_location(Err(failure))),

        Action::ForecastDidLoad(reading) => settle(state, |s| s.apply_forecast(Ok(reading))),

        Action::ForecastDidFail(failure) => settle(state, |s| s.apply_forecast(Err(failure))),

        // ===== View =====
        Action::TabNext => {
            let tab = state.tab.next();
            select_tab(state, tab)
        }
        Action::TabPrev => {
            let tab = state.tab.prev();
            select_tab(state, tab)
        }
        Action::TabSelect(tab) => select_tab(state, tab),

        Action::SelectionNext => changed_if(state.cycle_selection(1)),
        Action::SelectionPrev => changed_if(state.cycle_selection(-1)),
        Action::SettingNext => changed_if(state.cycle_setting(1)),
        Action::SettingPrev => changed_if(state.cycle_setting(-1)),

        Action::UnitsToggle => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::NoticeDismiss => {
            if state.visible_notice().is_some() {
                state.notice_dismissed = true;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates
            changed_if(state.forecast.is_pending())
        }

        // Handled by the main loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Apply a terminal outcome; a new notice is shown even if an earlier one
/// was dismissed.
fn settle(
    state: &mut AppState,
    apply: impl FnOnce(&mut ForecastState) -> bool,
) -> DispatchResult<Effect> {
    if apply(&mut state.forecast) {
        state.notice_dismissed = false;
        DispatchResult::changed()
    } else {
        tracing::debug!(phase = ?state.forecast.phase, "Ignoring late resolution result");
        DispatchResult::unchanged()
    }
}

fn select_tab(state: &mut AppState, tab: Tab) -> DispatchResult<Effect> {
    if state.tab == tab {
        return DispatchResult::unchanged();
    }
    state.tab = tab;
    DispatchResult::changed()
}

fn changed_if(changed: bool) -> DispatchResult<Effect> {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        Coordinates, ForecastReading, ReadingSource, ResolveFailure, ResolvePhase,
        FALLBACK_TEMPERATURE,
    };

    const READING: ForecastReading = ForecastReading {
        temperature: 21.3,
        humidity: 80.0,
        elevation: 1450.0,
    };

    #[test]
    fn test_resolve_start_requests_location_once() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::ResolveStart);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::Locate]);
        assert_eq!(state.forecast.phase, ResolvePhase::AwaitingLocation);

        let result = reducer(&mut state, Action::ResolveStart);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_location_fix_requests_forecast() {
        let mut state = AppState::default();
        reducer(&mut state, Action::ResolveStart);

        let fix = Coordinates::new(9.86, -83.92);
        let result = reducer(&mut state, Action::LocationDidResolve(fix));
        assert_eq!(result.effects, vec![Effect::FetchForecast(fix)]);
        assert_eq!(state.forecast.coordinates, fix);

        let result = reducer(&mut state, Action::ForecastDidLoad(READING));
        assert!(result.changed);
        assert_eq!(state.forecast.temperature, Some(21.3));
        assert_eq!(state.forecast.source, ReadingSource::Live);
    }

    #[test]
    fn test_location_failure_settles_without_fetch() {
        let mut state = AppState::default();
        reducer(&mut state, Action::ResolveStart);

        let result = reducer(
            &mut state,
            Action::LocationDidFail(ResolveFailure::LocationUnavailable),
        );
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.forecast.temperature, Some(FALLBACK_TEMPERATURE));
        assert!(state.visible_notice().is_some());
    }

    #[test]
    fn test_forecast_result_ignored_outside_awaiting_forecast() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ForecastDidLoad(READING));
        assert!(!result.changed);
        assert_eq!(state.forecast.temperature, None);

        reducer(&mut state, Action::ResolveStart);
        reducer(
            &mut state,
            Action::LocationDidResolve(Coordinates::new(1.0, 2.0)),
        );
        reducer(
            &mut state,
            Action::ForecastDidFail(ResolveFailure::FetchFailed),
        );

        // A late duplicate cannot overwrite the settled fallback
        let result = reducer(&mut state, Action::ForecastDidLoad(READING));
        assert!(!result.changed);
        assert_eq!(state.forecast.temperature, Some(FALLBACK_TEMPERATURE));
        assert_eq!(state.forecast.failure, Some(ResolveFailure::FetchFailed));
    }

    #[test]
    fn test_notice_dismiss() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::NoticeDismiss).changed);

        reducer(&mut state, Action::ResolveStart);
        reducer(
            &mut state,
            Action::LocationDidFail(ResolveFailure::CapabilityUnavailable),
        );
        assert!(reducer(&mut state, Action::NoticeDismiss).changed);
        assert_eq!(state.visible_notice(), None);
        assert!(state.forecast.error_message.is_some());
    }

    #[test]
    fn test_tabs_and_selection() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::TabNext).changed);
        assert_eq!(state.tab, Tab::Farm);
        assert!(reducer(&mut state, Action::TabPrev).changed);
        assert!(reducer(&mut state, Action::TabPrev).changed);
        assert_eq!(state.tab, Tab::Reports);
        assert!(!reducer(&mut state, Action::TabSelect(Tab::Reports)).changed);

        reducer(&mut state, Action::TabSelect(Tab::Climate));
        reducer(&mut state, Action::SelectionNext);
        assert_eq!(state.selection(Tab::Climate), 1);
        assert_eq!(state.selection(Tab::Reports), 0);
    }

    #[test]
    fn test_settings_only_on_tabs_that_have_one() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::SettingNext).changed);

        reducer(&mut state, Action::TabSelect(Tab::Reports));
        assert!(reducer(&mut state, Action::SettingPrev).changed);
        assert_eq!(state.setting(Tab::Reports), 3);
        assert_eq!(state.selection(Tab::Reports), 0);
    }

    #[test]
    fn test_tick_only_rerenders_while_pending() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);

        reducer(&mut state, Action::ResolveStart);
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_toggle_units() {
        let mut state = AppState::default();
        reducer(&mut state, Action::UnitsToggle);
        assert_eq!(state.unit, crate::state::TempUnit::Fahrenheit);
    }
}
