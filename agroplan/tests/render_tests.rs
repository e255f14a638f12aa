//! Render tests for the full dashboard
//!
//! State is driven through the reducer the same way the runtime drives it,
//! then the root component is drawn into a test buffer.

use agroplan::action::Action;
use agroplan::components::{Component, Dashboard, DashboardProps};
use agroplan::effect::Effect;
use agroplan::reducer::reducer;
use agroplan::state::{AppState, Coordinates, ForecastReading, ResolveFailure, Tab};
use agroplan_runtime::{assert_emitted, testing::*, EventKind};

fn draw(state: &AppState) -> String {
    let mut render = RenderHarness::new(110, 36);
    render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        Dashboard.render(frame, frame.area(), props);
    })
}

fn dispatch(state: &mut AppState, actions: impl IntoIterator<Item = Action>) -> Vec<Effect> {
    actions
        .into_iter()
        .flat_map(|action| reducer(state, action).effects)
        .collect()
}

fn farm_state() -> AppState {
    let mut state = AppState::new();
    dispatch(&mut state, [Action::ResolveStart, Action::TabSelect(Tab::Farm)]);
    state
}

#[test]
fn test_farm_tab_while_locating() {
    let state = farm_state();
    let output = draw(&state);

    assert!(output.contains("Resolving location…"));
    assert!(output.contains("9.9281, -84.0907"));
    assert!(!output.contains("⚠"));
}

#[test]
fn test_farm_tab_live_conditions() {
    let mut state = farm_state();
    let effects = dispatch(
        &mut state,
        [
            Action::LocationDidResolve(Coordinates::new(9.86, -83.92)),
            Action::ForecastDidLoad(ForecastReading {
                temperature: 21.3,
                humidity: 80.0,
                elevation: 1450.0,
            }),
        ],
    );
    assert_eq!(
        effects,
        vec![Effect::FetchForecast(Coordinates::new(9.86, -83.92))]
    );

    let output = draw(&state);
    assert!(output.contains("21.3°C"));
    assert!(output.contains("80%"));
    assert!(output.contains("1450 m"));
    assert!(output.contains("9.8600, -83.9200"));
    assert!(!output.contains("⚠"));
}

#[test]
fn test_fetch_failure_shows_banner_until_dismissed() {
    let mut state = farm_state();
    dispatch(
        &mut state,
        [
            Action::LocationDidResolve(Coordinates::new(9.86, -83.92)),
            Action::ForecastDidFail(ResolveFailure::FetchFailed),
        ],
    );

    let output = draw(&state);
    assert!(output.contains("⚠ Forecast fetch failed; using default values"));
    assert!(output.contains("24.0°C"));
    assert!(output.contains("1435 m"));

    dispatch(&mut state, [Action::NoticeDismiss]);
    let output = draw(&state);
    assert!(!output.contains("Forecast fetch failed"));
    assert!(output.contains("24.0°C"));
}

#[test]
fn test_location_failure_banner() {
    let mut state = farm_state();
    let effects = dispatch(
        &mut state,
        [Action::LocationDidFail(ResolveFailure::LocationUnavailable)],
    );
    assert!(effects.is_empty());

    let output = draw(&state);
    assert!(output.contains("Location unavailable"));
    assert!(output.contains("9.9281, -84.0907"));
}

#[test]
fn test_fahrenheit_toggle() {
    let mut state = farm_state();
    dispatch(
        &mut state,
        [
            Action::LocationDidFail(ResolveFailure::CapabilityUnavailable),
            Action::UnitsToggle,
        ],
    );

    let output = draw(&state);
    assert!(output.contains("75.2°F"));
}

#[test]
fn test_tab_navigation_changes_page() {
    let mut state = AppState::new();
    let output = draw(&state);
    assert!(output.contains("AI Agents"));

    dispatch(&mut state, [Action::TabPrev]);
    assert_eq!(state.tab, Tab::Reports);
    let output = draw(&state);
    assert!(output.contains("Recent Reports"));

    dispatch(&mut state, [Action::TabNext, Action::TabNext, Action::TabNext]);
    assert_eq!(state.tab, Tab::Climate);
    let output = draw(&state);
    assert!(output.contains("Precipitation"));
}

fn press(state: &AppState, key_str: &str) -> Vec<Action> {
    let props = DashboardProps {
        state,
        is_focused: true,
    };
    Dashboard
        .handle_event(&EventKind::Key(key(key_str)), props)
        .into_iter()
        .collect()
}

#[test]
fn test_selection_follows_arrow_keys() {
    let mut state = AppState::new();
    let actions = press(&state, "4");
    assert_emitted!(actions, Action::TabSelect(Tab::Crops));
    dispatch(&mut state, actions);
    dispatch(&mut state, [Action::SelectionNext, Action::SelectionNext]);

    let output = draw(&state);
    assert!(output.contains("[Frijoles]"));
}

#[test]
fn test_up_down_cycle_page_settings() {
    let mut state = AppState::new();
    press(&state, "down").assert_first(Action::SettingNext);

    dispatch(&mut state, [Action::TabSelect(Tab::Reports), Action::SettingNext]);
    let output = draw(&state);
    assert!(output.contains("Formato: [Microsoft Word]"));

    dispatch(&mut state, [Action::TabSelect(Tab::Market), Action::SettingPrev]);
    let output = draw(&state);
    assert!(output.contains("[Mercado Regional]"));

    dispatch(&mut state, [Action::TabSelect(Tab::Scenarios)]);
    let output = draw(&state);
    assert!(output.contains("Horizonte: [5 Años]"));

    dispatch(&mut state, [Action::TabSelect(Tab::Climate), Action::SettingPrev]);
    assert_eq!(state.climate_range(), 5);
    let output = draw(&state);
    assert!(output.contains("Horizonte de Predicción: [5 meses]"));
}
