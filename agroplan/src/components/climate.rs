use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Sparkline};
use ratatui::Frame;

use super::{metric_lines, panel, selector_line, setting_line, Component, PageProps, MUTED};
use crate::action::Action;
use crate::fixtures::{
    ClimateScenario, CLIMATE_METRICS, CLIMATE_MONTHLY, CLIMATE_SCENARIOS, MONTHS,
};
use crate::state::Tab;

/// Scenario explorer over the monthly climate series
pub struct ClimatePage;

impl Component<Action> for ClimatePage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let index = props.state.selection(Tab::Climate);
        let Some(scenario) = CLIMATE_SCENARIOS.get(index) else {
            return;
        };

        let months = props.state.climate_range();
        let [selector_area, rain_area, temp_area, metrics_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(CLIMATE_METRICS.len() as u16 + 2),
        ])
        .areas(area);

        let names = CLIMATE_SCENARIOS.iter().map(|s| s.name);
        let lines = vec![
            selector_line(names, index),
            Line::from(vec![
                Span::raw(scenario.description),
                Span::styled("  risk ", Style::default().fg(MUTED)),
                Span::styled(
                    scenario.risk.label(),
                    Style::default().fg(scenario.risk.color()).bold(),
                ),
            ]),
            setting_line("Horizonte de Predicción", format!("{} meses", months)),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel("Scenario")), selector_area);

        let bars: Vec<Bar> = precipitation(scenario)
            .into_iter()
            .zip(MONTHS)
            .take(months)
            .map(|(mm, month)| {
                Bar::default()
                    .value(mm)
                    .label(Line::from(month))
                    .text_value(mm.to_string())
            })
            .collect();
        let chart = BarChart::default()
            .block(panel("Precipitation (mm)"))
            .data(BarGroup::default().bars(&bars))
            .bar_width(4)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Blue))
            .value_style(Style::default().fg(Color::White).bg(Color::Blue));
        frame.render_widget(chart, rain_area);

        let mut temps = temperature(scenario);
        temps.truncate(months);
        let (low, high) = temps
            .iter()
            .fold((u64::MAX, 0), |(lo, hi), &t| (lo.min(t), hi.max(t)));
        let sparkline = Sparkline::default()
            .block(panel(&format!("Temperature {}–{}°C", low, high)))
            .data(&temps)
            .style(Style::default().fg(Color::Rgb(255, 170, 60)));
        frame.render_widget(sparkline, temp_area);

        frame.render_widget(
            Paragraph::new(metric_lines(&CLIMATE_METRICS)).block(panel("Climate Metrics")),
            metrics_area,
        );
    }
}

/// Monthly precipitation under a scenario, rounded to whole millimetres
pub fn precipitation(scenario: &ClimateScenario) -> Vec<u64> {
    CLIMATE_MONTHLY
        .iter()
        .map(|(_, mm)| (*mm as f64 * scenario.precipitation_factor).round() as u64)
        .collect()
}

/// Monthly mean temperature under a scenario, °C
pub fn temperature(scenario: &ClimateScenario) -> Vec<u64> {
    CLIMATE_MONTHLY
        .iter()
        .map(|(celsius, _)| (*celsius as f64 + scenario.temperature_offset).round() as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::CLIMATE_RANGE_MAX;
    use crate::state::AppState;
    use agroplan_runtime::testing::RenderHarness;

    #[test]
    fn test_scenario_scaling() {
        let drought = &CLIMATE_SCENARIOS[1];
        let rain = precipitation(drought);
        assert_eq!(rain[0], 27);
        assert_eq!(rain[9], 135);

        let heat = &CLIMATE_SCENARIOS[3];
        assert_eq!(temperature(heat)[0], 27);
        assert_eq!(precipitation(heat)[0], 45);
    }

    #[test]
    fn test_renders_selected_scenario() {
        let mut render = RenderHarness::new(100, 30);
        let mut state = AppState::new();
        state.selected[Tab::Climate.index()] = 2;

        let output = render.render_to_string_plain(|frame| {
            ClimatePage.render(frame, frame.area(), PageProps { state: &state });
        });

        assert!(output.contains("[Lluvias Intensas]"));
        assert!(output.contains("Aumento del 60%"));
        assert!(output.contains("Precipitation"));
        assert!(output.contains("Horizonte de Predicción: [6 meses]"));
        assert!(output.contains("Jun"));
        assert!(!output.contains("Jul"));
    }

    #[test]
    fn test_range_covers_whole_year_at_most() {
        let mut render = RenderHarness::new(100, 30);
        let mut state = AppState::new();
        state.settings[Tab::Climate.index()] = CLIMATE_RANGE_MAX - 1;

        let output = render.render_to_string_plain(|frame| {
            ClimatePage.render(frame, frame.area(), PageProps { state: &state });
        });

        assert!(output.contains("[12 meses]"));
        assert!(output.contains("Dic"));
    }
}
