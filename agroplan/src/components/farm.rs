//! Farm tab: live conditions for the resolved location, plus the farm
//! profile, weekly outlook and today's recommendations.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::{panel, selected_row_style, Component, PageProps, ACCENT, MUTED, SPINNERS};
use crate::action::Action;
use crate::fixtures::{FARM_PROFILE, KEY_METRICS, TODAY_RECOMMENDATIONS, WEEKLY_FORECAST};
use crate::state::{AppState, ReadingSource, ResolvePhase, Tab, TempUnit};
use crate::thresholds::{HumidityBand, TemperatureBand};

pub struct FarmPage;

impl Component<Action> for FarmPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let [top, weekly_area, recs_area] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(WEEKLY_FORECAST.len() as u16 + 3),
            Constraint::Min(3),
        ])
        .areas(area);
        let [live_area, profile_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(top);

        render_live(frame, live_area, state);
        render_profile(frame, profile_area);
        render_weekly(frame, weekly_area, state);
        render_recommendations(frame, recs_area);
    }
}

fn render_live(frame: &mut Frame, area: Rect, state: &AppState) {
    let forecast = &state.forecast;
    let label = Style::default().fg(MUTED);

    let lines = match (forecast.temperature, forecast.humidity, forecast.elevation) {
        (Some(temperature), Some(humidity), Some(elevation)) => {
            let temp_band = TemperatureBand::from_celsius(temperature);
            let humidity_band = HumidityBand::from_percent(humidity);
            let (source, source_color) = match forecast.source {
                ReadingSource::Live => ("live", Color::Green),
                ReadingSource::Fallback => ("default values", Color::Yellow),
                ReadingSource::Pending => ("pending", MUTED),
            };
            vec![
                Line::from(vec![
                    Span::styled("Temperature  ", label),
                    Span::styled(
                        state.unit.format(temperature),
                        Style::default().fg(temp_band.color()).bold(),
                    ),
                    Span::styled(format!("  {}", temp_band.label()), label),
                ]),
                Line::from(vec![
                    Span::styled("Humidity     ", label),
                    Span::styled(
                        format!("{:.0}%", humidity),
                        Style::default().fg(humidity_band.color()).bold(),
                    ),
                    Span::styled(format!("  {}", humidity_band.label()), label),
                ]),
                Line::from(vec![
                    Span::styled("Elevation    ", label),
                    Span::raw(format!("{:.0} m", elevation)),
                ]),
                coordinates_line(state),
                Line::from(vec![
                    Span::styled("Source       ", label),
                    Span::styled(source, Style::default().fg(source_color)),
                ]),
            ]
        }
        _ => {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            let status = match forecast.phase {
                ResolvePhase::NotStarted => "Waiting to start…",
                ResolvePhase::AwaitingLocation => "Resolving location…",
                _ => "Fetching forecast…",
            };
            vec![
                Line::from(vec![
                    Span::styled(format!("{} ", spinner), Style::default().fg(Color::Yellow)),
                    Span::styled(status, Style::default().fg(Color::Yellow)),
                ]),
                coordinates_line(state),
            ]
        }
    };

    let title = match state.unit {
        TempUnit::Celsius => "Live Conditions °C",
        TempUnit::Fahrenheit => "Live Conditions °F",
    };
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn coordinates_line(state: &AppState) -> Line<'static> {
    let coords = state.forecast.coordinates;
    Line::from(vec![
        Span::styled("Location     ", Style::default().fg(MUTED)),
        Span::raw(format!("{:.4}, {:.4}", coords.latitude, coords.longitude)),
    ])
}

fn render_profile(frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(MUTED);
    let mut lines = vec![
        Line::from(vec![Span::styled("Región  ", label), Span::raw(FARM_PROFILE.region)]),
        Line::from(vec![Span::styled("Suelo   ", label), Span::raw(FARM_PROFILE.soil_type)]),
        Line::from(vec![
            Span::styled("Clima   ", label),
            Span::raw(FARM_PROFILE.microclimate),
        ]),
    ];
    lines.extend(KEY_METRICS.iter().map(|metric| {
        Line::from(vec![
            Span::styled(format!("{:<18}", metric.label), label),
            Span::styled(metric.value, Style::default().fg(metric.status.color()).bold()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(panel("Farm Profile")), area);
}

fn render_weekly(frame: &mut Frame, area: Rect, state: &AppState) {
    let selected = state.selection(Tab::Farm);
    let rows = WEEKLY_FORECAST.iter().enumerate().map(|(i, day)| {
        let band = TemperatureBand::from_celsius(day.temperature);
        let row = Row::new(vec![
            Cell::from(day.day),
            Cell::from(state.unit.format(day.temperature))
                .style(Style::default().fg(band.color())),
            Cell::from(format!("{} mm", day.rain_mm)),
            Cell::from(format!("{:.0}%", day.humidity)),
            Cell::from(day.recommendation),
        ]);
        if i == selected {
            row.style(selected_row_style())
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Day", "Temp", "Rain", "Humidity", "Advice"])
            .style(Style::default().fg(MUTED)),
    )
    .block(panel("Weekly Outlook"));

    frame.render_widget(table, area);
}

fn render_recommendations(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for rec in TODAY_RECOMMENDATIONS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", rec.priority.label()),
                Style::default().fg(rec.priority.color()).bold(),
            ),
            Span::styled(rec.title, Style::default().bold()),
            Span::styled(format!("  {}", rec.category), Style::default().fg(MUTED)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(format!("    {} ", rec.description)),
            Span::styled(format!("→ {}", rec.action), Style::default().fg(ACCENT)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Today"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Coordinates, ForecastReading, ResolveFailure};
    use agroplan_runtime::testing::RenderHarness;

    fn draw(state: &AppState) -> String {
        let mut render = RenderHarness::new(110, 34);
        render.render_to_string_plain(|frame| {
            FarmPage.render(frame, frame.area(), PageProps { state });
        })
    }

    #[test]
    fn test_pending_shows_spinner_status() {
        let mut state = AppState::new();
        state.forecast.begin();
        let output = draw(&state);
        assert!(output.contains("Resolving location…"));
        assert!(output.contains("9.9281, -84.0907"));

        state
            .forecast
            .apply_location(Ok(Coordinates::new(9.86, -83.92)));
        let output = draw(&state);
        assert!(output.contains("Fetching forecast…"));
        assert!(output.contains("9.8600, -83.9200"));
    }

    #[test]
    fn test_live_reading() {
        let mut state = AppState::new();
        state.forecast.begin();
        state
            .forecast
            .apply_location(Ok(Coordinates::new(9.86, -83.92)));
        state.forecast.apply_forecast(Ok(ForecastReading {
            temperature: 21.3,
            humidity: 80.0,
            elevation: 1450.0,
        }));

        let output = draw(&state);
        assert!(output.contains("21.3°C"));
        assert!(output.contains("80%"));
        assert!(output.contains("1450 m"));
        assert!(output.contains("live"));
        assert!(output.contains("mild"));
    }

    #[test]
    fn test_fallback_reading() {
        let mut state = AppState::new();
        state.forecast.begin();
        state
            .forecast
            .apply_location(Err(ResolveFailure::LocationUnavailable));

        let output = draw(&state);
        assert!(output.contains("24.0°C"));
        assert!(output.contains("78%"));
        assert!(output.contains("1435 m"));
        assert!(output.contains("default values"));
    }

    #[test]
    fn test_fahrenheit() {
        let mut state = AppState::new();
        state.unit = TempUnit::Fahrenheit;
        state.forecast.begin();
        state
            .forecast
            .apply_location(Err(ResolveFailure::CapabilityUnavailable));

        let output = draw(&state);
        assert!(output.contains("75.2°F"));
        assert!(output.contains("Live Conditions °F"));
    }
}
