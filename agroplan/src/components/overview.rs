use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Gauge, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use super::{panel, selected_row_style, Component, PageProps, ACCENT, MUTED};
use crate::action::Action;
use crate::fixtures::{AgentStatus, AlertKind, AGENTS, ALERTS, SEASON};
use crate::state::Tab;

/// Season summary, agent roster and alerts
pub struct OverviewPage;

impl Component<Action> for OverviewPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let selected = props.state.selection(Tab::Overview);

        let [season_area, agents_area, detail_area, alerts_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(AGENTS.len() as u16 + 3),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .areas(area);

        render_season(frame, season_area);
        render_agents(frame, agents_area, selected);
        render_agent_detail(frame, detail_area, selected);
        render_alerts(frame, alerts_area);
    }
}

fn render_season(frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(MUTED);
    let lines = vec![
        Line::from(vec![
            Span::styled("Región  ", label),
            Span::raw(SEASON.region),
            Span::styled("   Temporada  ", label),
            Span::raw(SEASON.season),
            Span::styled("   Inicio  ", label),
            Span::raw(SEASON.start),
        ]),
        Line::from(vec![
            Span::styled("Área total  ", label),
            Span::raw(SEASON.total_area).bold(),
            Span::styled("   Valor estimado  ", label),
            Span::styled(SEASON.estimated_value, Style::default().fg(ACCENT).bold()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Season")), area);
}

fn status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Active => Color::Green,
        AgentStatus::Processing => Color::Yellow,
        AgentStatus::Ready => Color::Cyan,
    }
}

fn render_agents(frame: &mut Frame, area: Rect, selected: usize) {
    let rows = AGENTS.iter().enumerate().map(|(i, agent)| {
        let row = Row::new(vec![
            Cell::from(agent.name),
            Cell::from(agent.status.label()).style(Style::default().fg(status_color(agent.status))),
            Cell::from(format!("{}%", agent.accuracy)),
            Cell::from(agent.description),
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
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(vec!["Agent", "Status", "Accuracy", "Role"]).style(Style::default().fg(MUTED)))
    .block(panel("AI Agents"));

    frame.render_widget(table, area);
}

fn render_agent_detail(frame: &mut Frame, area: Rect, selected: usize) {
    let Some(agent) = AGENTS.get(selected) else {
        return;
    };
    let gauge = Gauge::default()
        .block(panel(agent.name))
        .gauge_style(Style::default().fg(status_color(agent.status)))
        .ratio(f64::from(agent.accuracy) / 100.0)
        .label(format!("accuracy {}%", agent.accuracy));
    frame.render_widget(gauge, area);
}

fn render_alerts(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = ALERTS
        .iter()
        .map(|alert| {
            let (icon, color) = match alert.kind {
                AlertKind::Warning => ("▲", Color::Yellow),
                AlertKind::Success => ("●", Color::Green),
                AlertKind::Info => ("i", Color::Cyan),
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color).bold()),
                Span::raw(alert.message),
                Span::styled(
                    format!("  [{}]", alert.priority.label()),
                    Style::default().fg(alert.priority.color()),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Alerts"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use agroplan_runtime::testing::RenderHarness;

    #[test]
    fn test_renders_agents_and_alerts() {
        let mut render = RenderHarness::new(110, 30);
        let mut state = AppState::new();
        state.selected[Tab::Overview.index()] = 2;

        let output = render.render_to_string_plain(|frame| {
            OverviewPage.render(frame, frame.area(), PageProps { state: &state });
        });

        assert!(output.contains("Climate Forecaster"));
        assert!(output.contains("Report Generator"));
        assert!(output.contains("accuracy 91%"));
        assert!(output.contains("Posible sequía"));
    }
}
