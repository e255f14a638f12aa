use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, LineGauge, Paragraph, Row, Sparkline, Table};
use ratatui::Frame;

use super::{change_span, panel, selector_line, setting_line, Component, PageProps, MUTED};
use crate::action::Action;
use crate::fixtures::{
    INTEGRATION_TIMELINE, PLANNING_HORIZONS, PLAN_SCENARIOS, PLAN_TYPES, STRATEGIC_OBJECTIVES,
};
use crate::state::Tab;

/// Strategic planning: plan types, objectives and outcome scenarios
pub struct ScenariosPage;

impl Component<Action> for ScenariosPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let index = props.state.selection(Tab::Scenarios);
        let Some(plan) = PLAN_TYPES.get(index) else {
            return;
        };

        let horizon = PLANNING_HORIZONS
            .get(props.state.setting(Tab::Scenarios))
            .copied()
            .unwrap_or(PLANNING_HORIZONS[0]);

        let [plan_area, objectives_area, scenarios_area, timeline_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(STRATEGIC_OBJECTIVES.len() as u16 * 2 + 2),
            Constraint::Length(PLAN_SCENARIOS.len() as u16 + 3),
            Constraint::Min(4),
        ])
        .areas(area);

        let label = Style::default().fg(MUTED);
        let lines = vec![
            selector_line(PLAN_TYPES.iter().map(|p| p.name), index),
            Line::from(vec![
                Span::styled("Alcance  ", label),
                Span::raw(plan.scope),
                Span::styled("   Duración  ", label),
                Span::raw(plan.duration),
                Span::styled("   Presupuesto  ", label),
                Span::raw(plan.budget).bold(),
                Span::styled("   Regiones  ", label),
                Span::raw(plan.regions.to_string()),
            ]),
            setting_line("Horizonte", horizon),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel("Plan")), plan_area);

        render_objectives(frame, objectives_area);
        render_scenarios(frame, scenarios_area);

        let readiness: Vec<u64> = INTEGRATION_TIMELINE.iter().map(|(_, pct)| *pct).collect();
        let first = INTEGRATION_TIMELINE[0];
        let last = INTEGRATION_TIMELINE[INTEGRATION_TIMELINE.len() - 1];
        let sparkline = Sparkline::default()
            .block(panel(&format!(
                "Integration {} {}% → {} {}%",
                first.0, first.1, last.0, last.1
            )))
            .data(&readiness)
            .max(100)
            .style(Style::default().fg(Color::Magenta));
        frame.render_widget(sparkline, timeline_area);
    }
}

fn render_objectives(frame: &mut Frame, area: Rect) {
    let block = panel("Objectives");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(
        STRATEGIC_OBJECTIVES
            .iter()
            .map(|_| Constraint::Length(2)),
    )
    .split(inner);

    for (objective, row) in STRATEGIC_OBJECTIVES.iter().zip(rows.iter()) {
        let [title_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
        let title = Line::from(vec![
            Span::styled(objective.title, Style::default().bold()),
            Span::styled(format!("  {}", objective.target), Style::default().fg(MUTED)),
            Span::styled(
                format!("  [{}]", objective.priority.label()),
                Style::default().fg(objective.priority.color()),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        let gauge = LineGauge::default()
            .ratio(f64::from(objective.progress) / 100.0)
            .label(format!("{:>3}% {}", objective.progress, objective.status))
            .filled_style(Style::default().fg(objective.priority.color()));
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_scenarios(frame: &mut Frame, area: Rect) {
    let rows = PLAN_SCENARIOS.iter().map(|scenario| {
        Row::new(vec![
            Cell::from(scenario.name),
            Cell::from(format!("{}%", scenario.probability)),
            Cell::from(scenario.impact),
            Cell::from(change_span(scenario.productivity)),
            Cell::from(change_span(scenario.revenue)),
            Cell::from(scenario.description),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Scenario", "Prob", "Impact", "Prod", "Revenue", ""])
            .style(Style::default().fg(MUTED)),
    )
    .block(panel("Outcomes"));
    frame.render_widget(table, area);
}
