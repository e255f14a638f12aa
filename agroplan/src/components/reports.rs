use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::{
    metric_lines, panel, selector_line, setting_line, Component, PageProps, ACCENT, MUTED,
};
use crate::action::Action;
use crate::fixtures::{
    CONTENT_SECTIONS, RECENT_REPORTS, REPORT_FORMATS, REPORT_METRICS, REPORT_TEMPLATES,
};
use crate::state::Tab;

pub struct ReportsPage;

impl Component<Action> for ReportsPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let index = props.state.selection(Tab::Reports);
        let Some(template) = REPORT_TEMPLATES.get(index) else {
            return;
        };

        let format = REPORT_FORMATS
            .get(props.state.setting(Tab::Reports))
            .copied()
            .unwrap_or(REPORT_FORMATS[0]);

        let [template_area, middle, recent_area] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(CONTENT_SECTIONS.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .areas(area);
        let [sections_area, metrics_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(middle);

        let label = Style::default().fg(MUTED);
        let lines = vec![
            selector_line(REPORT_TEMPLATES.iter().map(|t| t.name), index),
            Line::from(template.description),
            Line::from(vec![
                Span::styled("Extensión  ", label),
                Span::raw(template.pages),
                Span::styled("   Audiencia  ", label),
                Span::raw(template.audience),
            ]),
            setting_line("Formato", format),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel("Template")), template_area);

        let section_lines: Vec<Line> = CONTENT_SECTIONS
            .iter()
            .map(|section| {
                let (mark, color) = if section.included {
                    ("[x]", ACCENT)
                } else {
                    ("[ ]", MUTED)
                };
                Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(color)),
                    Span::raw(format!("{:<28}", section.name)),
                    Span::styled(format!("IA {}%", section.ai_generated), label),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(section_lines).block(panel("Content")),
            sections_area,
        );

        frame.render_widget(
            Paragraph::new(metric_lines(&REPORT_METRICS)).block(panel("Report Metrics")),
            metrics_area,
        );

        render_recent(frame, recent_area);
    }
}

fn render_recent(frame: &mut Frame, area: Rect) {
    let rows = RECENT_REPORTS.iter().map(|report| {
        let status_color = if report.status == "Completado" {
            Color::Green
        } else {
            Color::Yellow
        };
        Row::new(vec![
            Cell::from(report.title),
            Cell::from(report.kind),
            Cell::from(report.date),
            Cell::from(report.status).style(Style::default().fg(status_color)),
            Cell::from(report.downloads.to_string()),
            Cell::from(report.format),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(5),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec!["Report", "Type", "Date", "Status", "DL", "Format"])
            .style(Style::default().fg(MUTED).bold()),
    )
    .block(panel("Recent Reports"));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use agroplan_runtime::testing::RenderHarness;

    #[test]
    fn test_renders_template_and_history() {
        let mut render = RenderHarness::new(120, 26);
        let mut state = AppState::new();
        state.selected[Tab::Reports.index()] = 1;

        let output = render.render_to_string_plain(|frame| {
            ReportsPage.render(frame, frame.area(), PageProps { state: &state });
        });

        assert!(output.contains("[Reporte Técnico]"));
        assert!(output.contains("Especialistas"));
        assert!(output.contains("[ ] Metodología"));
        assert!(output.contains("Plan Estratégico COOCAFE"));
        assert!(output.contains("Formato: [PDF]"));
    }
}
