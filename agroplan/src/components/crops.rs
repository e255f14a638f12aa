use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::{change_span, panel, selector_line, Component, PageProps, ACCENT, MUTED};
use crate::action::Action;
use crate::fixtures::{CropProfile, CROPS, OPTIMIZATION_FACTORS, REGIONAL_YIELDS};
use crate::state::Tab;

pub struct CropsPage;

impl Component<Action> for CropsPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let index = props.state.selection(Tab::Crops);
        let Some(crop) = CROPS.get(index) else {
            return;
        };

        let [profile_area, lower] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(6)]).areas(area);
        let [yields_area, factors_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lower);

        render_profile(frame, profile_area, crop, index);
        render_regional_yields(frame, yields_area, crop, index);
        render_factors(frame, factors_area);
    }
}

fn render_profile(frame: &mut Frame, area: Rect, crop: &CropProfile, index: usize) {
    let label = Style::default().fg(MUTED);
    let lines = vec![
        selector_line(CROPS.iter().map(|c| c.name), index),
        Line::from(vec![
            Span::styled("Yield  ", label),
            Span::raw(format!("{:.1} → ", crop.current_yield)),
            Span::styled(
                format!("{:.1} t/ha", crop.projected_yield),
                Style::default().fg(ACCENT).bold(),
            ),
            Span::styled("   Growth  ", label),
            change_span(crop.growth),
        ]),
        Line::from(vec![
            Span::styled("Area  ", label),
            Span::raw(crop.area),
            Span::styled("   Value  ", label),
            Span::raw(crop.value),
            Span::styled("   Risk  ", label),
            Span::styled(crop.risk.label(), Style::default().fg(crop.risk.color())),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Crop")), area);
}

fn render_regional_yields(frame: &mut Frame, area: Rect, crop: &CropProfile, index: usize) {
    // Bars are in tenths of t/ha so small yields still register.
    let bars: Vec<Bar> = REGIONAL_YIELDS
        .iter()
        .map(|(region, yields)| {
            let value = yields[index];
            Bar::default()
                .value((value * 10.0).round() as u64)
                .label(Line::from(*region))
                .text_value(format!("{:.1}", value))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(&format!("{} yield by region (t/ha)", crop.name)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT));
    frame.render_widget(chart, area);
}

fn render_factors(frame: &mut Frame, area: Rect) {
    let rows = OPTIMIZATION_FACTORS.iter().map(|factor| {
        let gap = factor.optimal.saturating_sub(factor.actual);
        let gap_color = if gap >= 20 { Color::Red } else { Color::Yellow };
        Row::new(vec![
            Cell::from(factor.factor),
            Cell::from(format!("{}%", factor.actual)),
            Cell::from(format!("{}%", factor.optimal)),
            Cell::from(format!("-{}", gap)).style(Style::default().fg(gap_color)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(Row::new(vec!["Factor", "Actual", "Optimal", "Gap"]).style(Style::default().fg(MUTED)))
    .block(panel("Optimization"));
    frame.render_widget(table, area);
}
