use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::{metric_lines, panel, selector_line, setting_line, Component, PageProps, MUTED};
use crate::action::Action;
use crate::fixtures::{
    CROP_NAMES, MARKET_HORIZONS, MARKET_METRICS, MARKET_SHARE, MONTHLY_PRICES, MONTHS,
    SUPPLY_CHAIN, TARGET_MARKETS,
};
use crate::state::Tab;

pub struct MarketPage;

impl Component<Action> for MarketPage {
    type Props<'a> = PageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let index = props.state.selection(Tab::Market);
        let Some(horizon) = MARKET_HORIZONS.get(index) else {
            return;
        };

        let market = TARGET_MARKETS
            .get(props.state.setting(Tab::Market))
            .copied()
            .unwrap_or(TARGET_MARKETS[0]);

        let [selector_area, prices_area, lower] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(horizon.months as u16 + 3),
            Constraint::Min(7),
        ])
        .areas(area);
        let [share_area, supply_area, metrics_area] = Layout::horizontal([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .areas(lower);

        let lines = vec![
            selector_line(MARKET_HORIZONS.iter().map(|h| h.label), index),
            setting_line("Mercado Objetivo", market),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel("Horizon")), selector_area);
        render_prices(frame, prices_area, horizon.months);
        render_share(frame, share_area);
        render_supply_chain(frame, supply_area);
        frame.render_widget(
            Paragraph::new(metric_lines(&MARKET_METRICS)).block(panel("Market Metrics")),
            metrics_area,
        );
    }
}

/// Rows of [`MONTHLY_PRICES`] covering the last `months` months
pub fn price_window(months: usize) -> &'static [[f64; 4]] {
    let start = MONTHLY_PRICES.len().saturating_sub(months);
    &MONTHLY_PRICES[start..]
}

fn render_prices(frame: &mut Frame, area: Rect, months: usize) {
    let offset = MONTHLY_PRICES.len().saturating_sub(months);
    let rows = price_window(months).iter().enumerate().map(|(i, prices)| {
        let mut cells = vec![Cell::from(MONTHS[offset + i])];
        cells.extend(prices.iter().map(|p| Cell::from(format!("${:.2}", p))));
        Row::new(cells)
    });

    let mut header = vec!["Mes"];
    header.extend(CROP_NAMES);

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(header).style(Style::default().fg(MUTED)))
    .block(panel("Prices (USD/kg)"));
    frame.render_widget(table, area);
}

fn render_share(frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = MARKET_SHARE
        .iter()
        .map(|(destination, share)| {
            Bar::default()
                .value(*share)
                .label(Line::from(*destination))
                .text_value(format!("{}%", share))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Export Share"))
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}

fn render_supply_chain(frame: &mut Frame, area: Rect) {
    let rows = SUPPLY_CHAIN.iter().map(|stage| {
        Row::new(vec![
            Cell::from(stage.stage),
            Cell::from(format!("{}%", stage.current)),
            Cell::from(format!("{}%", stage.optimized)).style(Style::default().fg(Color::Green)),
            Cell::from(format!("{}%", stage.cost)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(14),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
        ],
    )
    .header(Row::new(vec!["Stage", "Eff", "Opt", "Cost"]).style(Style::default().fg(MUTED).bold()))
    .block(panel("Supply Chain"));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use agroplan_runtime::testing::RenderHarness;

    #[test]
    fn test_price_window() {
        assert_eq!(price_window(3).len(), 3);
        assert_eq!(price_window(3)[0][0], 5.6);
        assert_eq!(price_window(12).len(), 12);
        assert_eq!(price_window(20).len(), 12);
    }

    #[test]
    fn test_horizon_limits_price_rows() {
        let mut render = RenderHarness::new(120, 30);
        let state = AppState::new();

        let output = render.render_to_string_plain(|frame| {
            MarketPage.render(frame, frame.area(), PageProps { state: &state });
        });

        assert!(output.contains("[3 Meses]"));
        assert!(output.contains("Dic"));
        assert!(!output.contains("Ene "));
        assert!(output.contains("$6.00"));
        assert!(output.contains("Mercado Objetivo: [Mercado Internacional]"));
    }
}
