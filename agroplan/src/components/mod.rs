//! Dashboard components
//!
//! [`Dashboard`] is the root: it maps keys to actions and renders the tab
//! bar, the notice banner, the active page and the help bar. Pages are
//! render-only and read everything from [`PageProps`].

pub mod climate;
pub mod crops;
pub mod dashboard;
pub mod farm;
pub mod help_bar;
pub mod market;
pub mod notice;
pub mod overview;
pub mod reports;
pub mod scenarios;
pub mod tab_bar;

pub use agroplan_runtime::Component;

pub use climate::ClimatePage;
pub use crops::CropsPage;
pub use dashboard::{Dashboard, DashboardProps};
pub use farm::FarmPage;
pub use help_bar::HelpBar;
pub use market::MarketPage;
pub use notice::{NoticeBanner, NoticeBannerProps};
pub use overview::OverviewPage;
pub use reports::ReportsPage;
pub use scenarios::ScenariosPage;
pub use tab_bar::{TabBar, TabBarProps};

use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};

use crate::fixtures::TrendMetric;
use crate::state::AppState;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const WARNING_ICON: &str = "⚠";

pub(crate) const ACCENT: Color = Color::Rgb(90, 200, 140);
pub(crate) const MUTED: Color = Color::DarkGray;
pub(crate) const BORDER: Color = Color::Rgb(80, 90, 100);

/// Props shared by every page
#[derive(Clone, Copy)]
pub struct PageProps<'a> {
    pub state: &'a AppState,
}

/// Rounded panel with a padded title
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(ACCENT).bold())
}

/// `◀ a │ [b] │ c ▶` with the selected item highlighted
pub(crate) fn selector_line<'a>(
    items: impl IntoIterator<Item = &'a str>,
    selected: usize,
) -> Line<'a> {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(MUTED))];
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(MUTED)));
        }
        if i == selected {
            spans.push(Span::styled(
                format!("[{}]", item),
                Style::default().fg(Color::Black).bg(ACCENT).bold(),
            ));
        } else {
            spans.push(Span::raw(item));
        }
    }
    spans.push(Span::styled(" ▶", Style::default().fg(MUTED)));
    Line::from(spans)
}

/// `▲▼ label: [value]`, for the setting cycled with the up and down keys
pub(crate) fn setting_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("▲▼ {}: ", label), Style::default().fg(MUTED)),
        Span::styled(format!("[{}]", value.into()), Style::default().fg(ACCENT).bold()),
    ])
}

/// Green for rising figures, red for falling ones
pub(crate) fn change_span(change: &str) -> Span<'_> {
    let color = if change.starts_with('+') {
        Color::Green
    } else {
        Color::Red
    };
    Span::styled(change, Style::default().fg(color))
}

/// Style for the selected row of a table
pub(crate) fn selected_row_style() -> Style {
    Style::default().fg(Color::Black).bg(ACCENT)
}

/// `label  value  change` rows for a set of trend metrics
pub(crate) fn metric_lines(metrics: &[TrendMetric]) -> Vec<Line<'static>> {
    metrics
        .iter()
        .map(|metric| {
            Line::from(vec![
                Span::styled(format!("{:<24}", metric.label), Style::default().fg(MUTED)),
                Span::styled(format!("{:>10}  ", metric.value), Style::default().bold()),
                change_span(metric.change),
            ])
        })
        .collect()
}
