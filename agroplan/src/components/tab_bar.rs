use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use ratatui::Frame;

use super::{Component, ACCENT, MUTED};
use crate::action::Action;
use crate::state::Tab;

pub struct TabBar;

pub struct TabBarProps {
    pub active: Tab,
}

impl Component<Action> for TabBar {
    type Props<'a> = TabBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let titles = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())));

        let tabs = Tabs::new(titles)
            .select(props.active.index())
            .style(Style::default().fg(MUTED))
            .highlight_style(Style::default().fg(Color::Black).bg(ACCENT).bold())
            .divider("│");

        frame.render_widget(tabs, area);
    }
}
