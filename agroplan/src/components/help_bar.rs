use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Component;
use crate::action::Action;

const KEYS: [(&str, &str); 6] = [
    ("tab/1-7", "switch"),
    ("←/→", "select"),
    ("↑/↓", "option"),
    ("u", "units"),
    ("x", "dismiss"),
    ("q", "quit"),
];

pub struct HelpBar;

impl Component<Action> for HelpBar {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let spans: Vec<Span> = KEYS
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!(" {}", key), Style::default().fg(Color::Cyan).bold()),
                    Span::styled(format!(" {} ", what), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
