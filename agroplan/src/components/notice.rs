use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{Component, WARNING_ICON};
use crate::action::Action;

/// One-line dismissable notice for the latest resolution failure
pub struct NoticeBanner;

pub struct NoticeBannerProps<'a> {
    pub message: &'a str,
}

impl Component<Action> for NoticeBanner {
    type Props<'a> = NoticeBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let style = Style::default().fg(Color::Black).bg(Color::Rgb(255, 190, 80));
        let line = Line::from(vec![
            Span::styled(format!(" {} ", WARNING_ICON), style.bold()),
            Span::styled(props.message, style),
            Span::styled("  (x to dismiss) ", style.italic()),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
