//! Root dashboard component
//!
//! Owns key handling for the whole app. Pages never see events.

use agroplan_runtime::EventKind;
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{
    ClimatePage, Component, CropsPage, FarmPage, HelpBar, MarketPage, NoticeBanner,
    NoticeBannerProps, OverviewPage, PageProps, ReportsPage, ScenariosPage, TabBar, TabBarProps,
    ACCENT, MUTED, SPINNERS,
};
use crate::action::Action;
use crate::fixtures::SEASON;
use crate::state::{AppState, Tab};

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct Dashboard;

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab => Action::TabNext,
            KeyCode::BackTab => Action::TabPrev,
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                match Tab::from_index(index) {
                    Some(tab) => Action::TabSelect(tab),
                    None => return vec![],
                }
            }
            KeyCode::Left => Action::SelectionPrev,
            KeyCode::Right => Action::SelectionNext,
            KeyCode::Up => Action::SettingPrev,
            KeyCode::Down => Action::SettingNext,
            KeyCode::Char('u') => Action::UnitsToggle,
            KeyCode::Char('x') => Action::NoticeDismiss,
            _ => return vec![],
        };
        vec![action]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let notice = state.visible_notice();

        let [header, tabs, banner, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(if notice.is_some() { 1 } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(frame, header, state);
        TabBar.render(frame, tabs, TabBarProps { active: state.tab });
        if let Some(message) = notice {
            NoticeBanner.render(frame, banner, NoticeBannerProps { message });
        }

        let page = PageProps { state };
        match state.tab {
            Tab::Overview => OverviewPage.render(frame, body, page),
            Tab::Farm => FarmPage.render(frame, body, page),
            Tab::Climate => ClimatePage.render(frame, body, page),
            Tab::Crops => CropsPage.render(frame, body, page),
            Tab::Market => MarketPage.render(frame, body, page),
            Tab::Scenarios => ScenariosPage.render(frame, body, page),
            Tab::Reports => ReportsPage.render(frame, body, page),
        }

        HelpBar.render(frame, help, ());
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = if state.forecast.is_pending() {
        let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
        Span::styled(format!(" {} ", spinner), Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ")
    };

    let line = Line::from(vec![
        Span::styled(" AgroPlan AgentNet", Style::default().fg(ACCENT).bold()),
        status,
        Span::styled(
            format!("{} · {}", SEASON.season, SEASON.region),
            Style::default().fg(MUTED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use agroplan_runtime::testing::*;

    fn events(key_str: &str, state: &AppState) -> Vec<Action> {
        Dashboard
            .handle_event(
                &EventKind::Key(key(key_str)),
                DashboardProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_key_bindings() {
        let state = AppState::default();
        events("q", &state).assert_first(Action::Quit);
        events("esc", &state).assert_first(Action::Quit);
        events("ctrl+c", &state).assert_first(Action::Quit);
        events("tab", &state).assert_first(Action::TabNext);
        events("shift+tab", &state).assert_first(Action::TabPrev);
        events("3", &state).assert_first(Action::TabSelect(Tab::Climate));
        events("right", &state).assert_first(Action::SelectionNext);
        events("left", &state).assert_first(Action::SelectionPrev);
        events("up", &state).assert_first(Action::SettingPrev);
        events("down", &state).assert_first(Action::SettingNext);
        events("u", &state).assert_first(Action::UnitsToggle);
        events("x", &state).assert_first(Action::NoticeDismiss);
    }

    #[test]
    fn test_unbound_keys_and_no_retry() {
        let state = AppState::default();
        events("r", &state).assert_empty();
        events("8", &state).assert_empty();
        events("f5", &state).assert_empty();
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let state = AppState::default();
        let actions: Vec<Action> = Dashboard
            .handle_event(
                &EventKind::Key(key("q")),
                DashboardProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
        events("q", &state).assert_count(1);
    }

    #[test]
    fn test_render_shows_header_and_tabs() {
        let mut render = RenderHarness::new(100, 30);
        let state = AppState::default();
        let output = render.render_to_string_plain(|frame| {
            Dashboard.render(
                frame,
                frame.area(),
                DashboardProps {
                    state: &state,
                    is_focused: true,
                },
            );
        });

        assert!(output.contains("AgroPlan AgentNet"));
        assert!(output.contains("1 Overview"));
        assert!(output.contains("7 Reports"));
        assert!(output.contains("quit"));
    }
}
