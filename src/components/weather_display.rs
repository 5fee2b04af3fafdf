use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, HistoryBar, HistoryBarProps, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main weather display component
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Char('r') | KeyCode::F(5) => props
                .state
                .current_city
                .clone()
                .map(Action::WeatherSearch),
            KeyCode::Char('/') => Some(Action::SearchOpen),
            KeyCode::Char('u') => Some(Action::UiToggleUnits),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut history = HistoryBar;
                let action = history
                    .handle_event(
                        event,
                        HistoryBarProps {
                            history: &props.state.search_history,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .next();
                action
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // History
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut history = HistoryBar;
        history.render(
            frame,
            chunks[0],
            HistoryBarProps {
                history: &props.state.search_history,
                is_focused: props.is_focused,
            },
        );

        let mut body = WeatherBody;
        body.render(frame, chunks[1], WeatherBodyProps { state: props.state });

        let unit_hint = match props.state.unit.toggle() {
            crate::state::TempUnit::Celsius => "\u{b0}C",
            crate::state::TempUnit::Fahrenheit => "\u{b0}F",
        };
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("/", "search"),
                    StatusBarHint::new("1-5", "history"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("u", unit_hint),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Observation, WeatherReport};
    use tui_dispatch::testing::*;

    fn loaded_state() -> AppState {
        let observation = Observation {
            icon_code: "01d".into(),
            description: "clear sky".into(),
            temperature: 22.4,
            humidity: 40,
            wind_speed: 3.6,
            location: "Pune".into(),
        };
        AppState {
            current_city: Some("Pune".into()),
            weather: Some(WeatherReport::from_observation(&observation)),
            search_history: ["Pune", "Delhi"].into_iter().collect(),
            ..Default::default()
        }
    }

    fn actions_for(state: &AppState, keys: &str, is_focused: bool) -> Vec<Action> {
        let mut component = WeatherDisplay;
        component
            .handle_event(
                &EventKind::Key(key(keys)),
                WeatherDisplayProps { state, is_focused },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_refresh_reruns_current_city() {
        let state = loaded_state();
        let actions = actions_for(&state, "r", true);
        actions.assert_count(1);
        actions.assert_first(Action::WeatherSearch("Pune".into()));
    }

    #[test]
    fn test_refresh_without_city_does_nothing() {
        let state = AppState::default();
        actions_for(&state, "r", true).assert_empty();
    }

    #[test]
    fn test_digit_replays_history() {
        let state = loaded_state();
        actions_for(&state, "2", true).assert_first(Action::HistoryReplay(1));
        actions_for(&state, "3", true).assert_empty();
    }

    #[test]
    fn test_handle_event_quit() {
        let state = AppState::default();
        actions_for(&state, "q", true).assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let state = loaded_state();
        actions_for(&state, "u", false).assert_empty();
    }

    #[test]
    fn test_render_loaded() {
        let mut render = RenderHarness::new(80, 40);
        let mut component = WeatherDisplay;
        let state = loaded_state();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("40%"));
        assert!(output.contains("3.6 Km/hr"));
        assert!(output.contains("Delhi"));
    }
}
