use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;
use crate::history::{HISTORY_LIMIT, SearchHistory};

/// Recent cities, each selectable with its number key.
pub struct HistoryBar;

pub struct HistoryBarProps<'a> {
    pub history: &'a SearchHistory,
    pub is_focused: bool,
}

/// Map `1`..`5` to a history index.
fn index_for_key(ch: char) -> Option<usize> {
    let digit = ch.to_digit(10)? as usize;
    (1..=HISTORY_LIMIT).contains(&digit).then(|| digit - 1)
}

impl Component<Action> for HistoryBar {
    type Props<'a> = HistoryBarProps<'a>;

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
        let KeyCode::Char(ch) = key.code else {
            return None;
        };
        index_for_key(ch)
            .filter(|&index| index < props.history.len())
            .map(Action::HistoryReplay)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.history.is_empty() {
            return;
        }

        let mut spans = Vec::with_capacity(props.history.len() * 3);
        for (i, city) in props.history.entries().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{}", i + 1),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {city}"),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_for_key() {
        assert_eq!(index_for_key('1'), Some(0));
        assert_eq!(index_for_key('5'), Some(4));
        assert_eq!(index_for_key('0'), None);
        assert_eq!(index_for_key('6'), None);
        assert_eq!(index_for_key('x'), None);
    }
}
