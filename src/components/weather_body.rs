use artbox::{Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::{HEADER_OVERHEAD, temperature_colors};
use super::trend_graph::TREND_GRAPH_HEIGHT;
use super::{Component, ERROR_ICON, LocationHeader, LocationHeaderProps, TrendGraph, TrendGraphProps};
use crate::action::Action;
use crate::icons::{self, ICON_HEIGHT};
use crate::state::{AppState, WeatherReport};

pub const LOADING_TEXT: &str = "Fetching weather...";

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows: blank + blank + advisory + details + message.
const LAYOUT_FIXED: u16 = 5;

/// Text cap tiers: (header_cap, temp_cap).
/// terminus(6), miniwi(4), plain(1), with HEADER_OVERHEAD added to header.
const TEXT_TIERS: [(u16, u16); 3] = [
    (6 + HEADER_OVERHEAD, 6),
    (4 + HEADER_OVERHEAD, 4),
    (1 + HEADER_OVERHEAD, 1),
];

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

struct LayoutSizing {
    icon_h: u16,
    trend_h: u16,
    header_cap: u16,
    temp_cap: u16,
}

/// Shrink text first, then drop the graph, then fall back to an emoji icon.
fn compute_layout(area_height: u16) -> LayoutSizing {
    let candidates = [(ICON_HEIGHT, TREND_GRAPH_HEIGHT), (ICON_HEIGHT, 0), (1, 0)];
    for (icon_h, trend_h) in candidates {
        for &(header_cap, temp_cap) in &TEXT_TIERS {
            if header_cap + temp_cap + icon_h + trend_h + LAYOUT_FIXED <= area_height {
                return LayoutSizing {
                    icon_h,
                    trend_h,
                    header_cap,
                    temp_cap,
                };
            }
        }
    }
    let (header_cap, temp_cap) = TEXT_TIERS[2];
    LayoutSizing {
        icon_h: 1,
        trend_h: 0,
        header_cap,
        temp_cap,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let sizing = compute_layout(area.height);

        match &state.weather {
            Some(report) => render_report(frame, area, state, report, &sizing),
            None => render_placeholder(frame, area, state, &sizing),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .weather
        .as_ref()
        .map(|w| w.location.as_str())
        .or(state.current_city.as_deref())
        .unwrap_or("Weather");
    let status = state.loading.then_some(LOADING_TEXT);

    let mut header = LocationHeader;
    header.render(
        frame,
        area,
        LocationHeaderProps {
            title,
            status,
            temperature: state.weather.as_ref().map(|w| w.temperature_celsius),
            is_animating: state.loading,
            tick_count: state.tick_count,
        },
    );
}

fn make_layout(area: Rect, sizing: &LayoutSizing) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(sizing.header_cap),
        Constraint::Length(1),
        Constraint::Length(sizing.icon_h),
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap),
        Constraint::Length(1), // advisory
        Constraint::Length(1), // humidity + wind
        Constraint::Length(sizing.trend_h),
        Constraint::Length(1), // error / hint
    ])
    .flex(Flex::Center)
    .split(area)
}

fn render_report(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    report: &WeatherReport,
    sizing: &LayoutSizing,
) {
    let chunks = make_layout(area, sizing);

    render_header(frame, chunks[0], state);

    if sizing.icon_h >= ICON_HEIGHT {
        frame.render_widget(
            Paragraph::new(icons::icon_art(report.icon)).alignment(Alignment::Center),
            chunks[2],
        );
    } else {
        let emoji = Line::from(report.icon.emoji()).centered();
        frame.render_widget(Paragraph::new(emoji), chunks[2]);
    }

    let temp_text = state.unit.format(report.temperature_celsius);
    let (start, end) = temperature_colors(Some(report.temperature_celsius));
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[4]);

    if let Some(advisory) = state.advisory {
        let line = Line::from(vec![Span::styled(
            advisory.message(),
            Style::default().fg(Color::Yellow),
        )])
        .centered();
        frame.render_widget(Paragraph::new(line), chunks[5]);
    }

    let details = Line::from(vec![
        Span::styled(format!("{}%", report.humidity_percent), Style::default().bold()),
        Span::styled(" Humidity", Style::default().fg(Color::DarkGray)),
        Span::raw("    "),
        Span::styled(format!("{} Km/hr", report.wind_speed), Style::default().bold()),
        Span::styled(" Wind Speed", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(details), chunks[6]);

    if sizing.trend_h > 0 {
        let mut graph = TrendGraph;
        graph.render(frame, chunks[7], TrendGraphProps { points: &state.trend });
    }

    if let Some(error) = state.error_message.as_deref() {
        render_error_line(frame, chunks[8], error);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, sizing: &LayoutSizing) {
    let chunks = make_layout(area, sizing);
    render_header(frame, chunks[0], state);

    if let Some(error) = state.error_message.as_deref() {
        render_error_line(frame, chunks[8], error);
    } else if !state.loading {
        let hint = Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("/", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to search a city", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(hint), chunks[8]);
    }
}

fn render_error_line(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::raw(format!("{ERROR_ICON} ")),
        Span::styled(error.to_string(), Style::default().fg(Color::Rgb(200, 100, 100))),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_prefers_art_and_graph() {
        let sizing = compute_layout(40);
        assert_eq!(sizing.icon_h, ICON_HEIGHT);
        assert_eq!(sizing.trend_h, TREND_GRAPH_HEIGHT);
        assert_eq!(sizing.header_cap, TEXT_TIERS[0].0);
    }

    #[test]
    fn test_layout_degrades_on_small_terminals() {
        let sizing = compute_layout(10);
        assert_eq!(sizing.icon_h, 1);
        assert_eq!(sizing.trend_h, 0);
    }
}
