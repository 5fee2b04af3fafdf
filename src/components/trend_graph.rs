use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup},
};

use super::Component;
use crate::action::Action;

/// Bar height units per trend degree.
pub const TREND_BAR_SCALE: i64 = 2;

/// Fixed chart ceiling so bar height tracks temperature, not the tallest bar.
/// Points at or above 50 degrees fill the graph.
pub const TREND_BAR_MAX: u64 = 50 * TREND_BAR_SCALE as u64;

/// Rows reserved for the graph (bars + value labels).
pub const TREND_GRAPH_HEIGHT: u16 = 6;

/// One vertical bar per synthetic trend point.
pub struct TrendGraph;

pub struct TrendGraphProps<'a> {
    pub points: &'a [i32],
}

/// Bar value for a point; sub-zero points render as empty bars.
pub fn bar_height(point: i32) -> u64 {
    (i64::from(point) * TREND_BAR_SCALE).max(0) as u64
}

impl Component<Action> for TrendGraph {
    type Props<'a> = TrendGraphProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.points.is_empty() {
            return;
        }

        let bars: Vec<Bar> = props
            .points
            .iter()
            .map(|&point| {
                Bar::default()
                    .value(bar_height(point))
                    .text_value(point.to_string())
                    .style(Style::default().fg(Color::Rgb(100, 180, 255)))
                    .value_style(Style::default().fg(Color::Black).bg(Color::Rgb(100, 180, 255)))
            })
            .collect();

        let width = props.points.len() as u16 * 4;
        let graph_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            width: width.min(area.width),
            ..area
        };

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .max(TREND_BAR_MAX)
            .bar_width(3)
            .bar_gap(1);
        frame.render_widget(chart, graph_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_bar_height_scales_and_clamps() {
        assert_eq!(bar_height(10), 20);
        assert_eq!(bar_height(0), 0);
        assert_eq!(bar_height(-3), 0);
    }

    fn render_points(points: &[i32]) -> String {
        let mut render = RenderHarness::new(32, TREND_GRAPH_HEIGHT);
        let mut graph = TrendGraph;
        render.render_to_string_plain(|frame| {
            graph.render(frame, frame.area(), TrendGraphProps { points });
        })
    }

    #[test]
    fn test_bars_use_fixed_scale() {
        // Relative scaling would stretch the tallest of these to the top row
        let cool = render_points(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let top_row = cool.lines().next().unwrap_or_default();
        assert!(top_row.trim().is_empty(), "cool trend reached the top:\n{cool}");

        let hot = render_points(&[42, 43, 44, 45, 46, 47, 48, 49]);
        let top_row = hot.lines().next().unwrap_or_default();
        assert!(!top_row.trim().is_empty(), "hot trend should reach the top:\n{hot}");
    }
}
