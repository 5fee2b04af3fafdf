//! Condition icons: provider code lookup and layered terminal art
//!
//! Each icon is a stack of same-sized text layers. Spaces are transparent, so
//! a foreground layer (rain drops, snow flakes) can sit on top of a cloud.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display icon categories. Unknown provider codes map to `Clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IconRef {
    #[default]
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl IconRef {
    /// Map a provider icon code (`01d`, `10n`, ...) to an icon.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => IconRef::Clear,
            "02d" | "02n" | "03d" | "03n" => IconRef::Cloud,
            "04d" | "04n" => IconRef::Drizzle,
            "09d" | "09n" | "10d" | "10n" => IconRef::Rain,
            "13d" | "13n" => IconRef::Snow,
            _ => IconRef::Clear,
        }
    }

    /// Emoji representation for when the art doesn't fit
    pub fn emoji(self) -> &'static str {
        match self {
            IconRef::Clear => "\u{2600}\u{fe0f}",
            IconRef::Cloud => "\u{2601}\u{fe0f}",
            IconRef::Drizzle => "\u{1f326}\u{fe0f}",
            IconRef::Rain => "\u{1f327}\u{fe0f}",
            IconRef::Snow => "\u{2744}\u{fe0f}",
        }
    }
}

/// Height of every icon in rows.
pub const ICON_HEIGHT: u16 = 5;

mod art {
    pub const SUN: &str = concat!(
        "    \\   |   /    \n",
        "     .-'''-.     \n",
        "  --(       )--  \n",
        "     `-...-'     \n",
        "    /   |   \\    \n",
    );

    pub const CLOUD: &str = concat!(
        "                 \n",
        "     .--.        \n",
        "  .-(    ).--.   \n",
        " (___.__)____)   \n",
        "                 \n",
    );

    pub const CLOUD_HIGH: &str = concat!(
        "     .--.        \n",
        "  .-(    ).--.   \n",
        " (___.__)____)   \n",
        "                 \n",
        "                 \n",
    );

    pub const DRIZZLE: &str = concat!(
        "                 \n",
        "                 \n",
        "                 \n",
        "   '   '   '     \n",
        "  '   '   '      \n",
    );

    pub const RAIN: &str = concat!(
        "                 \n",
        "                 \n",
        "                 \n",
        "  ,',',',',',    \n",
        "  ,',',',',',    \n",
    );

    pub const SNOW: &str = concat!(
        "                 \n",
        "                 \n",
        "                 \n",
        "   *  *  *  *    \n",
        "  *  *  *  *     \n",
    );
}

/// A single art layer with its content and color
struct IconLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text; the last layer is drawn on top.
fn composite_layers(layers: &[IconLayer]) -> Text<'static> {
    if layers.is_empty() {
        return Text::default();
    }

    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|l| l.content.lines().map(|line| line.chars().collect()).collect())
        .collect();

    let max_lines = layer_lines.iter().map(Vec::len).max().unwrap_or(0);
    let max_width = layer_lines
        .iter()
        .flat_map(|lines| lines.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut result_lines = Vec::with_capacity(max_lines);
    for line_idx in 0..max_lines {
        let spans: Vec<Span<'static>> = (0..max_width)
            .map(|col_idx| {
                let top = layers.iter().enumerate().rev().find_map(|(layer_idx, layer)| {
                    layer_lines[layer_idx]
                        .get(line_idx)
                        .and_then(|line| line.get(col_idx))
                        .filter(|ch| **ch != ' ')
                        .map(|ch| (*ch, layer.color))
                });
                let (ch, color) = top.unwrap_or((' ', Color::Reset));
                Span::styled(ch.to_string(), Style::default().fg(color))
            })
            .collect();
        result_lines.push(Line::from(spans));
    }

    Text::from(result_lines)
}

/// Terminal art for the given icon
pub fn icon_art(icon: IconRef) -> Text<'static> {
    let cloud_gray = Color::Rgb(170, 170, 185);
    let layers = match icon {
        IconRef::Clear => vec![IconLayer {
            content: art::SUN,
            color: Color::Yellow,
        }],
        IconRef::Cloud => vec![IconLayer {
            content: art::CLOUD,
            color: cloud_gray,
        }],
        IconRef::Drizzle => vec![
            IconLayer {
                content: art::CLOUD_HIGH,
                color: Color::Rgb(160, 160, 175),
            },
            IconLayer {
                content: art::DRIZZLE,
                color: Color::Rgb(120, 170, 230),
            },
        ],
        IconRef::Rain => vec![
            IconLayer {
                content: art::CLOUD_HIGH,
                color: Color::Rgb(130, 130, 150),
            },
            IconLayer {
                content: art::RAIN,
                color: Color::Rgb(80, 140, 255),
            },
        ],
        IconRef::Snow => vec![
            IconLayer {
                content: art::CLOUD_HIGH,
                color: cloud_gray,
            },
            IconLayer {
                content: art::SNOW,
                color: Color::White,
            },
        ],
    };
    composite_layers(&layers)
}
