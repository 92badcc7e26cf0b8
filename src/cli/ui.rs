use crate::core::market::{HeatLevel, accent_index};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Positive,
    Negative,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).cyan().bold(),
        StyleType::Positive => style(text).green(),
        StyleType::Negative => style(text).red(),
        StyleType::Error => style(text).red().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Styles text green or red depending on the sign of `change`.
pub fn style_change(text: &str, change: f64) -> String {
    if change >= 0.0 {
        style_text(text, StyleType::Positive)
    } else {
        style_text(text, StyleType::Negative)
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned numeric cell.
pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for displaying percentage change with an arrow and colour.
pub fn change_cell(change: f64) -> Cell {
    let arrow = if change >= 0.0 { "▲" } else { "▼" };
    let text = format!("{arrow} {:.2}%", change.abs());
    let color = if change >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(text).fg(color).set_alignment(CellAlignment::Right)
}

/// Accent colour for a pair, stable across renders.
pub fn accent_color(pair: &str) -> Color {
    const PALETTE: [Color; 6] = [
        Color::Rgb {
            r: 163,
            g: 230,
            b: 53,
        },
        Color::Rgb {
            r: 34,
            g: 211,
            b: 238,
        },
        Color::Rgb {
            r: 244,
            g: 114,
            b: 182,
        },
        Color::Rgb {
            r: 192,
            g: 132,
            b: 252,
        },
        Color::Rgb {
            r: 96,
            g: 165,
            b: 250,
        },
        Color::Rgb {
            r: 251,
            g: 113,
            b: 133,
        },
    ];
    PALETTE[accent_index(pair)]
}

/// Background and foreground colours for a heatmap cell.
pub fn heat_colors(change: f64) -> (Color, Color) {
    let bg = match HeatLevel::from_change(change) {
        HeatLevel::StrongGain => Color::Rgb {
            r: 34,
            g: 197,
            b: 94,
        },
        HeatLevel::Gain => Color::Rgb {
            r: 134,
            g: 239,
            b: 172,
        },
        HeatLevel::SlightGain => Color::Rgb {
            r: 209,
            g: 250,
            b: 229,
        },
        HeatLevel::SlightLoss => Color::Rgb {
            r: 254,
            g: 226,
            b: 226,
        },
        HeatLevel::Loss => Color::Rgb {
            r: 252,
            g: 165,
            b: 165,
        },
        HeatLevel::StrongLoss => Color::Rgb {
            r: 239,
            g: 68,
            b: 68,
        },
    };
    let fg = if HeatLevel::is_intense(change) {
        Color::White
    } else {
        Color::Rgb {
            r: 30,
            g: 41,
            b: 59,
        }
    };
    (bg, fg)
}

/// Renders `values` as a one-line sparkline scaled between their min and max.
pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = (SPARK_GLYPHS.len() - 1) as f64;
    values
        .iter()
        .map(|v| {
            let idx = if span > 0.0 {
                ((v - min) / span * top).round() as usize
            } else {
                0
            };
            SPARK_GLYPHS[idx.min(SPARK_GLYPHS.len() - 1)]
        })
        .collect()
}

/// Horizontal bar proportional to `value / max`, at most `width` cells.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

/// Gauge such as `[██████░░░░]` for a value within `0..=100`.
pub fn gauge(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn term_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_spans_glyph_range() {
        let line = sparkline(&[1.0, 2.0, 3.0]);
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().last(), Some('█'));
    }

    #[test]
    fn test_sparkline_flat_and_empty() {
        assert_eq!(sparkline(&[1.5, 1.5]), "▁▁");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(3.1, 3.1, 10).chars().count(), 10);
        assert_eq!(bar(1.55, 3.1, 10).chars().count(), 5);
        assert_eq!(bar(0.01, 3.1, 10).chars().count(), 1);
        assert_eq!(bar(0.0, 3.1, 10), "");
    }

    #[test]
    fn test_gauge_width() {
        assert_eq!(gauge(50.0, 10), "[█████░░░░░]");
        assert_eq!(gauge(150.0, 4), "[████]");
        assert_eq!(gauge(-5.0, 4), "[░░░░]");
    }

    #[test]
    fn test_heat_colors_text_contrast() {
        let (_, fg) = heat_colors(0.56);
        assert_eq!(fg, Color::White);
        let (_, fg) = heat_colors(0.1);
        assert_ne!(fg, Color::White);
    }
}
