use super::ui;
use crate::core::market::{HeatLevel, HeatmapCell, signed_percent};
use comfy_table::{Attribute, Cell, CellAlignment};

const COLUMNS: usize = 4;

/// Percentage change across pairs as a coloured grid.
pub fn render_heatmap(cells: &[HeatmapCell]) -> String {
    let mut table = ui::new_styled_table();
    for chunk in cells.chunks(COLUMNS) {
        table.add_row(chunk.iter().map(heat_cell));
    }

    format!(
        "{}\n{}\n\n{table}",
        ui::style_text("Market Heatmap", ui::StyleType::Title),
        ui::style_text(
            "Percentage change across major pairs",
            ui::StyleType::Subtle
        )
    )
}

fn heat_cell(cell: &HeatmapCell) -> Cell {
    let (bg, fg) = ui::heat_colors(cell.change);
    let content = format!(
        "{}\n{}\n{}",
        cell.pair,
        signed_percent(cell.change),
        cell.activity
    );
    let rendered = Cell::new(content)
        .bg(bg)
        .fg(fg)
        .set_alignment(CellAlignment::Center);
    if HeatLevel::is_intense(cell.change) {
        rendered.add_attribute(Attribute::Bold)
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::market::default_heatmap;

    #[test]
    fn test_render_heatmap_contains_every_pair() {
        let cells = default_heatmap();
        let out = render_heatmap(&cells);
        assert!(out.contains("Market Heatmap"));
        for cell in &cells {
            assert!(out.contains(&cell.pair));
        }
        assert!(out.contains("+0.67%"));
        assert!(out.contains("-0.33%"));
        assert!(out.contains("Very High"));
    }
}
