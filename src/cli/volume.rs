use super::ui;
use crate::core::market::VolumeBar;
use comfy_table::Cell;

const BAR_WIDTH: usize = 30;

/// 24-hour volume by pair, as bars scaled to the busiest pair.
pub fn render_volume(bars: &[VolumeBar]) -> String {
    let max = bars.iter().map(|b| b.volume).fold(0.0, f64::max);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Pair"),
        ui::header_cell("Volume"),
        ui::header_cell(""),
    ]);
    for bar in bars {
        table.add_row(vec![
            Cell::new(&bar.pair),
            ui::number_cell(format!("{:.1}B", bar.volume)),
            Cell::new(ui::bar(bar.volume, max, BAR_WIDTH)).fg(comfy_table::Color::Blue),
        ]);
    }

    format!(
        "{}\n{}\n\n{table}",
        ui::style_text("Trading Volume", ui::StyleType::Title),
        ui::style_text("24-hour volume by currency pair", ui::StyleType::Subtle)
    )
}
