use super::ui;
use crate::core::market::{MarketStat, signed_percent};
use crate::core::quote::CurrencyPairQuote;
use comfy_table::{Attribute, Cell};

/// Headline market figures with their trend underneath.
pub fn render_summary(stats: &[MarketStat]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(stats.iter().map(|s| ui::header_cell(&s.label)));

    table.add_row(
        stats
            .iter()
            .map(|s| Cell::new(&s.value).add_attribute(Attribute::Bold)),
    );
    table.add_row(stats.iter().map(|s| {
        if s.trend == 0.0 {
            Cell::new("")
        } else {
            ui::change_cell(s.trend)
        }
    }));

    table.to_string()
}

/// Major pair cards; the selected pair is marked and drawn in its accent colour.
pub fn render_pairs(quotes: &[CurrencyPairQuote], selected: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(""),
        ui::header_cell("Pair"),
        ui::header_cell("Rate"),
        ui::header_cell("Change"),
        ui::header_cell("High"),
        ui::header_cell("Low"),
        ui::header_cell("Volume"),
    ]);

    for quote in quotes {
        let is_selected = quote.pair == selected;
        let mut pair_cell = Cell::new(&quote.pair).add_attribute(Attribute::Bold);
        if is_selected {
            pair_cell = pair_cell.fg(ui::accent_color(&quote.pair));
        }
        table.add_row(vec![
            Cell::new(if is_selected { "▶" } else { "" }),
            pair_cell,
            ui::number_cell(format!("{:.4}", quote.rate)),
            ui::change_cell(quote.change),
            ui::number_cell(format!("{:.4}", quote.high)),
            ui::number_cell(format!("{:.4}", quote.low)),
            ui::number_cell(quote.volume.clone()),
        ]);
    }

    format!(
        "{}\n\n{table}",
        ui::style_text("Major Pairs", ui::StyleType::Title)
    )
}

/// One-line ticker of every pair's daily change.
pub fn render_ticker(quotes: &[CurrencyPairQuote]) -> String {
    quotes
        .iter()
        .map(|q| {
            let change = ui::style_change(&signed_percent(q.change), q.change);
            format!("{} {change}", q.pair)
        })
        .collect::<Vec<_>>()
        .join("  ")
}
