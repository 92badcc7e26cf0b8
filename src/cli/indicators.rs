use super::ui;
use crate::core::indicators::{
    Crossover, EmaLevels, Indicator, MacdPoint, RSI_OVERBOUGHT, RSI_OVERSOLD, RsiSignal,
};
use comfy_table::{Cell, Color};
use std::collections::BTreeSet;

const GAUGE_WIDTH: usize = 20;

/// Renders each active indicator panel in EMA, RSI, MACD order.
pub fn render_indicators(
    active: &BTreeSet<Indicator>,
    ema: &EmaLevels,
    rsi: &[f64],
    macd: &[MacdPoint],
) -> String {
    if active.is_empty() {
        return ui::style_text("No indicators selected", ui::StyleType::Subtle);
    }

    active
        .iter()
        .map(|indicator| {
            let body = match indicator {
                Indicator::Ema => render_ema(ema),
                Indicator::Rsi => render_rsi(rsi),
                Indicator::Macd => render_macd(macd),
            };
            format!(
                "{} {}\n\n{body}",
                ui::style_text(&indicator.to_string(), ui::StyleType::Title),
                ui::style_text(indicator.description(), ui::StyleType::Subtle)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_ema(ema: &EmaLevels) -> String {
    let mut table = ui::new_styled_table();
    for (label, value) in ema.rows() {
        table.add_row(vec![
            Cell::new(label),
            ui::number_cell(format!("{value:.4}")),
        ]);
    }
    format!(
        "{table}\n{}\n{}",
        ui::style_text("▲ Bullish Trend", ui::StyleType::Positive),
        ui::style_text("Price above EMA 20 and EMA 50", ui::StyleType::Subtle)
    )
}

fn render_rsi(rsi: &[f64]) -> String {
    let Some(current) = rsi.last().copied() else {
        return ui::style_text("No data", ui::StyleType::Error);
    };
    let signal = RsiSignal::from_value(current);
    let signal_text = match signal {
        RsiSignal::Overbought => ui::style_text("▼ Overbought", ui::StyleType::Negative),
        RsiSignal::Oversold => ui::style_text("▲ Oversold", ui::StyleType::Positive),
        RsiSignal::Neutral => ui::style_text("● Neutral", ui::StyleType::Label),
    };
    format!(
        "Current RSI {}\n{} {RSI_OVERSOLD:.0}/{RSI_OVERBOUGHT:.0}\n{}\n{signal_text}",
        ui::style_text(&format!("{current:.0}"), ui::StyleType::Value),
        ui::gauge(current, GAUGE_WIDTH),
        ui::sparkline(rsi),
    )
}

fn render_macd(macd: &[MacdPoint]) -> String {
    let Some(current) = macd.last() else {
        return ui::style_text("No data", ui::StyleType::Error);
    };

    let mut table = ui::new_styled_table();
    for (label, value) in [
        ("MACD Line", current.macd),
        ("Signal Line", current.signal),
        ("Histogram", current.histogram),
    ] {
        let color = if value >= 0.0 { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(label),
            ui::number_cell(format!("{value:.5}")).fg(color),
        ]);
    }

    let line: Vec<f64> = macd.iter().map(|p| p.macd).collect();
    let crossover = match current.crossover() {
        Crossover::Bullish => ui::style_text(
            &format!("▲ {}", Crossover::Bullish),
            ui::StyleType::Positive,
        ),
        Crossover::Bearish => ui::style_text(
            &format!("▼ {}", Crossover::Bearish),
            ui::StyleType::Negative,
        ),
    };
    format!("{table}\n{}\n{crossover}", ui::sparkline(&line))
}
