use super::ui;
use crate::core::series::{RatePoint, Timeframe};
use chrono::{DateTime, Local};

/// Rows shown in the point table before it starts sampling.
const MAX_TABLE_ROWS: usize = 12;

/// Renders the exchange-rate chart for `pair` as a sparkline plus a sampled
/// table of points.
pub fn render_chart(
    pair: &str,
    timeframe: Timeframe,
    points: &[RatePoint],
    updated_at: DateTime<Local>,
) -> String {
    let mut output = format!(
        "{} {}\n{}\n\n",
        ui::style_text(&format!("{pair} Exchange Rate"), ui::StyleType::Title),
        ui::style_text(&format!("({timeframe})"), ui::StyleType::Subtle),
        ui::style_text(
            &format!("Last updated: {}", updated_at.format("%H:%M:%S")),
            ui::StyleType::Subtle
        ),
    );

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        output.push_str(&ui::style_text("No data", ui::StyleType::Error));
        return output;
    };

    let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let high = points.iter().map(|p| p.high).fold(f64::NEG_INFINITY, f64::max);
    let low = points.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
    let change = (last.rate - first.rate) / first.rate * 100.0;

    output.push_str(&format!(
        "{}  {} … {}\n\n",
        ui::sparkline(&rates),
        first.label,
        last.label
    ));
    output.push_str(&format!(
        "Open {:.4}  Close {:.4}  High {:.4}  Low {:.4}  {}\n\n",
        first.rate,
        last.rate,
        high,
        low,
        ui::style_change(&format!("{change:+.2}%"), change)
    ));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Rate"),
        ui::header_cell("High"),
        ui::header_cell("Low"),
    ]);
    for point in sample(points, MAX_TABLE_ROWS) {
        table.add_row(vec![
            comfy_table::Cell::new(&point.label),
            ui::number_cell(format!("{:.4}", point.rate)),
            ui::number_cell(format!("{:.4}", point.high)),
            ui::number_cell(format!("{:.4}", point.low)),
        ]);
    }
    output.push_str(&table.to_string());
    output
}

/// Evenly spaced subset of about `max` points, always keeping the last one.
fn sample(points: &[RatePoint], max: usize) -> Vec<&RatePoint> {
    if points.len() <= max {
        return points.iter().collect();
    }
    let step = points.len().div_ceil(max);
    let mut sampled: Vec<&RatePoint> = points.iter().step_by(step).collect();
    let last_index = points.len() - 1;
    if last_index % step != 0 {
        sampled.push(&points[last_index]);
    }
    sampled
}
