use super::{chart, converter, heatmap, indicators, pairs, ui, volume};
use crate::core::config::AppConfig;
use crate::core::indicators::{macd_series, rsi_series};
use crate::core::quote::known_currencies;
use crate::core::rates::convert;
use crate::core::series;
use crate::core::state::DashboardState;
use anyhow::Result;
use chrono::Local;
use std::time::Duration;
use tracing::{debug, info};

/// Shortest interval between redraws.
const MIN_REFRESH: Duration = Duration::from_secs(1);

/// Renders every panel for `state` with freshly generated series.
pub fn render_dashboard(config: &AppConfig, state: &DashboardState) -> String {
    let separator = format!("\n{}\n", "─".repeat(ui::term_width()));
    let points = series::generate(state.timeframe, config.dashboard.base_rate);
    let conversion = convert(
        &config.pairs,
        state.converter.amount,
        &state.converter.from,
        &state.converter.to,
    );
    debug!(
        pair = %state.selected_pair,
        timeframe = %state.timeframe,
        points = points.len(),
        "Rendering dashboard"
    );

    let sections = [
        format!(
            "{}\n{}",
            ui::style_text("Foreign Exchange Market", ui::StyleType::Title),
            ui::style_text(
                "Currency trading data and analytics (simulated)",
                ui::StyleType::Subtle
            )
        ),
        pairs::render_summary(&config.summary),
        chart::render_chart(&state.selected_pair, state.timeframe, &points, Local::now()),
        pairs::render_pairs(&config.pairs, &state.selected_pair),
        converter::render_conversion(&conversion, &known_currencies(&config.pairs)),
        indicators::render_indicators(
            &state.active_indicators,
            &config.dashboard.ema,
            &rsi_series(),
            &macd_series(),
        ),
        volume::render_volume(&config.volumes),
        heatmap::render_heatmap(&config.heatmap),
    ];
    sections.join(&separator)
}

/// Redraws the dashboard every `interval` until Ctrl-C.
pub async fn watch(config: &AppConfig, state: &DashboardState, interval: Duration) -> Result<()> {
    let term = console::Term::stdout();
    info!("Refreshing dashboard every {:?}", interval.max(MIN_REFRESH));
    let redraws = refresh_until(interval, tokio::signal::ctrl_c(), || {
        term.clear_screen()?;
        println!("{}", render_dashboard(config, state));
        println!(
            "\n{}",
            ui::style_text("Press Ctrl-C to exit", ui::StyleType::Subtle)
        );
        Ok(())
    })
    .await?;
    info!("Ctrl-C received after {redraws} redraws");
    Ok(())
}

/// Calls `draw` on every tick until `shutdown` resolves and returns the
/// number of draws. The first draw happens immediately.
async fn refresh_until<F, D>(interval: Duration, shutdown: F, mut draw: D) -> Result<usize>
where
    F: Future<Output = std::io::Result<()>>,
    D: FnMut() -> Result<()>,
{
    let mut ticker = tokio::time::interval(interval.max(MIN_REFRESH));
    tokio::pin!(shutdown);

    let mut redraws = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                draw()?;
                redraws += 1;
            }
            res = &mut shutdown => {
                res?;
                break;
            }
        }
    }
    Ok(redraws)
}
