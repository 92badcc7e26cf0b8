pub mod cli;
pub mod core;

use crate::cli::{chart, converter, dashboard, heatmap, indicators, pairs, volume};
use crate::core::config::AppConfig;
use crate::core::indicators::{Indicator, macd_series, rsi_series};
use crate::core::quote::{CurrencyPair, find_quote, known_currencies};
use crate::core::rates::convert;
use crate::core::series::{self, Timeframe};
use crate::core::state::{Action, DashboardState, reduce_all};
use anyhow::{Result, bail};
use chrono::Local;
use std::time::Duration;
use tracing::{debug, info};

/// Commands that render part of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Dashboard {
        pair: Option<String>,
        timeframe: Option<Timeframe>,
    },
    Pairs {
        pair: Option<String>,
    },
    Chart {
        pair: Option<String>,
        timeframe: Option<Timeframe>,
    },
    Volume,
    Heatmap,
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
        swap: bool,
    },
    Indicators {
        indicators: Vec<Indicator>,
    },
    Watch {
        interval_secs: u64,
        pair: Option<String>,
        timeframe: Option<Timeframe>,
    },
}

impl AppCommand {
    /// Command-line arguments expressed as state transitions.
    ///
    /// Codes typed on the command line are case-insensitive and upper-cased
    /// here; quote lookups stay exact.
    fn actions(&self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        match self {
            AppCommand::Dashboard { pair, timeframe }
            | AppCommand::Chart { pair, timeframe }
            | AppCommand::Watch {
                pair, timeframe, ..
            } => {
                if let Some(pair) = pair {
                    actions.push(Action::SelectPair(normalize_pair(pair)?));
                }
                actions.extend(timeframe.map(Action::SetTimeframe));
            }
            AppCommand::Pairs { pair } => {
                if let Some(pair) = pair {
                    actions.push(Action::SelectPair(normalize_pair(pair)?));
                }
            }
            AppCommand::Convert {
                amount,
                from,
                to,
                swap,
            } => {
                actions.push(Action::SetAmount(*amount));
                actions.extend(from.as_deref().map(|c| Action::SetFrom(normalize_code(c))));
                actions.extend(to.as_deref().map(|c| Action::SetTo(normalize_code(c))));
                if *swap {
                    actions.push(Action::SwapCurrencies);
                }
            }
            AppCommand::Indicators { indicators } if !indicators.is_empty() => {
                actions.push(Action::ShowIndicators(indicators.clone()));
            }
            AppCommand::Indicators { .. } | AppCommand::Volume | AppCommand::Heatmap => {}
        }
        Ok(actions)
    }

    /// Whether the command draws the selected pair.
    fn shows_selected_pair(&self) -> bool {
        matches!(
            self,
            AppCommand::Dashboard { .. }
                | AppCommand::Pairs { .. }
                | AppCommand::Chart { .. }
                | AppCommand::Watch { .. }
        )
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

fn normalize_pair(pair: &str) -> Result<String> {
    let pair: CurrencyPair = normalize_code(pair).parse()?;
    Ok(pair.to_string())
}

/// Folds the command's arguments into the configured initial state.
pub fn prepare_state(config: &AppConfig, cmd: &AppCommand) -> Result<DashboardState> {
    let state = reduce_all(&config.initial_state(), cmd.actions()?);
    if cmd.shows_selected_pair() && find_quote(&config.pairs, &state.selected_pair).is_none() {
        bail!(
            "Unknown currency pair '{}'. Configured pairs: {}",
            state.selected_pair,
            config
                .pairs
                .iter()
                .map(|q| q.pair.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if !state.converter.amount.is_finite() || state.converter.amount < 0.0 {
        bail!("Amount must be a non-negative number");
    }
    debug!("Prepared state: {state:?}");
    Ok(state)
}

/// Renders the output of a one-shot command.
pub fn render_command(config: &AppConfig, cmd: &AppCommand) -> Result<String> {
    let state = prepare_state(config, cmd)?;
    let output = match cmd {
        AppCommand::Dashboard { .. } | AppCommand::Watch { .. } => {
            dashboard::render_dashboard(config, &state)
        }
        AppCommand::Pairs { .. } => format!(
            "{}\n\n{}\n\n{}",
            pairs::render_ticker(&config.pairs),
            pairs::render_summary(&config.summary),
            pairs::render_pairs(&config.pairs, &state.selected_pair)
        ),
        AppCommand::Chart { .. } => {
            let points = series::generate(state.timeframe, config.dashboard.base_rate);
            chart::render_chart(&state.selected_pair, state.timeframe, &points, Local::now())
        }
        AppCommand::Volume => volume::render_volume(&config.volumes),
        AppCommand::Heatmap => heatmap::render_heatmap(&config.heatmap),
        AppCommand::Convert { .. } => {
            let conversion = convert(
                &config.pairs,
                state.converter.amount,
                &state.converter.from,
                &state.converter.to,
            );
            converter::render_conversion(&conversion, &known_currencies(&config.pairs))
        }
        AppCommand::Indicators { .. } => indicators::render_indicators(
            &state.active_indicators,
            &config.dashboard.ema,
            &rsi_series(),
            &macd_series(),
        ),
    };
    Ok(output)
}

pub async fn run_command(cmd: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxdash starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config with {} pairs", config.pairs.len());

    match &cmd {
        AppCommand::Watch { interval_secs, .. } => {
            let state = prepare_state(&config, &cmd)?;
            dashboard::watch(&config, &state, Duration::from_secs(*interval_secs)).await
        }
        _ => {
            println!("{}", render_command(&config, &cmd)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_arguments_become_actions() {
        let cmd = AppCommand::Convert {
            amount: 250.0,
            from: Some("gbp".to_string()),
            to: Some("jpy".to_string()),
            swap: true,
        };
        let state = prepare_state(&AppConfig::default(), &cmd).unwrap();
        assert_eq!(state.converter.amount, 250.0);
        assert_eq!(state.converter.from, "JPY");
        assert_eq!(state.converter.to, "GBP");
    }

    #[test]
    fn test_empty_indicator_list_keeps_configured_set() {
        let config = AppConfig::default();
        let cmd = AppCommand::Indicators { indicators: vec![] };
        let state = prepare_state(&config, &cmd).unwrap();
        assert_eq!(state.active_indicators.len(), 3);

        let cmd = AppCommand::Indicators {
            indicators: vec![Indicator::Macd],
        };
        let state = prepare_state(&config, &cmd).unwrap();
        assert!(state.is_active(Indicator::Macd));
        assert!(!state.is_active(Indicator::Ema));
    }

    #[test]
    fn test_unknown_pair_is_rejected() {
        let cmd = AppCommand::Chart {
            pair: Some("EUR/XYZ".to_string()),
            timeframe: None,
        };
        let err = prepare_state(&AppConfig::default(), &cmd).unwrap_err();
        assert!(err.to_string().contains("EUR/XYZ"));
        assert!(err.to_string().contains("USD/CAD"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let cmd = AppCommand::Convert {
            amount: -1.0,
            from: None,
            to: None,
            swap: false,
        };
        assert!(prepare_state(&AppConfig::default(), &cmd).is_err());
    }

    #[test]
    fn test_render_chart_command_uses_timeframe() {
        let cmd = AppCommand::Chart {
            pair: Some("GBP/USD".to_string()),
            timeframe: Some(Timeframe::OneWeek),
        };
        let out = render_command(&AppConfig::default(), &cmd).unwrap();
        assert!(out.contains("GBP/USD Exchange Rate"));
        assert!(out.contains("Mon"));
        assert!(out.contains("Sun"));
    }

    #[test]
    fn test_pair_argument_is_case_insensitive() {
        let cmd = AppCommand::Chart {
            pair: Some(" usd/jpy".to_string()),
            timeframe: None,
        };
        let state = prepare_state(&AppConfig::default(), &cmd).unwrap();
        assert_eq!(state.selected_pair, "USD/JPY");

        let cmd = AppCommand::Pairs {
            pair: Some("usdjpy".to_string()),
        };
        let err = prepare_state(&AppConfig::default(), &cmd).unwrap_err();
        assert!(err.to_string().contains("expected BASE/QUOTE"));
    }

    #[test]
    fn test_selected_pair_only_checked_where_drawn() {
        let mut config = AppConfig::default();
        config.dashboard.pair = Some("EUR/USD".to_string());
        config.pairs.retain(|q| q.pair != "EUR/USD");

        assert!(prepare_state(&config, &AppCommand::Volume).is_ok());
        assert!(prepare_state(&config, &AppCommand::Heatmap).is_ok());
        let convert = AppCommand::Convert {
            amount: 10.0,
            from: Some("GBP".to_string()),
            to: Some("USD".to_string()),
            swap: false,
        };
        assert!(prepare_state(&config, &convert).is_ok());
        let pairs = AppCommand::Pairs { pair: None };
        assert!(prepare_state(&config, &pairs).is_err());
    }
}
