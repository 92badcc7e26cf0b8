use crate::core::indicators::{EmaLevels, Indicator};
use crate::core::market::{
    HeatmapCell, MarketStat, VolumeBar, default_heatmap, default_market_stats, default_volume_bars,
};
use crate::core::quote::{CurrencyPair, CurrencyPairQuote, find_quote};
use crate::core::series::{DEFAULT_BASE_RATE, Timeframe};
use crate::core::state::{ConverterState, DashboardState};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConverterConfig {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        let state = ConverterState::default();
        ConverterConfig {
            amount: state.amount,
            from: state.from,
            to: state.to,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Selected pair; the first configured pair when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    pub timeframe: Timeframe,
    pub indicators: Vec<Indicator>,
    /// Starting rate of the chart's random walk.
    pub base_rate: f64,
    pub converter: ConverterConfig,
    pub ema: EmaLevels,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            pair: None,
            timeframe: Timeframe::OneDay,
            indicators: Indicator::ALL.to_vec(),
            base_rate: DEFAULT_BASE_RATE,
            converter: ConverterConfig::default(),
            ema: EmaLevels::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub pairs: Vec<CurrencyPairQuote>,
    #[serde(default = "default_market_stats")]
    pub summary: Vec<MarketStat>,
    #[serde(default = "default_volume_bars")]
    pub volumes: Vec<VolumeBar>,
    #[serde(default = "default_heatmap")]
    pub heatmap: Vec<HeatmapCell>,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pairs: default_pairs(),
            summary: default_market_stats(),
            volumes: default_volume_bars(),
            heatmap: default_heatmap(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default path, or built-in data if none exists.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in market data",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxdash", "fxdash")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Checks that every pair is `BASE/QUOTE` with a strictly positive rate.
    pub fn validate(&self) -> Result<()> {
        if self.pairs.is_empty() {
            bail!("At least one currency pair must be configured");
        }
        for quote in &self.pairs {
            quote.pair.parse::<CurrencyPair>()?;
            if !quote.rate.is_finite() || quote.rate <= 0.0 {
                bail!(
                    "Invalid rate {} for {}: must be positive",
                    quote.rate,
                    quote.pair
                );
            }
        }
        if !self.dashboard.base_rate.is_finite() || self.dashboard.base_rate <= 0.0 {
            bail!("Dashboard base_rate must be positive");
        }
        if let Some(pair) = self
            .dashboard
            .pair
            .as_deref()
            .filter(|pair| find_quote(&self.pairs, pair).is_none())
        {
            bail!("Dashboard pair '{pair}' is not one of the configured pairs");
        }
        Ok(())
    }

    /// Initial view state built from the dashboard defaults.
    pub fn initial_state(&self) -> DashboardState {
        let defaults = &self.dashboard;
        let selected_pair = defaults
            .pair
            .clone()
            .or_else(|| self.pairs.first().map(|q| q.pair.clone()))
            .unwrap_or_default();
        DashboardState {
            selected_pair,
            timeframe: defaults.timeframe,
            active_indicators: defaults.indicators.iter().copied().collect(),
            converter: ConverterState {
                amount: defaults.converter.amount,
                from: defaults.converter.from.clone(),
                to: defaults.converter.to.clone(),
            },
        }
    }
}

/// Major pairs shown when no configuration file exists.
pub fn default_pairs() -> Vec<CurrencyPairQuote> {
    [
        ("EUR/USD", 1.0952, 0.34, 1.0987, 1.0921, "2.3B"),
        ("GBP/USD", 1.2734, -0.21, 1.2765, 1.2701, "1.8B"),
        ("USD/JPY", 149.82, 0.56, 150.12, 149.34, "3.1B"),
        ("USD/CHF", 0.8845, -0.12, 0.8872, 0.8831, "1.2B"),
        ("AUD/USD", 0.6421, 0.18, 0.6445, 0.6398, "1.5B"),
        ("USD/CAD", 1.4123, -0.08, 1.4156, 1.4101, "1.1B"),
    ]
    .into_iter()
    .map(|(pair, rate, change, high, low, volume)| CurrencyPairQuote {
        pair: pair.to_string(),
        rate,
        change,
        high,
        low,
        volume: volume.to_string(),
    })
    .collect()
}
