//! Static market overview data: summary stats, volume bars and heatmap cells.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A headline figure on the market summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStat {
    pub label: String,
    pub value: String,
    /// Trend in percent; zero hides the trend marker.
    #[serde(default)]
    pub trend: f64,
}

/// 24h traded volume for one pair, in billions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub pair: String,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Activity::VeryHigh => "Very High",
                Activity::High => "High",
                Activity::Medium => "Medium",
                Activity::Low => "Low",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub pair: String,
    pub change: f64,
    pub activity: Activity,
}

impl HeatmapCell {
    pub fn level(&self) -> HeatLevel {
        HeatLevel::from_change(self.change)
    }
}

/// Colour band of a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    StrongGain,
    Gain,
    SlightGain,
    SlightLoss,
    Loss,
    StrongLoss,
}

impl HeatLevel {
    pub fn from_change(change: f64) -> Self {
        if change > 0.4 {
            HeatLevel::StrongGain
        } else if change > 0.2 {
            HeatLevel::Gain
        } else if change > 0.0 {
            HeatLevel::SlightGain
        } else if change > -0.2 {
            HeatLevel::SlightLoss
        } else if change > -0.4 {
            HeatLevel::Loss
        } else {
            HeatLevel::StrongLoss
        }
    }

    /// Large moves are drawn with emphasised text.
    pub fn is_intense(change: f64) -> bool {
        change.abs() > 0.2
    }
}

/// Number of accent colours cards rotate through.
pub const ACCENT_COUNT: usize = 6;

/// Stable accent index for a pair: sum of its character codes modulo the palette.
pub fn accent_index(pair: &str) -> usize {
    pair.chars().map(|c| c as usize).sum::<usize>() % ACCENT_COUNT
}

/// Formats a signed percentage, e.g. `+0.34%` / `-0.21%`.
pub fn signed_percent(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{sign}{change:.2}%")
}

pub fn default_market_stats() -> Vec<MarketStat> {
    [
        ("Total Volume (24h)", "$6.8T", 2.3),
        ("Active Pairs", "180", 0.0),
        ("Avg Spread", "0.8 pips", -5.2),
        ("Volatility Index", "12.4", 1.7),
    ]
    .into_iter()
    .map(|(label, value, trend)| MarketStat {
        label: label.to_string(),
        value: value.to_string(),
        trend,
    })
    .collect()
}

pub fn default_volume_bars() -> Vec<VolumeBar> {
    [
        ("EUR/USD", 2.3),
        ("USD/JPY", 3.1),
        ("GBP/USD", 1.8),
        ("AUD/USD", 1.5),
        ("USD/CAD", 1.1),
        ("USD/CHF", 1.2),
        ("NZD/USD", 0.9),
        ("EUR/GBP", 1.4),
    ]
    .into_iter()
    .map(|(pair, volume)| VolumeBar {
        pair: pair.to_string(),
        volume,
    })
    .collect()
}

pub fn default_heatmap() -> Vec<HeatmapCell> {
    use Activity::*;
    [
        ("EUR/USD", 0.34, High),
        ("GBP/USD", -0.21, High),
        ("USD/JPY", 0.56, VeryHigh),
        ("USD/CHF", -0.12, Medium),
        ("AUD/USD", 0.18, Medium),
        ("USD/CAD", -0.08, Medium),
        ("NZD/USD", 0.42, Low),
        ("EUR/GBP", 0.15, Medium),
        ("EUR/JPY", -0.28, High),
        ("GBP/JPY", 0.67, Medium),
        ("AUD/JPY", -0.33, Low),
        ("CHF/JPY", 0.21, Low),
    ]
    .into_iter()
    .map(|(pair, change, activity)| HeatmapCell {
        pair: pair.to_string(),
        change,
        activity,
    })
    .collect()
}
