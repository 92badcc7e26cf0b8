//! Indicator panel data: EMA, RSI and MACD.
//!
//! These are display series for the indicator panels. The RSI and MACD lines
//! are sinusoids with uniform noise and the EMA levels are fixed snapshots; no
//! smoothing or momentum formula is evaluated.

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Points drawn in the RSI and MACD sparklines.
pub const INDICATOR_POINTS: usize = 30;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    Ema,
    Rsi,
    Macd,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Ema, Indicator::Rsi, Indicator::Macd];

    pub fn description(&self) -> &'static str {
        match self {
            Indicator::Ema => "Moving Average",
            Indicator::Rsi => "Strength Index",
            Indicator::Macd => "Convergence/Divergence",
        }
    }
}

impl Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Indicator::Ema => "EMA",
                Indicator::Rsi => "RSI",
                Indicator::Macd => "MACD",
            }
        )
    }
}

impl FromStr for Indicator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EMA" => Ok(Indicator::Ema),
            "RSI" => Ok(Indicator::Rsi),
            "MACD" => Ok(Indicator::Macd),
            _ => Err(anyhow::anyhow!("Invalid indicator: {}", s)),
        }
    }
}

/// Fixed EMA levels shown on the EMA panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaLevels {
    pub ema20: f64,
    pub ema50: f64,
    pub ema200: f64,
}

impl Default for EmaLevels {
    fn default() -> Self {
        EmaLevels {
            ema20: 1.0962,
            ema50: 1.0945,
            ema200: 1.0913,
        }
    }
}

impl EmaLevels {
    pub fn rows(&self) -> [(&'static str, f64); 3] {
        [
            ("EMA 20", self.ema20),
            ("EMA 50", self.ema50),
            ("EMA 200", self.ema200),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiSignal {
    pub fn from_value(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            RsiSignal::Overbought
        } else if rsi < RSI_OVERSOLD {
            RsiSignal::Oversold
        } else {
            RsiSignal::Neutral
        }
    }
}

impl Display for RsiSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RsiSignal::Overbought => "Overbought",
                RsiSignal::Oversold => "Oversold",
                RsiSignal::Neutral => "Neutral",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdPoint {
    pub fn crossover(&self) -> Crossover {
        if self.macd > self.signal {
            Crossover::Bullish
        } else {
            Crossover::Bearish
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    Bullish,
    Bearish,
}

impl Display for Crossover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crossover::Bullish => write!(f, "Bullish Crossover"),
            Crossover::Bearish => write!(f, "Bearish Crossover"),
        }
    }
}

pub fn rsi_series() -> Vec<f64> {
    rsi_series_with_rng(&mut rand::rng())
}

/// RSI-shaped series in `[0, 100]`.
pub fn rsi_series_with_rng<R: Rng>(rng: &mut R) -> Vec<f64> {
    (0..INDICATOR_POINTS)
        .map(|i| {
            let wave = (i as f64 / 5.0).sin() * 20.0;
            let rsi = 30.0 + rng.random::<f64>() * 40.0 + wave;
            rsi.clamp(0.0, 100.0)
        })
        .collect()
}

pub fn macd_series() -> Vec<MacdPoint> {
    macd_series_with_rng(&mut rand::rng())
}

/// MACD-shaped series; the signal line lags the MACD line by half a radian.
pub fn macd_series_with_rng<R: Rng>(rng: &mut R) -> Vec<MacdPoint> {
    (0..INDICATOR_POINTS)
        .map(|i| {
            let t = i as f64 / 4.0;
            let macd = t.sin() * 0.003 + (rng.random::<f64>() - 0.5) * 0.001;
            let signal = (t - 0.5).sin() * 0.003 + (rng.random::<f64>() - 0.5) * 0.0005;
            MacdPoint {
                macd,
                signal,
                histogram: macd - signal,
            }
        })
        .collect()
}
