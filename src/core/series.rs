//! Synthetic exchange-rate history for the chart panel.

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Seed rate of the random walk when none is configured.
pub const DEFAULT_BASE_RATE: f64 = 1.0952;

/// Maximum step of the walk in either direction.
const MAX_STEP: f64 = 0.01;
/// Maximum distance of the high/low markers from the rate.
const BAND_WIDTH: f64 = 0.01;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Timeframe::OneDay => "1D",
                Timeframe::OneWeek => "1W",
                Timeframe::OneMonth => "1M",
                Timeframe::ThreeMonths => "3M",
                Timeframe::OneYear => "1Y",
            }
        )
    }
}

impl FromStr for Timeframe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1D" => Ok(Timeframe::OneDay),
            "1W" => Ok(Timeframe::OneWeek),
            "1M" => Ok(Timeframe::OneMonth),
            "3M" => Ok(Timeframe::ThreeMonths),
            "1Y" => Ok(Timeframe::OneYear),
            _ => Err(anyhow::anyhow!("Invalid timeframe: {}", s)),
        }
    }
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::OneYear,
    ];

    /// Number of points drawn for this timeframe.
    pub fn point_count(&self) -> usize {
        match self {
            Timeframe::OneDay => 24,
            Timeframe::OneWeek => 7,
            Timeframe::OneMonth => 30,
            Timeframe::ThreeMonths => 90,
            Timeframe::OneYear => 365,
        }
    }

    /// X-axis label for the point at `index`.
    pub fn label(&self, index: usize) -> String {
        match self {
            Timeframe::OneDay => format!("{index}:00"),
            Timeframe::OneWeek => WEEKDAYS[index % WEEKDAYS.len()].to_string(),
            _ => format!("{}", index + 1),
        }
    }
}

/// One point of the exchange-rate chart. `high` and `low` are drawn
/// independently around `rate` and are not aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    pub label: String,
    pub rate: f64,
    pub high: f64,
    pub low: f64,
}

/// Generates a rate history using the thread-local random source.
pub fn generate(timeframe: Timeframe, base_rate: f64) -> Vec<RatePoint> {
    generate_with_rng(timeframe, base_rate, &mut rand::rng())
}

/// Generates a bounded random walk starting from `base_rate`.
///
/// Stored values are rounded to four decimals; the walk itself continues from
/// the unrounded rate.
pub fn generate_with_rng<R: Rng>(
    timeframe: Timeframe,
    base_rate: f64,
    rng: &mut R,
) -> Vec<RatePoint> {
    let mut rate = base_rate;
    (0..timeframe.point_count())
        .map(|i| {
            rate += (rng.random::<f64>() - 0.5) * 2.0 * MAX_STEP;
            let high = rate + rng.random::<f64>() * BAND_WIDTH;
            let low = rate - rng.random::<f64>() * BAND_WIDTH;
            RatePoint {
                label: timeframe.label(i),
                rate: round4(rate),
                high: round4(high),
                low: round4(low),
            }
        })
        .collect()
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_timeframe_parse_and_display() {
        for tf in Timeframe::ALL {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
        }
        assert_eq!("1d".parse::<Timeframe>().unwrap(), Timeframe::OneDay);
        assert_eq!("3m".parse::<Timeframe>().unwrap(), Timeframe::ThreeMonths);
        assert!("2D".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_point_counts() {
        let expected = [24, 7, 30, 90, 365];
        for (tf, count) in Timeframe::ALL.iter().zip(expected) {
            assert_eq!(generate(*tf, DEFAULT_BASE_RATE).len(), count, "{tf}");
        }
    }

    #[test]
    fn test_one_day_labels_are_hours() {
        let series = generate(Timeframe::OneDay, DEFAULT_BASE_RATE);
        assert_eq!(series.len(), 24);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.label, format!("{i}:00"));
        }
        assert_eq!(series[0].label, "0:00");
        assert_eq!(series[23].label, "23:00");
    }

    #[test]
    fn test_one_week_labels_are_weekdays() {
        let labels: Vec<String> = generate(Timeframe::OneWeek, DEFAULT_BASE_RATE)
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, WEEKDAYS);
    }

    #[test]
    fn test_longer_timeframes_use_ordinal_labels() {
        let series = generate(Timeframe::ThreeMonths, DEFAULT_BASE_RATE);
        assert_eq!(series[0].label, "1");
        assert_eq!(series[89].label, "90");
    }

    #[test]
    fn test_walk_is_bounded_per_step() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_with_rng(Timeframe::OneYear, DEFAULT_BASE_RATE, &mut rng);

        // Rounding to four decimals adds at most 0.00005 on each side.
        let tolerance = MAX_STEP + 0.0001 + 1e-9;
        assert!((series[0].rate - DEFAULT_BASE_RATE).abs() <= tolerance);
        for pair in series.windows(2) {
            assert!((pair[1].rate - pair[0].rate).abs() <= tolerance);
        }
    }

    #[test]
    fn test_high_low_bracket_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        for point in generate_with_rng(Timeframe::OneMonth, 1.2734, &mut rng) {
            assert!(point.high >= point.rate, "{point:?}");
            assert!(point.low <= point.rate, "{point:?}");
            assert!(point.high - point.rate <= BAND_WIDTH + 1e-4);
            assert!(point.rate - point.low <= BAND_WIDTH + 1e-4);
        }
    }

    #[test]
    fn test_values_rounded_to_four_decimals() {
        for point in generate(Timeframe::OneDay, DEFAULT_BASE_RATE) {
            for v in [point.rate, point.high, point.low] {
                assert!((v * 10_000.0 - (v * 10_000.0).round()).abs() < 1e-6);
            }
        }
    }
}
