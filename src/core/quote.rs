//! Currency pair quotes and code helpers

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

/// Separator between the base and quote currency in a pair string.
pub const PAIR_SEPARATOR: char = '/';

/// A spot snapshot for one currency pair, e.g. `EUR/USD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPairQuote {
    pub pair: String,
    pub rate: f64,
    /// Daily change in percent.
    pub change: f64,
    pub high: f64,
    pub low: f64,
    pub volume: String,
}

impl CurrencyPairQuote {
    /// Splits the pair string into its two codes.
    ///
    /// Returns `None` if the pair is not exactly `BASE/QUOTE`.
    pub fn codes(&self) -> Option<(&str, &str)> {
        split_pair(&self.pair)
    }
}

fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let (base, quote) = pair.split_once(PAIR_SEPARATOR)?;
    if base.is_empty() || quote.is_empty() || quote.contains(PAIR_SEPARATOR) {
        return None;
    }
    Some((base, quote))
}

/// A parsed `BASE/QUOTE` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: &str, quote: &str) -> Self {
        CurrencyPair {
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }

    pub fn inverse(&self) -> Self {
        CurrencyPair::new(&self.quote, &self.base)
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{PAIR_SEPARATOR}{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = split_pair(s)
            .ok_or_else(|| anyhow!("Invalid currency pair '{s}': expected BASE/QUOTE"))?;
        Ok(CurrencyPair::new(base, quote))
    }
}

/// Returns the sorted set of currency codes appearing in any quote.
pub fn known_currencies(quotes: &[CurrencyPairQuote]) -> Vec<String> {
    quotes
        .iter()
        .filter_map(|q| q.codes())
        .flat_map(|(base, quote)| [base, quote])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Finds the quote for an exact pair string.
pub fn find_quote<'a>(
    quotes: &'a [CurrencyPairQuote],
    pair: &str,
) -> Option<&'a CurrencyPairQuote> {
    quotes.iter().find(|q| q.pair == pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(pair: &str, rate: f64) -> CurrencyPairQuote {
        CurrencyPairQuote {
            pair: pair.to_string(),
            rate,
            change: 0.0,
            high: rate,
            low: rate,
            volume: "1.0B".to_string(),
        }
    }

    #[test]
    fn test_codes_split_on_separator() {
        let q = quote("EUR/USD", 1.0952);
        assert_eq!(q.codes(), Some(("EUR", "USD")));
    }

    #[test]
    fn test_codes_rejects_malformed_pairs() {
        assert_eq!(quote("EURUSD", 1.0).codes(), None);
        assert_eq!(quote("EUR/USD/JPY", 1.0).codes(), None);
        assert_eq!(quote("/USD", 1.0).codes(), None);
    }

    #[test]
    fn test_pair_parse_and_display() {
        let pair: CurrencyPair = "GBP/JPY".parse().unwrap();
        assert_eq!(pair.base, "GBP");
        assert_eq!(pair.quote, "JPY");
        assert_eq!(pair.to_string(), "GBP/JPY");
        assert_eq!(pair.inverse().to_string(), "JPY/GBP");
        assert!("GBPJPY".parse::<CurrencyPair>().is_err());
        assert!("GBP/".parse::<CurrencyPair>().is_err());
        assert!("GBP/JPY/USD".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_known_currencies_sorted_and_unique() {
        let quotes = vec![
            quote("EUR/USD", 1.0952),
            quote("USD/JPY", 149.82),
            quote("GBP/USD", 1.2734),
        ];
        assert_eq!(known_currencies(&quotes), vec!["EUR", "GBP", "JPY", "USD"]);
    }

    #[test]
    fn test_find_quote_is_exact() {
        let quotes = vec![quote("EUR/USD", 1.0952)];
        assert!(find_quote(&quotes, "EUR/USD").is_some());
        assert!(find_quote(&quotes, "eur/usd").is_none());
        assert!(find_quote(&quotes, "USD/EUR").is_none());
    }
}
