//! Currency rate resolution over a set of quoted pairs.
//!
//! Rates are resolved in priority order: identity, direct pair, inverse pair,
//! then a cross-rate through [`ANCHOR_CURRENCY`]. Resolution never fails; a leg
//! that cannot be found falls back to `1.0` and the result is tagged
//! [`ResolutionMethod::Defaulted`] so callers can decide whether to warn.

use crate::core::quote::{CurrencyPair, CurrencyPairQuote, find_quote};
use std::fmt::Display;
use tracing::{debug, warn};

/// Pivot currency for cross-rates.
pub const ANCHOR_CURRENCY: &str = "USD";

/// Rate used whenever a lookup cannot be resolved.
const DEFAULT_RATE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMethod {
    Identity,
    Direct,
    Inverse,
    CrossRate,
    Defaulted,
}

impl Display for ResolutionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResolutionMethod::Identity => "identity",
                ResolutionMethod::Direct => "direct",
                ResolutionMethod::Inverse => "inverse",
                ResolutionMethod::CrossRate => "cross rate via USD",
                ResolutionMethod::Defaulted => "unresolved, defaulted",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateResolution {
    pub rate: f64,
    pub method: ResolutionMethod,
}

impl RateResolution {
    fn new(rate: f64, method: ResolutionMethod) -> Self {
        RateResolution { rate, method }
    }

    pub fn is_exact(&self) -> bool {
        !matches!(self.method, ResolutionMethod::Defaulted)
    }
}

/// Source of conversion rates between two currency codes.
pub trait CurrencyRateProvider {
    fn get_rate(&self, from: &str, to: &str) -> RateResolution;
}

impl CurrencyRateProvider for [CurrencyPairQuote] {
    fn get_rate(&self, from: &str, to: &str) -> RateResolution {
        resolve_detailed(from, to, self)
    }
}

impl CurrencyRateProvider for Vec<CurrencyPairQuote> {
    fn get_rate(&self, from: &str, to: &str) -> RateResolution {
        resolve_detailed(from, to, self)
    }
}

/// Returns the conversion rate from `from` to `to`.
///
/// Always returns a number; see [`resolve_detailed`] for how it was obtained.
pub fn resolve(from: &str, to: &str, quotes: &[CurrencyPairQuote]) -> f64 {
    resolve_detailed(from, to, quotes).rate
}

/// Resolves the conversion rate and reports which path produced it.
pub fn resolve_detailed(from: &str, to: &str, quotes: &[CurrencyPairQuote]) -> RateResolution {
    if from == to {
        return RateResolution::new(1.0, ResolutionMethod::Identity);
    }

    let pair = CurrencyPair::new(from, to);
    if let Some(direct) = find_quote(quotes, &pair.to_string()) {
        debug!("Direct rate for {pair}: {}", direct.rate);
        return RateResolution::new(direct.rate, ResolutionMethod::Direct);
    }

    if let Some(inverse) = find_quote(quotes, &pair.inverse().to_string()) {
        debug!("Inverse rate for {pair} from {}", inverse.pair);
        return RateResolution::new(1.0 / inverse.rate, ResolutionMethod::Inverse);
    }

    let (from_rate, from_found) = anchor_rate(from, quotes);
    let (rate, all_found) = if to == ANCHOR_CURRENCY {
        (from_rate, from_found)
    } else {
        let (to_rate, to_found) = anchor_rate(to, quotes);
        (from_rate / to_rate, from_found && to_found)
    };

    if all_found {
        debug!("Cross rate for {pair} via {ANCHOR_CURRENCY}: {rate}");
        RateResolution::new(rate, ResolutionMethod::CrossRate)
    } else {
        warn!("No rate path for {pair}, using approximation {rate}");
        RateResolution::new(rate, ResolutionMethod::Defaulted)
    }
}

/// Value of one unit of `code` in the anchor currency, and whether it was found.
fn anchor_rate(code: &str, quotes: &[CurrencyPairQuote]) -> (f64, bool) {
    if code == ANCHOR_CURRENCY {
        return (1.0, true);
    }
    let leg = CurrencyPair::new(code, ANCHOR_CURRENCY);
    if let Some(q) = find_quote(quotes, &leg.to_string()) {
        return (q.rate, true);
    }
    if let Some(q) = find_quote(quotes, &leg.inverse().to_string()) {
        return (1.0 / q.rate, true);
    }
    (DEFAULT_RATE, false)
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub converted: f64,
    pub method: ResolutionMethod,
}

/// Converts `amount` of `from` into `to` using the provider's rate.
pub fn convert<P: CurrencyRateProvider + ?Sized>(
    provider: &P,
    amount: f64,
    from: &str,
    to: &str,
) -> Conversion {
    let resolution = provider.get_rate(from, to);
    let converted = amount * resolution.rate;
    debug!(
        "Converted {amount} from {from} to {to} at rate {} ({}): {converted}",
        resolution.rate, resolution.method
    );
    Conversion {
        amount,
        from: from.to_string(),
        to: to.to_string(),
        rate: resolution.rate,
        converted,
        method: resolution.method,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

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

    fn majors() -> Vec<CurrencyPairQuote> {
        vec![
            quote("EUR/USD", 1.0952),
            quote("GBP/USD", 1.2734),
            quote("USD/JPY", 149.82),
            quote("USD/CHF", 0.8845),
            quote("AUD/USD", 0.6421),
            quote("USD/CAD", 1.4123),
        ]
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_identity_for_any_code() {
        for code in ["USD", "EUR", "XXX", ""] {
            let r = resolve_detailed(code, code, &majors());
            assert_eq!(r.rate, 1.0);
            assert_eq!(r.method, ResolutionMethod::Identity);
        }
        assert_eq!(resolve("ZZZ", "ZZZ", &[]), 1.0);
    }

    #[test]
    fn test_direct_pair() {
        let quotes = vec![quote("EUR/USD", 1.0952)];
        let r = resolve_detailed("EUR", "USD", &quotes);
        assert_eq!(r.rate, 1.0952);
        assert_eq!(r.method, ResolutionMethod::Direct);
    }

    #[test]
    fn test_inverse_pair() {
        let quotes = vec![quote("EUR/USD", 1.0952)];
        let r = resolve_detailed("USD", "EUR", &quotes);
        assert!(approx_eq(r.rate, 1.0 / 1.0952));
        assert_eq!(r.method, ResolutionMethod::Inverse);
    }

    #[test]
    fn test_direct_wins_over_inverse() {
        let quotes = vec![quote("USD/EUR", 0.5), quote("EUR/USD", 1.0952)];
        assert_eq!(resolve("EUR", "USD", &quotes), 1.0952);
        assert_eq!(resolve("USD", "EUR", &quotes), 0.5);
    }

    #[test]
    fn test_cross_rate_both_quoted_against_usd() {
        let quotes = vec![quote("EUR/USD", 1.0952), quote("GBP/USD", 1.2734)];
        let r = resolve_detailed("EUR", "GBP", &quotes);
        assert!(approx_eq(r.rate, 1.0952 / 1.2734));
        assert_eq!(r.method, ResolutionMethod::CrossRate);
    }

    #[test]
    fn test_cross_rate_through_inverted_legs() {
        // EUR -> JPY: EUR/USD direct, USD/JPY inverted to get JPY in USD.
        let r = resolve_detailed("EUR", "JPY", &majors());
        assert!(approx_eq(r.rate, 1.0952 / (1.0 / 149.82)));
        assert_eq!(r.method, ResolutionMethod::CrossRate);

        let r = resolve_detailed("CHF", "CAD", &majors());
        assert!(approx_eq(r.rate, (1.0 / 0.8845) / (1.0 / 1.4123)));
    }

    #[test]
    fn test_unknown_codes_default_to_one() {
        let r = resolve_detailed("XXX", "YYY", &majors());
        assert_eq!(r.rate, 1.0);
        assert_eq!(r.method, ResolutionMethod::Defaulted);
        assert!(!r.is_exact());
    }

    #[test]
    fn test_unknown_target_from_anchor_defaults() {
        let r = resolve_detailed("USD", "XXX", &majors());
        assert_eq!(r.rate, 1.0);
        assert_eq!(r.method, ResolutionMethod::Defaulted);
    }

    #[test]
    fn test_partial_cross_rate_uses_default_leg() {
        // EUR is known, NZD is not: NZD leg defaults to 1.0.
        let r = resolve_detailed("EUR", "NZD", &majors());
        assert!(approx_eq(r.rate, 1.0952));
        assert_eq!(r.method, ResolutionMethod::Defaulted);

        // Unknown source converted into the anchor returns the default leg.
        assert_eq!(resolve("NZD", "USD", &majors()), 1.0);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let quotes = vec![quote("EUR/USD", 1.0952)];
        let r = resolve_detailed("eur", "USD", &quotes);
        assert_eq!(r.rate, 1.0);
        assert_eq!(r.method, ResolutionMethod::Defaulted);
    }

    #[test]
    fn test_resolve_always_finite_positive_for_positive_rates() {
        let quotes = majors();
        let codes = [
            "USD", "EUR", "GBP", "JPY", "CHF", "AUD", "CAD", "NZD", "XXX",
        ];
        for from in codes {
            for to in codes {
                let rate = resolve(from, to, &quotes);
                assert!(rate.is_finite() && rate > 0.0, "{from}->{to} = {rate}");
            }
        }
    }

    struct MockCurrencyProvider {
        rates: HashMap<String, f64>,
    }

    impl CurrencyRateProvider for MockCurrencyProvider {
        fn get_rate(&self, from: &str, to: &str) -> RateResolution {
            let key = format!("{from}:{to}");
            match self.rates.get(&key) {
                Some(rate) => RateResolution::new(*rate, ResolutionMethod::Direct),
                None => RateResolution::new(1.0, ResolutionMethod::Defaulted),
            }
        }
    }

    #[test]
    fn test_convert_multiplies_amount_by_rate() {
        let provider = MockCurrencyProvider {
            rates: HashMap::from([("CAD:USD".to_string(), 0.75)]),
        };
        let c = convert(&provider, 1000.0, "CAD", "USD");
        assert_eq!(c.converted, 750.0);
        assert_eq!(c.rate, 0.75);
        assert_eq!(c.method, ResolutionMethod::Direct);

        let c = convert(&provider, 10.0, "CAD", "EUR");
        assert_eq!(c.converted, 10.0);
        assert_eq!(c.method, ResolutionMethod::Defaulted);
    }

    #[test]
    fn test_convert_with_quote_set() {
        let quotes = majors();
        let c = convert(quotes.as_slice(), 1000.0, "USD", "EUR");
        assert!(approx_eq(c.converted, 1000.0 / 1.0952));
        assert_eq!(c.from, "USD");
        assert_eq!(c.to, "EUR");
        assert_eq!(c.method, ResolutionMethod::Inverse);
    }
}
