//! Dashboard view state and its transitions.
//!
//! State is an immutable value; every change goes through [`reduce`], which
//! returns the next state without touching the previous one.

use crate::core::indicators::Indicator;
use crate::core::series::Timeframe;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl Default for ConverterState {
    fn default() -> Self {
        ConverterState {
            amount: 1000.0,
            from: "USD".to_string(),
            to: "EUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub selected_pair: String,
    pub timeframe: Timeframe,
    pub active_indicators: BTreeSet<Indicator>,
    pub converter: ConverterState,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            selected_pair: "EUR/USD".to_string(),
            timeframe: Timeframe::OneDay,
            active_indicators: Indicator::ALL.into_iter().collect(),
            converter: ConverterState::default(),
        }
    }
}

impl DashboardState {
    pub fn is_active(&self, indicator: Indicator) -> bool {
        self.active_indicators.contains(&indicator)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectPair(String),
    SetTimeframe(Timeframe),
    ToggleIndicator(Indicator),
    /// Replaces the active indicator set.
    ShowIndicators(Vec<Indicator>),
    SetAmount(f64),
    SetFrom(String),
    SetTo(String),
    SwapCurrencies,
}

/// Returns the state that follows `state` after `action`.
pub fn reduce(state: &DashboardState, action: Action) -> DashboardState {
    let mut next = state.clone();
    match action {
        Action::SelectPair(pair) => next.selected_pair = pair,
        Action::SetTimeframe(timeframe) => next.timeframe = timeframe,
        Action::ToggleIndicator(indicator) => {
            if !next.active_indicators.remove(&indicator) {
                next.active_indicators.insert(indicator);
            }
        }
        Action::ShowIndicators(indicators) => {
            next.active_indicators = indicators.into_iter().collect();
        }
        Action::SetAmount(amount) => next.converter.amount = amount,
        Action::SetFrom(code) => next.converter.from = code,
        Action::SetTo(code) => next.converter.to = code,
        Action::SwapCurrencies => {
            std::mem::swap(&mut next.converter.from, &mut next.converter.to);
        }
    }
    next
}

/// Applies `actions` in order, starting from `state`.
pub fn reduce_all(
    state: &DashboardState,
    actions: impl IntoIterator<Item = Action>,
) -> DashboardState {
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}
