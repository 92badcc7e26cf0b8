//! Market data model, rate resolution and series generation

pub mod config;
pub mod indicators;
pub mod log;
pub mod market;
pub mod quote;
pub mod rates;
pub mod series;
pub mod state;

// Re-export main types for cleaner imports
pub use quote::{CurrencyPairQuote, known_currencies};
pub use rates::{CurrencyRateProvider, RateResolution, ResolutionMethod, resolve, resolve_detailed};
pub use series::{RatePoint, Timeframe};
pub use state::{Action, DashboardState, reduce};
