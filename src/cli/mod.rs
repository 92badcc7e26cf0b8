//! Terminal rendering of the dashboard panels

pub mod chart;
pub mod converter;
pub mod dashboard;
pub mod heatmap;
pub mod indicators;
pub mod pairs;
pub mod setup;
pub mod ui;
pub mod volume;
