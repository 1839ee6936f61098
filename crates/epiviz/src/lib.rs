//! Epidemic simulation visualization
//!
//! This crate prepares epidemic simulation output for plotting. It loads
//! simulation records, shapes them with `epiviz_core` and emits
//! renderer-agnostic figure JSON (plotly-style traces and layout):
//! - Compartment trajectories with optional trial overlays
//! - Parametric sweep lines and surfaces
//! - Incubation and infectious period densities

pub mod chart;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, ChartStyle, SweepSelection};
pub use error::LoadError;
pub use logging::init_logging;
