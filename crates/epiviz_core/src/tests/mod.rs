//! Scenario tests for the data-shaping pipeline
//!
//! Tests are organized by topic:
//! - `fixtures` - Synthetic simulation and sweep inputs shared by the scenarios
//! - `trajectory` - Trial averaging across all compartments
//! - `sweep` - 1D and 2D parametric sweep aggregation
//! - `serialization` - Loading inputs from their JSON layout

mod sweep;
