//! Data shaping for epidemic simulation output
//!
//! This crate turns raw per-trial, per-step simulation arrays into series
//! and grids ready for plotting. It supports:
//! - Named-axis arrays with slicing, reduction and axis permutation
//! - Trial-averaged compartment trajectories (with optional trial overlays)
//! - Parametric sweep aggregation over one or two free strain parameters
//! - Gamma densities for strain incubation and infection periods
//!
//! # Example
//!
//! ```ignore
//! use epiviz_core::sweep::{aggregate, SweepRequest};
//!
//! let request = SweepRequest::from_names(&["strength", "radius"], &[("initial", 2)])?;
//! let outcome = aggregate(&parametric_data, &request)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod array;
pub mod density;
pub mod error;
pub mod sweep;
pub mod trajectory;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;
pub mod series;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use array::{Axis, AxisSelector, NamedArray, SliceSpec};
pub use error::{DataError, Result};
pub use model::{Compartment, ParametricData, SimulationData, Strain, StrainValues};
pub use series::{LineSeries, SurfaceData};
pub use sweep::{SweepDim, SweepOutcome, SweepRequest};
