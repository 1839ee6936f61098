//! Input records produced by the simulation engine.
//!
//! These types are read-only inputs: nothing in this crate mutates them.

mod parametric;
mod simulation;
mod strain;

pub use parametric::{ParametricData, StrainValues};
pub use simulation::{Compartment, SimulationData};
pub use strain::Strain;

/// Name of the recorded-step axis.
pub const TIME_AXIS: &str = "time";
/// Name of the repeated-run axis.
pub const TRIAL_AXIS: &str = "trial";
