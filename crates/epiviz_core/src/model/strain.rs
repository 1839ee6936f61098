use serde::{Deserialize, Serialize};

/// Transmission and duration parameters for one virus variant.
///
/// The shape/mean pairs parametrize gamma-distributed incubation and
/// infection periods (see [`crate::density`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strain {
    pub strength: f64,
    /// Spatial infection kernel radius
    pub radius: f64,
    pub incubation_shape: f64,
    pub incubation_mean: f64,
    pub infection_shape: f64,
    pub infection_mean: f64,
}
