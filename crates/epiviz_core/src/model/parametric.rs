//! Results of a sweep over strain parameters.

use serde::{Deserialize, Serialize};

use super::{TIME_AXIS, TRIAL_AXIS};
use crate::array::NamedArray;
use crate::error::{DataError, Result};
use crate::sweep::SweepDim;

/// Ordered parameter values used along each sweep axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrainValues {
    pub initial: Vec<f64>,
    pub strength: Vec<f64>,
    pub radius: Vec<f64>,
    pub duration_mean: Vec<f64>,
    pub duration_shape: Vec<f64>,
}

impl StrainValues {
    /// Values swept along `dim`; index `i` matches position `i` of the axis.
    #[must_use]
    pub fn values(&self, dim: SweepDim) -> &[f64] {
        match dim {
            SweepDim::Initial => &self.initial,
            SweepDim::Strength => &self.strength,
            SweepDim::Radius => &self.radius,
            SweepDim::DurationMean => &self.duration_mean,
            SweepDim::DurationShape => &self.duration_shape,
        }
    }
}

/// Susceptible counts for every combination of swept strain parameters.
///
/// `susceptible` has axes `time`, `trial` and one axis per [`SweepDim`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricData {
    pub population: u64,
    pub susceptible: NamedArray,
    pub strains: StrainValues,
}

impl ParametricData {
    /// Check that every expected axis exists and that each sweep axis is as
    /// long as its parameter value sequence.
    pub fn validate(&self) -> Result<()> {
        self.susceptible.size(TIME_AXIS)?;
        self.susceptible.size(TRIAL_AXIS)?;
        for dim in SweepDim::ALL {
            check_axis_len(&self.susceptible, dim, self.strains.values(dim).len())?;
        }
        Ok(())
    }
}

pub(crate) fn check_axis_len(array: &NamedArray, dim: SweepDim, expected: usize) -> Result<()> {
    let actual = array.size(dim.axis_name())?;
    if actual == expected {
        Ok(())
    } else {
        Err(DataError::AxisSizeMismatch {
            axis: dim.axis_name().to_string(),
            expected,
            actual,
        })
    }
}
