//! Strain parameters a sweep can vary, and their axis names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Strain parameter varied across a parametric sweep.
///
/// Each variant is one axis of [`crate::model::ParametricData::susceptible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDim {
    /// Initial number of infected individuals
    Initial,
    Strength,
    Radius,
    DurationMean,
    DurationShape,
}

impl SweepDim {
    /// All sweep dimensions in storage order.
    pub const ALL: [SweepDim; 5] = [
        SweepDim::Initial,
        SweepDim::Strength,
        SweepDim::Radius,
        SweepDim::DurationMean,
        SweepDim::DurationShape,
    ];

    /// Name of the matching array axis
    #[must_use]
    pub fn axis_name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Strength => "strength",
            Self::Radius => "radius",
            Self::DurationMean => "duration_mean",
            Self::DurationShape => "duration_shape",
        }
    }

    /// Get a display label suitable for chart axes
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial infected",
            Self::Strength => "Infection strength",
            Self::Radius => "Infection radius",
            Self::DurationMean => "Mean infection duration (days)",
            Self::DurationShape => "Infection duration shape",
        }
    }
}

impl fmt::Display for SweepDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.axis_name())
    }
}

impl FromStr for SweepDim {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepDim::ALL
            .into_iter()
            .find(|dim| dim.axis_name() == s)
            .ok_or_else(|| DataError::UnknownDimension {
                name: s.to_string(),
            })
    }
}
