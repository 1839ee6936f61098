//! Per-compartment time series from one simulation run.

use serde::{Deserialize, Serialize};

use super::{TIME_AXIS, TRIAL_AXIS};
use crate::array::NamedArray;
use crate::error::{DataError, Result};

/// Tracked epidemic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl Compartment {
    pub const ALL: [Compartment; 4] = [
        Compartment::Susceptible,
        Compartment::Exposed,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    /// Get a display label for the compartment
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Susceptible => "Susceptible",
            Self::Exposed => "Exposed",
            Self::Infected => "Infected",
            Self::Recovered => "Recovered",
        }
    }
}

/// One run's compartment arrays, each with axes `time` and `trial`.
///
/// The four compartments are expected to sum to `population` in every cell;
/// that is the simulation engine's responsibility and is not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationData {
    pub population: u64,
    pub susceptible: NamedArray,
    pub exposed: NamedArray,
    pub infected: NamedArray,
    pub recovered: NamedArray,
}

impl SimulationData {
    #[must_use]
    pub fn compartment(&self, compartment: Compartment) -> &NamedArray {
        match compartment {
            Compartment::Susceptible => &self.susceptible,
            Compartment::Exposed => &self.exposed,
            Compartment::Infected => &self.infected,
            Compartment::Recovered => &self.recovered,
        }
    }

    /// Number of recorded time steps.
    pub fn steps(&self) -> Result<usize> {
        self.susceptible.size(TIME_AXIS)
    }

    /// Number of repeated stochastic runs.
    pub fn trials(&self) -> Result<usize> {
        self.susceptible.size(TRIAL_AXIS)
    }

    /// Check that every compartment has exactly the `time` and `trial` axes
    /// and that their sizes agree across compartments.
    pub fn validate(&self) -> Result<()> {
        let steps = self.steps()?;
        let trials = self.trials()?;

        for compartment in Compartment::ALL {
            let array = self.compartment(compartment);
            if array.ndim() != 2 {
                return Err(DataError::RankMismatch {
                    expected: 2,
                    actual: array.ndim(),
                });
            }
            for (axis, expected) in [(TIME_AXIS, steps), (TRIAL_AXIS, trials)] {
                let actual = array.size(axis)?;
                if actual != expected {
                    return Err(DataError::AxisSizeMismatch {
                        axis: axis.to_string(),
                        expected,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }
}
