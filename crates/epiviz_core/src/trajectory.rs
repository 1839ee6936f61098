//! Trial-averaged compartment trajectories.
//!
//! Reduces a `[time, trial]` array to the mean over trials and, optionally,
//! the individual trial series for drawing behind the mean.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::array::{NamedArray, SliceSpec};
use crate::error::Result;
use crate::model::{Compartment, SimulationData, TIME_AXIS, TRIAL_AXIS};
use crate::series::LineSeries;

/// Recorded steps per day for hourly simulation output.
pub const DEFAULT_STEPS_PER_DAY: f64 = 24.0;

/// Mean over trials plus the untouched per-trial series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// `mean[t]` is the average over trials at step `t`
    pub mean: Vec<f64>,
    /// One series per trial, in trial order, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trials: Option<Vec<Vec<f64>>>,
}

impl TrajectorySummary {
    /// Number of time steps
    pub fn steps(&self) -> usize {
        self.mean.len()
    }

    /// Mean series against the given time values.
    #[must_use]
    pub fn mean_series(&self, name: impl Into<String>, time: &[f64]) -> LineSeries {
        LineSeries {
            name: name.into(),
            x: time.to_vec(),
            y: self.mean.clone(),
        }
    }

    /// Per-trial series against the given time values, empty if trials were
    /// not kept.
    #[must_use]
    pub fn trial_series(&self, name: &str, time: &[f64]) -> Vec<LineSeries> {
        self.trials
            .iter()
            .flatten()
            .enumerate()
            .map(|(k, values)| LineSeries {
                name: format!("{name} (trial {})", k + 1),
                x: time.to_vec(),
                y: values.clone(),
            })
            .collect()
    }
}

/// Summary for one compartment of a [`SimulationData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompartmentSummary {
    pub compartment: Compartment,
    pub summary: TrajectorySummary,
}

/// Summarize a `[time, trial]` array.
///
/// # Errors
///
/// [`crate::error::DataError::UnknownAxis`] if either axis is missing,
/// [`crate::error::DataError::EmptyAxis`] if there are no trials and
/// [`crate::error::DataError::RankMismatch`] if the array has other axes.
pub fn summarize(array: &NamedArray, include_trials: bool) -> Result<TrajectorySummary> {
    array.size(TIME_AXIS)?;
    let mean = array.reduce_mean(TRIAL_AXIS)?.to_vec1()?;

    let trials = if include_trials {
        let count = array.size(TRIAL_AXIS)?;
        let series = (0..count)
            .map(|k| {
                array
                    .select(&SliceSpec::new().index(TRIAL_AXIS, k))?
                    .to_vec1()
            })
            .collect::<Result<Vec<_>>>()?;
        Some(series)
    } else {
        None
    };

    Ok(TrajectorySummary { mean, trials })
}

/// Summarize every compartment, in [`Compartment::ALL`] order.
///
/// Compartments are independent, so with the `parallel` feature they are
/// reduced concurrently.
pub fn summarize_all(
    data: &SimulationData,
    include_trials: bool,
) -> Result<Vec<CompartmentSummary>> {
    data.validate()?;

    let summarize_one = |compartment: &Compartment| -> Result<CompartmentSummary> {
        Ok(CompartmentSummary {
            compartment: *compartment,
            summary: summarize(data.compartment(*compartment), include_trials)?,
        })
    };

    #[cfg(feature = "parallel")]
    let summaries = Compartment::ALL
        .par_iter()
        .map(summarize_one)
        .collect::<Result<Vec<_>>>();

    #[cfg(not(feature = "parallel"))]
    let summaries = Compartment::ALL
        .iter()
        .map(summarize_one)
        .collect::<Result<Vec<_>>>();

    summaries
}

/// Time in days for each recorded step: `(0, 1, ..., steps - 1) / steps_per_day`.
#[must_use]
pub fn time_axis(steps: usize, steps_per_day: f64) -> Vec<f64> {
    (0..steps).map(|i| i as f64 / steps_per_day).collect()
}
