//! Reading simulation output from JSON files.
//!
//! Arrays use the `{ "axes": [{"name", "size"}], "data": [...] }` layout and
//! are validated while they are parsed. Whole records are validated again
//! after loading so that inconsistent compartments or sweep values are caught
//! before any chart is assembled.

use std::fs;
use std::path::Path;

use epiviz_core::{ParametricData, SimulationData, Strain};
use serde::de::DeserializeOwned;

use crate::error::LoadError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a per-compartment `[time, trial]` record.
pub fn load_simulation(path: &Path) -> Result<SimulationData, LoadError> {
    let data: SimulationData = read_json(path)?;
    let invalid = |source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    };

    data.validate().map_err(invalid)?;
    let steps = data.steps().map_err(invalid)?;
    let trials = data.trials().map_err(invalid)?;

    tracing::info!(
        path = %path.display(),
        population = data.population,
        steps,
        trials,
        "Loaded simulation data"
    );
    Ok(data)
}

/// Load a parametric sweep record.
pub fn load_parametric(path: &Path) -> Result<ParametricData, LoadError> {
    let data: ParametricData = read_json(path)?;
    data.validate().map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        population = data.population,
        shape = ?data.susceptible.shape(),
        "Loaded parametric sweep"
    );
    Ok(data)
}

pub fn load_strain(path: &Path) -> Result<Strain, LoadError> {
    let strain: Strain = read_json(path)?;
    tracing::info!(path = %path.display(), ?strain, "Loaded strain");
    Ok(strain)
}
