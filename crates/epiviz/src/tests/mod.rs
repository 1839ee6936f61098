//! Scenario tests for the epiviz application layer
//!
//! Tests are organized by topic:
//! - `config` - Loading and saving `config.yaml`
//! - `data` - Reading simulation records from disk
//! - `chart` - Figure assembly from summarized data
//! - `commands` - Subcommands end to end, from input files to figure JSON

mod config;

use std::path::{Path, PathBuf};

/// Two-step, two-trial simulation record in its JSON layout.
pub(crate) const SIMULATION_JSON: &str = r#"{
    "population": 100,
    "susceptible": {"axes": [{"name": "time", "size": 2}, {"name": "trial", "size": 2}], "data": [100.0, 100.0, 80.0, 90.0]},
    "exposed": {"axes": [{"name": "time", "size": 2}, {"name": "trial", "size": 2}], "data": [0.0, 0.0, 10.0, 4.0]},
    "infected": {"axes": [{"name": "time", "size": 2}, {"name": "trial", "size": 2}], "data": [0.0, 0.0, 6.0, 4.0]},
    "recovered": {"axes": [{"name": "time", "size": 2}, {"name": "trial", "size": 2}], "data": [0.0, 0.0, 4.0, 2.0]}
}"#;

/// Sweep with two strength values and two radius values, one trial and two
/// steps. Final susceptible counts are 90/80 (strength 1) and 70/60
/// (strength 2) for radius 1/2.
pub(crate) const PARAMETRIC_JSON: &str = r#"{
    "population": 100,
    "susceptible": {
        "axes": [
            {"name": "time", "size": 2},
            {"name": "trial", "size": 1},
            {"name": "initial", "size": 1},
            {"name": "strength", "size": 2},
            {"name": "radius", "size": 2},
            {"name": "duration_mean", "size": 1},
            {"name": "duration_shape", "size": 1}
        ],
        "data": [100.0, 100.0, 100.0, 100.0, 90.0, 80.0, 70.0, 60.0]
    },
    "strains": {
        "initial": [5.0],
        "strength": [0.2, 0.4],
        "radius": [1.0, 3.0],
        "duration_mean": [7.0],
        "duration_shape": [2.0]
    }
}"#;

pub(crate) const STRAIN_JSON: &str = r#"{
    "strength": 0.3,
    "radius": 2.0,
    "incubation_shape": 4.0,
    "incubation_mean": 5.0,
    "infection_shape": 2.0,
    "infection_mean": 8.0
}"#;

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
