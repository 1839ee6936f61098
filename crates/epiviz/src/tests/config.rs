//! Tests for config.yaml handling

use std::collections::BTreeMap;

use epiviz_core::SweepDim;

use super::write_file;
use crate::config::{AppConfig, ChartStyle, SweepSelection};
use crate::error::LoadError;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_config_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        steps_per_day: 12.0,
        include_trials: false,
        density_points: 50,
        sweep: SweepSelection {
            free: vec!["radius".to_string(), "initial".to_string()],
            fixed: BTreeMap::from([("strength".to_string(), 3)]),
        },
        style: ChartStyle {
            trial_opacity: 0.5,
            surface_colorscale: "Cividis".to_string(),
            axis_titles: BTreeMap::from([(SweepDim::DurationMean, "Mean duration".to_string())]),
            population_range: false,
            ..ChartStyle::default()
        },
    };

    let path = AppConfig::path(&dir.path().join("nested"));
    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_in_data_dir_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "config.yaml", "steps_per_day: 1.0\ndensity_points: 10\n");

    let config = AppConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config.steps_per_day, 1.0);
    assert_eq!(config.density_points, 10);
    assert!(config.include_trials);
}

#[test]
fn test_unparsable_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "config.yaml", "steps_per_day: [not, a, number]\n");

    let err = AppConfig::load_or_default(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_non_positive_steps_per_day_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    for value in ["0.0", "-24.0"] {
        write_file(dir.path(), "config.yaml", &format!("steps_per_day: {value}\n"));
        let err = AppConfig::load_or_default(dir.path()).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidConfig { ref message, .. } if message.contains("steps_per_day")),
            "{value}: {err}"
        );
    }
}

#[test]
fn test_default_config_is_valid() {
    assert_eq!(AppConfig::default().validate(), Ok(()));
}
