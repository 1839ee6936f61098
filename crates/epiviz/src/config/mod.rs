//! Application configuration stored in `config.yaml`.
//!
//! ```yaml
//! steps_per_day: 24.0
//! include_trials: true
//! density_points: 200
//! sweep:
//!   free: [strength, radius]
//!   fixed:
//!     initial: 2
//! style:
//!   trial_opacity: 0.2
//!   axis_titles:
//!     radius: Infection radius (m)
//! ```
//!
//! Every field is optional; missing ones fall back to their defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use epiviz_core::trajectory::DEFAULT_STEPS_PER_DAY;
use epiviz_core::{Compartment, SweepDim};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Default configuration file name inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

fn default_steps_per_day() -> f64 {
    DEFAULT_STEPS_PER_DAY
}

fn default_true() -> bool {
    true
}

fn default_density_points() -> usize {
    200
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recorded simulation steps per day of simulated time
    #[serde(default = "default_steps_per_day")]
    pub steps_per_day: f64,

    /// Draw every trial behind the trial mean
    #[serde(default = "default_true")]
    pub include_trials: bool,

    /// Samples per density curve
    #[serde(default = "default_density_points")]
    pub density_points: usize,

    /// Sweep used when none is given on the command line
    #[serde(default)]
    pub sweep: SweepSelection,

    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            steps_per_day: default_steps_per_day(),
            include_trials: true,
            density_points: default_density_points(),
            sweep: SweepSelection::default(),
            style: ChartStyle::default(),
        }
    }
}

impl AppConfig {
    /// Default config path for a data directory
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, LoadError> {
        serde_saphyr::to_string(self).map_err(|e| LoadError::Serialize {
            what: "config",
            message: e.to_string(),
        })
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.steps_per_day.is_finite() && self.steps_per_day > 0.0) {
            return Err(format!(
                "steps_per_day must be a positive number, got {}",
                self.steps_per_day
            ));
        }
        Ok(())
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config
            .validate()
            .map_err(|message| LoadError::InvalidConfig {
                path: path.to_path_buf(),
                message,
            })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `{data_dir}/config.yaml`, or the defaults if there is none.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(data_dir: &Path) -> Result<Self, LoadError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Write the config as YAML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let yaml = self.to_yaml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, yaml).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Free and fixed sweep dimensions, by axis name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSelection {
    pub free: Vec<String>,
    /// 1-based positions for pinned dimensions
    #[serde(default)]
    pub fixed: BTreeMap<String, usize>,
}

impl Default for SweepSelection {
    fn default() -> Self {
        Self {
            free: vec![SweepDim::Strength.axis_name().to_string()],
            fixed: BTreeMap::new(),
        }
    }
}

/// Line colors per compartment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompartmentColors {
    pub susceptible: String,
    pub exposed: String,
    pub infected: String,
    pub recovered: String,
}

impl Default for CompartmentColors {
    fn default() -> Self {
        Self {
            susceptible: "#1f77b4".to_string(),
            exposed: "#ff7f0e".to_string(),
            infected: "#d62728".to_string(),
            recovered: "#2ca02c".to_string(),
        }
    }
}

impl CompartmentColors {
    pub fn get(&self, compartment: Compartment) -> &str {
        match compartment {
            Compartment::Susceptible => &self.susceptible,
            Compartment::Exposed => &self.exposed,
            Compartment::Infected => &self.infected,
            Compartment::Recovered => &self.recovered,
        }
    }
}

/// Visual hints attached to assembled figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub compartment_colors: CompartmentColors,
    pub mean_line_width: f64,
    pub trial_line_width: f64,
    /// Opacity of individual trial overlays, in `[0, 1]`
    pub trial_opacity: f64,
    pub incubation_color: String,
    pub infection_color: String,
    pub sweep_line_color: String,
    /// Any plotly colorscale name
    pub surface_colorscale: String,
    /// Replaces [`SweepDim::label`] as the axis title for a dimension
    pub axis_titles: BTreeMap<SweepDim, String>,
    /// Fix the trajectory y-axis to `[0, population]`
    pub population_range: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            compartment_colors: CompartmentColors::default(),
            mean_line_width: 2.5,
            trial_line_width: 1.0,
            trial_opacity: 0.25,
            incubation_color: "#9467bd".to_string(),
            infection_color: "#d62728".to_string(),
            sweep_line_color: "#1f77b4".to_string(),
            surface_colorscale: "Viridis".to_string(),
            axis_titles: BTreeMap::new(),
            population_range: true,
        }
    }
}

impl ChartStyle {
    /// Axis title for a sweep dimension
    pub fn axis_title(&self, dim: SweepDim) -> String {
        self.axis_titles
            .get(&dim)
            .cloned()
            .unwrap_or_else(|| dim.label().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_yaml("include_trials: true\n").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.steps_per_day, 24.0);
        assert_eq!(config.density_points, 200);
        assert!(config.include_trials);
    }

    #[test]
    fn test_partial_style_override() {
        let yaml = "style:\n  trial_opacity: 0.1\n  axis_titles:\n    radius: Kernel radius\n";
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.style.trial_opacity, 0.1);
        assert_eq!(config.style.mean_line_width, 2.5);
        assert_eq!(config.style.axis_title(SweepDim::Radius), "Kernel radius");
        assert_eq!(
            config.style.axis_title(SweepDim::Strength),
            SweepDim::Strength.label()
        );
    }

    #[test]
    fn test_compartment_colors_by_compartment() {
        let colors = CompartmentColors::default();
        assert_eq!(colors.get(Compartment::Infected), "#d62728");
        assert_eq!(colors.get(Compartment::Susceptible), "#1f77b4");
    }
}
