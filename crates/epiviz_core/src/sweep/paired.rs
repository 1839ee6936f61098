//! Sweep results aligned with the parameter values that produced them.
//!
//! The constructors here are the single place where "one result per swept
//! value" is enforced; once built, the lengths cannot drift apart.

use serde::Serialize;

use super::SweepDim;
use crate::error::{DataError, Result};
use crate::series::{LineSeries, SurfaceData};

/// Parameter values paired positionally with results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedSeries {
    values: Vec<f64>,
    results: Vec<f64>,
}

impl PairedSeries {
    /// # Errors
    ///
    /// [`DataError::AxisSizeMismatch`] (reported against `axis`) if the two
    /// sequences differ in length.
    pub fn try_new(axis: &str, values: Vec<f64>, results: Vec<f64>) -> Result<Self> {
        if values.len() != results.len() {
            return Err(DataError::AxisSizeMismatch {
                axis: axis.to_string(),
                expected: values.len(),
                actual: results.len(),
            });
        }
        Ok(Self { values, results })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn results(&self) -> &[f64] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(value, result)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.results.iter().copied())
    }
}

/// Mean cumulative infections along one free dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepLine {
    pub dim: SweepDim,
    pub series: PairedSeries,
}

impl SweepLine {
    #[must_use]
    pub fn to_line_series(&self, name: impl Into<String>) -> LineSeries {
        LineSeries {
            name: name.into(),
            x: self.series.values().to_vec(),
            y: self.series.results().to_vec(),
        }
    }
}

/// Mean cumulative infections over two free dimensions.
///
/// `z[i][j]` is the result at `(x[i], y[j])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSurface {
    x_dim: SweepDim,
    y_dim: SweepDim,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<Vec<f64>>,
}

impl SweepSurface {
    /// # Errors
    ///
    /// [`DataError::AxisSizeMismatch`] if `z` does not have one row per `x`
    /// value or a row does not have one entry per `y` value.
    pub fn try_new(
        x_dim: SweepDim,
        y_dim: SweepDim,
        x: Vec<f64>,
        y: Vec<f64>,
        z: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if z.len() != x.len() {
            return Err(DataError::AxisSizeMismatch {
                axis: x_dim.axis_name().to_string(),
                expected: x.len(),
                actual: z.len(),
            });
        }
        if let Some(row) = z.iter().find(|row| row.len() != y.len()) {
            return Err(DataError::AxisSizeMismatch {
                axis: y_dim.axis_name().to_string(),
                expected: y.len(),
                actual: row.len(),
            });
        }
        Ok(Self {
            x_dim,
            y_dim,
            x,
            y,
            z,
        })
    }

    pub fn x_dim(&self) -> SweepDim {
        self.x_dim
    }

    pub fn y_dim(&self) -> SweepDim {
        self.y_dim
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[Vec<f64>] {
        &self.z
    }

    /// Shape of the grid as `(x.len(), y.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    #[must_use]
    pub fn to_surface_data(&self, name: impl Into<String>) -> SurfaceData {
        SurfaceData {
            name: name.into(),
            x: self.x.clone(),
            y: self.y.clone(),
            z: self.z.clone(),
        }
    }
}

/// Result of a sweep aggregation, one variant per number of free dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SweepOutcome {
    Line(SweepLine),
    Surface(SweepSurface),
}
