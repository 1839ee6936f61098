//! Plain output series handed to renderers.
//!
//! These carry no axis names or style; the chart layer decides how they look.

use serde::{Deserialize, Serialize};

/// A named `y(x)` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl LineSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A named `z(x, y)` grid where `z[i][j]` belongs to `(x[i], y[j])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceData {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl SurfaceData {
    /// Grid indexed `[j][i]`, i.e. one row per `y` value.
    ///
    /// Most plotting libraries expect surfaces in this orientation. Cells
    /// missing from a short row come out as NaN.
    #[must_use]
    pub fn z_by_y(&self) -> Vec<Vec<f64>> {
        (0..self.y.len())
            .map(|j| {
                self.z
                    .iter()
                    .map(|row| row.get(j).copied().unwrap_or(f64::NAN))
                    .collect()
            })
            .collect()
    }
}
