//! Gamma probability densities for strain incubation and infection periods.
//!
//! Durations are parametrized by shape `k` and mean `m`; the scale is
//! `θ = m / k`, so the standard deviation is `m / √k`.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Gamma};

use crate::error::{DataError, Result};
use crate::model::Strain;
use crate::series::LineSeries;

/// How many standard deviations past the mean a strain curve extends.
const TAIL_SDS: f64 = 4.0;

/// Gamma distribution with a validated shape and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaDensity {
    dist: Gamma,
}

impl GammaDensity {
    /// # Errors
    ///
    /// [`DataError::InvalidDistribution`] unless both parameters are finite
    /// and positive.
    pub fn from_shape_mean(shape: f64, mean: f64) -> Result<Self> {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(DataError::InvalidDistribution {
                shape,
                mean,
                reason: "shape must be positive",
            });
        }
        if !(mean.is_finite() && mean > 0.0) {
            return Err(DataError::InvalidDistribution {
                shape,
                mean,
                reason: "mean must be positive",
            });
        }

        // statrs parametrizes by rate = 1 / scale
        let dist = Gamma::new(shape, shape / mean).map_err(|_| DataError::InvalidDistribution {
            shape,
            mean,
            reason: "rate out of range",
        })?;
        Ok(Self { dist })
    }

    pub fn shape(&self) -> f64 {
        self.dist.shape()
    }

    pub fn scale(&self) -> f64 {
        1.0 / self.dist.rate()
    }

    pub fn mean(&self) -> f64 {
        self.shape() * self.scale()
    }

    pub fn std_dev(&self) -> f64 {
        self.shape().sqrt() * self.scale()
    }

    /// Density at `x`. Zero for negative `x`; at `x = 0` the density is
    /// infinite when `shape < 1`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match self.shape().partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => f64::INFINITY,
                Some(std::cmp::Ordering::Equal) => 1.0 / self.scale(),
                _ => 0.0,
            };
        }
        self.dist.pdf(x)
    }
}

/// Gamma density with the given shape and mean, evaluated at `x`.
///
/// # Errors
///
/// [`DataError::InvalidDistribution`] for non-positive parameters.
pub fn gamma_pdf(x: f64, shape: f64, mean: f64) -> Result<f64> {
    Ok(GammaDensity::from_shape_mean(shape, mean)?.pdf(x))
}

/// Density sampled on an evenly spaced grid starting at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
}

impl DensityCurve {
    /// Sample `points` values over `[0, x_max]`, both ends included.
    ///
    /// # Errors
    ///
    /// [`DataError::InvalidDistribution`] for non-positive parameters, a
    /// non-positive `x_max` or fewer than two points.
    pub fn sample(shape: f64, mean: f64, x_max: f64, points: usize) -> Result<Self> {
        let density = GammaDensity::from_shape_mean(shape, mean)?;
        if points < 2 {
            return Err(DataError::InvalidDistribution {
                shape,
                mean,
                reason: "at least two sample points are needed",
            });
        }
        if !(x_max.is_finite() && x_max > 0.0) {
            return Err(DataError::InvalidDistribution {
                shape,
                mean,
                reason: "sample range must be positive",
            });
        }

        let step = x_max / (points - 1) as f64;
        let x: Vec<f64> = (0..points).map(|i| i as f64 * step).collect();
        let pdf = x.iter().map(|&x| density.pdf(x)).collect();
        Ok(Self { x, pdf })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn to_line_series(&self, name: impl Into<String>) -> LineSeries {
        LineSeries {
            name: name.into(),
            x: self.x.clone(),
            y: self.pdf.clone(),
        }
    }
}

fn strain_curve(shape: f64, mean: f64, points: usize) -> Result<DensityCurve> {
    let density = GammaDensity::from_shape_mean(shape, mean)?;
    let x_max = density.mean() + TAIL_SDS * density.std_dev();
    DensityCurve::sample(shape, mean, x_max, points)
}

impl Strain {
    /// Incubation period density over `[0, mean + 4 sd]`.
    pub fn incubation_density(&self, points: usize) -> Result<DensityCurve> {
        strain_curve(self.incubation_shape, self.incubation_mean, points)
    }

    /// Infectious period density over `[0, mean + 4 sd]`.
    pub fn infection_density(&self, points: usize) -> Result<DensityCurve> {
        strain_curve(self.infection_shape, self.infection_mean, points)
    }
}
