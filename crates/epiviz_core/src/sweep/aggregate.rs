//! Mean cumulative infections as a function of one or two swept parameters.

use super::paired::{PairedSeries, SweepLine, SweepOutcome, SweepSurface};
use super::{SweepDim, SweepRequest};
use crate::array::NamedArray;
use crate::error::{DataError, Result};
use crate::model::{ParametricData, TRIAL_AXIS};

/// `population - susceptible` for every cell, with the same axes.
#[must_use]
pub fn cumulative_infected(data: &ParametricData) -> NamedArray {
    let population = data.population as f64;
    data.susceptible.map(|s| population - s)
}

/// Aggregate a parametric sweep for plotting.
///
/// Slices the cumulative-infected array as described by `request` (final time
/// step, fixed dimensions pinned), averages over trials and pairs the result
/// with the swept parameter values. Axes of a 2D result follow the order of
/// the request's free dimensions, not the storage order.
///
/// # Errors
///
/// Any error from [`SweepRequest::slice_spec`], [`DataError::EmptyAxis`] when
/// there are no trials, and [`DataError::AxisSizeMismatch`] when a free axis
/// is not as long as its parameter value sequence.
pub fn aggregate(data: &ParametricData, request: &SweepRequest) -> Result<SweepOutcome> {
    let spec = request.slice_spec(&data.susceptible)?;

    // Selecting first keeps the subtraction to the cells that are plotted;
    // the elementwise map commutes with the slice.
    let population = data.population as f64;
    let sliced = data.susceptible.select(&spec)?.map(|s| population - s);
    let mean = sliced.reduce_mean(TRIAL_AXIS)?;

    let order: Vec<&str> = request.free_dims().iter().map(|d| d.axis_name()).collect();
    let mean = mean.permute(&order)?;

    tracing::debug!(
        free = ?request.free_dims(),
        shape = ?mean.shape(),
        "Aggregated parametric sweep"
    );

    match *request.free_dims() {
        [dim] => {
            let series = PairedSeries::try_new(
                dim.axis_name(),
                data.strains.values(dim).to_vec(),
                mean.to_vec1()?,
            )?;
            Ok(SweepOutcome::Line(SweepLine { dim, series }))
        }
        [x_dim, y_dim] => {
            let surface = SweepSurface::try_new(
                x_dim,
                y_dim,
                data.strains.values(x_dim).to_vec(),
                data.strains.values(y_dim).to_vec(),
                mean.to_vec2()?,
            )?;
            Ok(SweepOutcome::Surface(surface))
        }
        _ => Err(DataError::FreeDimensionCount {
            count: request.free_dims().len(),
        }),
    }
}

/// Convenience wrapper for a single free dimension.
pub fn aggregate_line(
    data: &ParametricData,
    dim: SweepDim,
    fixed: impl IntoIterator<Item = (SweepDim, usize)>,
) -> Result<SweepLine> {
    let request = SweepRequest::new(&[dim], fixed)?;
    match aggregate(data, &request)? {
        SweepOutcome::Line(line) => Ok(line),
        SweepOutcome::Surface(_) => Err(DataError::FreeDimensionCount { count: 2 }),
    }
}

/// Convenience wrapper for two free dimensions.
pub fn aggregate_surface(
    data: &ParametricData,
    x_dim: SweepDim,
    y_dim: SweepDim,
    fixed: impl IntoIterator<Item = (SweepDim, usize)>,
) -> Result<SweepSurface> {
    let request = SweepRequest::new(&[x_dim, y_dim], fixed)?;
    match aggregate(data, &request)? {
        SweepOutcome::Surface(surface) => Ok(surface),
        SweepOutcome::Line(_) => Err(DataError::FreeDimensionCount { count: 1 }),
    }
}
