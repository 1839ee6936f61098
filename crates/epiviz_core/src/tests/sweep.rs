//! Tests for parametric sweep aggregation
//!
//! These tests verify:
//! - 1D results have one entry per swept value
//! - 2D results follow the request order, not the storage order
//! - Fixed dimensions pin the right slice
//! - Degenerate inputs (no infections, single values) behave as expected

use super::fixtures::{POPULATION, parametric, strains, sweep_axes};
use crate::array::NamedArray;
use crate::error::DataError;
use crate::model::{ParametricData, StrainValues};
use crate::sweep::{
    SweepDim, SweepOutcome, SweepRequest, aggregate, aggregate_line, aggregate_surface,
    cumulative_infected,
};

#[test]
fn test_line_over_strength() {
    let data = parametric();
    let line = aggregate_line(&data, SweepDim::Strength, []).unwrap();

    assert_eq!(line.dim, SweepDim::Strength);
    assert_eq!(line.series.len(), data.strains.strength.len());
    assert_eq!(line.series.values(), &[0.1, 0.2, 0.3]);
    assert_eq!(line.series.results(), &[1.0, 4.0, 7.0]);
}

#[test]
fn test_line_respects_fixed_indices() {
    let data = parametric();
    let line = aggregate_line(
        &data,
        SweepDim::Strength,
        [(SweepDim::Radius, 2), (SweepDim::Initial, 2)],
    )
    .unwrap();

    assert_eq!(line.series.results(), &[12.0, 15.0, 18.0]);
}

#[test]
fn test_surface_in_request_order() {
    let data = parametric();

    let surface =
        aggregate_surface(&data, SweepDim::Radius, SweepDim::Strength, [(SweepDim::Initial, 2)])
            .unwrap();
    assert_eq!(surface.shape(), (2, 3));
    assert_eq!(surface.x(), &[1.0, 2.0]);
    assert_eq!(surface.y(), &[0.1, 0.2, 0.3]);
    assert_eq!(
        surface.z(),
        &[vec![11.0, 14.0, 17.0], vec![12.0, 15.0, 18.0]]
    );

    let flipped =
        aggregate_surface(&data, SweepDim::Strength, SweepDim::Radius, [(SweepDim::Initial, 2)])
            .unwrap();
    assert_eq!(flipped.shape(), (3, 2));
    assert_eq!(flipped.x_dim(), SweepDim::Strength);
    assert_eq!(flipped.z()[2], vec![17.0, 18.0]);
}

#[test]
fn test_aggregate_outcome_kind() {
    let data = parametric();

    let request = SweepRequest::from_names(&["initial"], &[]).unwrap();
    assert!(matches!(
        aggregate(&data, &request).unwrap(),
        SweepOutcome::Line(_)
    ));

    let request = SweepRequest::from_names(&["initial", "radius"], &[]).unwrap();
    assert!(matches!(
        aggregate(&data, &request).unwrap(),
        SweepOutcome::Surface(_)
    ));
}

#[test]
fn test_no_infection_gives_zeros() {
    let strains = strains();
    let susceptible =
        NamedArray::filled(sweep_axes(5, 3, &strains), POPULATION as f64).unwrap();
    let data = ParametricData {
        population: POPULATION,
        susceptible,
        strains,
    };

    let surface =
        aggregate_surface(&data, SweepDim::Strength, SweepDim::Radius, []).unwrap();
    assert!(surface.z().iter().flatten().all(|&v| v == 0.0));

    assert!(cumulative_infected(&data).data().iter().all(|&v| v == 0.0));
}

#[test]
fn test_final_step_trial_mean() {
    let strains = StrainValues {
        initial: vec![1.0],
        strength: vec![0.5],
        radius: vec![1.0],
        duration_mean: vec![7.0],
        duration_shape: vec![2.0],
    };
    // time=2, trial=2; final step holds [20, 30] susceptible
    let susceptible = NamedArray::new(
        sweep_axes(2, 2, &strains),
        vec![100.0, 100.0, 20.0, 30.0],
    )
    .unwrap();
    let data = ParametricData {
        population: 100,
        susceptible,
        strains,
    };

    let line = aggregate_line(&data, SweepDim::Strength, []).unwrap();
    assert_eq!(line.series.results(), &[75.0]);
}

#[test]
fn test_value_sequence_length_mismatch() {
    let mut data = parametric();
    data.strains.strength = vec![0.1, 0.2, 0.3, 0.4];

    let err = aggregate_line(&data, SweepDim::Strength, []).unwrap_err();
    assert_eq!(
        err,
        DataError::AxisSizeMismatch {
            axis: "strength".to_string(),
            expected: 4,
            actual: 3
        }
    );
    assert!(data.validate().is_err());
}

#[test]
fn test_fixed_index_past_axis_end() {
    let data = parametric();
    let err = aggregate_line(&data, SweepDim::Strength, [(SweepDim::Radius, 3)]).unwrap_err();
    assert_eq!(
        err,
        DataError::IndexOutOfRange {
            axis: "radius".to_string(),
            index: 3,
            size: 2
        }
    );
}

#[test]
fn test_line_series_for_plotting() {
    let data = parametric();
    let line = aggregate_line(&data, SweepDim::Initial, []).unwrap();
    let series = line.to_line_series("Mean cumulative infected");

    assert_eq!(series.x, vec![1.0, 5.0]);
    assert_eq!(series.y, vec![1.0, 11.0]);
}
