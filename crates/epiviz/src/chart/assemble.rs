//! Turning summaries, sweeps and densities into figures.

use epiviz_core::density::DensityCurve;
use epiviz_core::series::LineSeries;
use epiviz_core::sweep::{SweepLine, SweepOutcome, SweepSurface};
use epiviz_core::trajectory::CompartmentSummary;
use epiviz_core::{Result, Strain};

use super::figure::{AxisLayout, Figure, Layout, LineStyle, ScatterTrace, Scene, SurfaceTrace, Trace};
use crate::config::ChartStyle;

pub const TIME_TITLE: &str = "Time (days)";
pub const POPULATION_TITLE: &str = "Individuals";
pub const CUMULATIVE_TITLE: &str = "Mean cumulative infected";
pub const DURATION_TITLE: &str = "Duration (days)";
pub const DENSITY_TITLE: &str = "Probability density";

fn line_trace(series: LineSeries, color: &str, width: f64, opacity: f64, showlegend: bool) -> Trace {
    Trace::Scatter(ScatterTrace {
        name: series.name,
        x: series.x,
        y: series.y,
        mode: "lines",
        line: LineStyle {
            color: color.to_string(),
            width,
        },
        opacity,
        showlegend,
    })
}

/// Compartment trajectories over time.
///
/// Trial overlays (when the summaries carry them) come before the mean of
/// the same compartment so the mean is drawn on top.
pub fn trajectory_figure(
    summaries: &[CompartmentSummary],
    time: &[f64],
    population: u64,
    style: &ChartStyle,
) -> Figure {
    let mut data = Vec::new();

    for entry in summaries {
        let label = entry.compartment.label();
        let color = style.compartment_colors.get(entry.compartment);

        data.extend(entry.summary.trial_series(label, time).into_iter().map(|series| {
            line_trace(
                series,
                color,
                style.trial_line_width,
                style.trial_opacity,
                false,
            )
        }));
        data.push(line_trace(
            entry.summary.mean_series(label, time),
            color,
            style.mean_line_width,
            1.0,
            true,
        ));
    }

    let yaxis = AxisLayout {
        title: POPULATION_TITLE.to_string(),
        range: style.population_range.then_some([0.0, population as f64]),
    };

    Figure {
        data,
        layout: Layout {
            title: "Compartment trajectories".to_string(),
            xaxis: AxisLayout::titled(TIME_TITLE),
            yaxis,
            scene: None,
        },
    }
}

fn sweep_line_figure(line: &SweepLine, style: &ChartStyle) -> Figure {
    let x_title = style.axis_title(line.dim);
    let trace = line_trace(
        line.to_line_series(CUMULATIVE_TITLE),
        &style.sweep_line_color,
        style.mean_line_width,
        1.0,
        true,
    );

    Figure {
        data: vec![trace],
        layout: Layout {
            title: format!("{CUMULATIVE_TITLE} vs {x_title}"),
            xaxis: AxisLayout::titled(x_title),
            yaxis: AxisLayout::titled(CUMULATIVE_TITLE),
            scene: None,
        },
    }
}

fn sweep_surface_figure(surface: &SweepSurface, style: &ChartStyle) -> Figure {
    let x_title = style.axis_title(surface.x_dim());
    let y_title = style.axis_title(surface.y_dim());
    let data = surface.to_surface_data(CUMULATIVE_TITLE);

    // Renderers index surface z by row = y
    let trace = Trace::Surface(SurfaceTrace {
        z: data.z_by_y(),
        name: data.name,
        x: data.x,
        y: data.y,
        colorscale: style.surface_colorscale.clone(),
    });

    Figure {
        data: vec![trace],
        layout: Layout {
            title: format!("{CUMULATIVE_TITLE} vs {x_title} and {y_title}"),
            xaxis: AxisLayout::titled(x_title.clone()),
            yaxis: AxisLayout::titled(y_title.clone()),
            scene: Some(Scene {
                xaxis: AxisLayout::titled(x_title),
                yaxis: AxisLayout::titled(y_title),
                zaxis: AxisLayout::titled(CUMULATIVE_TITLE),
            }),
        },
    }
}

/// Line or surface figure for a sweep result, titled with the dimension labels.
pub fn sweep_figure(outcome: &SweepOutcome, style: &ChartStyle) -> Figure {
    match outcome {
        SweepOutcome::Line(line) => sweep_line_figure(line, style),
        SweepOutcome::Surface(surface) => sweep_surface_figure(surface, style),
    }
}

/// Incubation and infectious period densities of one strain.
pub fn density_figure(strain: &Strain, points: usize, style: &ChartStyle) -> Result<Figure> {
    let curves: [(DensityCurve, &str, &str); 2] = [
        (
            strain.incubation_density(points)?,
            "Incubation period",
            style.incubation_color.as_str(),
        ),
        (
            strain.infection_density(points)?,
            "Infectious period",
            style.infection_color.as_str(),
        ),
    ];

    let data = curves
        .into_iter()
        .map(|(curve, name, color)| {
            line_trace(curve.to_line_series(name), color, style.mean_line_width, 1.0, true)
        })
        .collect();

    Ok(Figure {
        data,
        layout: Layout {
            title: "Duration distributions".to_string(),
            xaxis: AxisLayout::titled(DURATION_TITLE),
            yaxis: AxisLayout::titled(DENSITY_TITLE),
            scene: None,
        },
    })
}
