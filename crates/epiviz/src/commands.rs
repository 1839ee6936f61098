//! One function per CLI subcommand: load inputs, shape them, build a figure.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, bail};
use epiviz_core::SweepRequest;
use epiviz_core::sweep::aggregate;
use epiviz_core::trajectory::{summarize_all, time_axis};

use crate::chart::{Figure, density_figure, sweep_figure, trajectory_figure};
use crate::config::{AppConfig, SweepSelection};
use crate::data::{load_parametric, load_simulation, load_strain};

pub fn trajectory(input: &Path, config: &AppConfig) -> color_eyre::Result<Figure> {
    let data = load_simulation(input)?;
    let summaries = summarize_all(&data, config.include_trials)
        .wrap_err("Failed to summarize trajectories")?;
    let time = time_axis(data.steps()?, config.steps_per_day);

    Ok(trajectory_figure(
        &summaries,
        &time,
        data.population,
        &config.style,
    ))
}

pub fn sweep(
    input: &Path,
    selection: &SweepSelection,
    config: &AppConfig,
) -> color_eyre::Result<Figure> {
    let free: Vec<&str> = selection.free.iter().map(String::as_str).collect();
    let fixed: Vec<(&str, usize)> = selection
        .fixed
        .iter()
        .map(|(name, index)| (name.as_str(), *index))
        .collect();
    let request = SweepRequest::from_names(&free, &fixed).wrap_err("Invalid sweep selection")?;

    let data = load_parametric(input)?;
    let outcome = aggregate(&data, &request).wrap_err("Failed to aggregate sweep")?;
    tracing::info!(free = ?request.free_dims(), "Aggregated sweep");

    Ok(sweep_figure(&outcome, &config.style))
}

pub fn density(
    input: &Path,
    points: Option<usize>,
    config: &AppConfig,
) -> color_eyre::Result<Figure> {
    let strain = load_strain(input)?;
    let points = points.unwrap_or(config.density_points);
    density_figure(&strain, points, &config.style).wrap_err("Failed to evaluate densities")
}

/// Write the figure as JSON to `output`, or to stdout when there is none.
pub fn write_figure(figure: &Figure, output: Option<&Path>) -> color_eyre::Result<()> {
    let json = figure.to_json().wrap_err("Failed to serialize figure")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, json).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), traces = figure.data.len(), "Wrote figure");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Parse a `name=index` fixed-dimension argument.
pub fn parse_fixed(arg: &str) -> color_eyre::Result<(String, usize)> {
    let Some((name, index)) = arg.split_once('=') else {
        bail!("expected NAME=INDEX, got '{arg}'");
    };
    let index = index
        .trim()
        .parse()
        .wrap_err_with(|| format!("invalid index in '{arg}'"))?;
    Ok((name.trim().to_string(), index))
}
