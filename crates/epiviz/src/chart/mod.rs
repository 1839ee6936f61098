//! Figure descriptions for an external renderer.
//!
//! [`figure`] holds the serializable trace and layout types (a subset of the
//! plotly figure schema); [`assemble`] builds them from summarized data and an
//! injected [`crate::config::ChartStyle`].

pub mod assemble;
pub mod figure;

pub use assemble::{density_figure, sweep_figure, trajectory_figure};
pub use figure::{AxisLayout, Figure, Layout, LineStyle, ScatterTrace, Scene, SurfaceTrace, Trace};
