//! Parametric sweep selection and aggregation.
//!
//! A sweep array has axes `time`, `trial` and one axis per [`SweepDim`]. A
//! [`SweepRequest`] names the one or two dimensions to plot and pins the rest;
//! [`aggregate`] turns it into a line or surface of mean cumulative
//! infections at the final time step.
//!
//! ```ignore
//! use epiviz_core::sweep::{aggregate, SweepOutcome, SweepRequest};
//!
//! let request = SweepRequest::from_names(&["strength", "radius"], &[("initial", 2)])?;
//! match aggregate(&data, &request)? {
//!     SweepOutcome::Line(line) => println!("{} points", line.series.len()),
//!     SweepOutcome::Surface(surface) => println!("{:?} grid", surface.shape()),
//! }
//! ```

mod aggregate;
mod dimension;
mod paired;
mod request;

pub use aggregate::{aggregate, aggregate_line, aggregate_surface, cumulative_infected};
pub use dimension::SweepDim;
pub use paired::{PairedSeries, SweepLine, SweepOutcome, SweepSurface};
pub use request::SweepRequest;
