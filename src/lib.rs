//! figsave: save in-memory figures to a predictable place
//!
//! Every figure is written to `<images-root>/<fig_id>.<fig_extension>`, with
//! `images/figures` as the default root. The layout can be tightened first,
//! and the format and resolution are chosen per call.
//!
//! # Architecture
//!
//! 1. **Plotting context** ([`figure`]): the [`Figure`] trait, i.e. what a
//!    figure must do to be saved (tighten layout, encode to a path)
//! 2. **Output** ([`output`]): a `plotters`-backed figure and the exporter
//!
//! Figures are always passed explicitly; there is no global current figure.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use figsave::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = FigureExporter::in_working_dir()?;
//!
//! let config = FigureConfig::titled("Quadratic").labels("x", "x²");
//! let mut figure = LineFigure::new(config);
//! let xs: Vec<f64> = (0..50).map(f64::from).collect();
//! let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
//! figure.add_series("x²", &xs, &ys)?;
//!
//! // images/figures/quadratic.png, 300 dpi, tight layout
//! exporter.save_fig(&mut figure, "quadratic", &SaveOptions::default())?;
//!
//! // images/figures/quadratic.svg
//! exporter.save_fig(&mut figure, "quadratic", &SaveOptions::default().extension("svg"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod figure;
pub mod logging;
pub mod output;

pub use error::FigureError;
pub use figure::Figure;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use figsave::prelude::*;
    //! ```
    pub use crate::error::FigureError;
    pub use crate::figure::{Figure, ImageFormat};
    pub use crate::output::export::{save_fig, FigureExporter, SaveOptions};
    pub use crate::output::visualization::{FigureConfig, Layout, LineFigure};
}
