//! Figures rendered with the `plotters` library
//!
//! # Organization
//!
//! - **config**: Figure appearance (`FigureConfig`)
//! - **layout**: Margins and label areas, loose or tight (`Layout`)
//! - **line_figure**: Line series on cartesian axes (`LineFigure`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use figsave::output::visualization::{FigureConfig, LineFigure};
//!
//! let config = FigureConfig::titled("Residuals").labels("step", "error");
//! let mut figure = LineFigure::new(config);
//! figure.add_series("euler", &steps, &errors)?;
//! ```

pub mod config;
pub mod layout;
pub mod line_figure;

pub use config::{FigureConfig, IntoOptionalTitle, NO_TITLE};
pub use layout::{Layout, TIGHT_PAD};
pub use line_figure::LineFigure;
