//! Export of figures to image files
//!
//! # Path convention
//!
//! | Input                         | File                               |
//! |-------------------------------|------------------------------------|
//! | `save_fig(fig, "demo", ..)`   | `images/figures/demo.png`          |
//! | `.extension("svg")`           | `images/figures/demo.svg`          |
//! | custom root `out/`            | `out/demo.png`                     |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use figsave::output::export::{FigureExporter, SaveOptions};
//!
//! let exporter = FigureExporter::new("report/figures")?;
//! exporter.save_fig(&mut figure, "residuals", &SaveOptions::default())?;
//! ```

pub mod images;

pub use images::{ensure_images_dir, save_fig, FigureExporter, SaveOptions, IMAGES_PATH};
