//! Output module: building figures and saving them
//!
//! - **Visualization**: in-memory figures drawn with `plotters`
//! - **Export**: writing any [`Figure`](crate::figure::Figure) to the images directory
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Figures
//! │   ├── config.rs
//! │   ├── layout.rs
//! │   └── line_figure.rs
//! └── export/             ← Saving
//!     └── images.rs
//! ```

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{save_fig, FigureExporter, SaveOptions};
pub use visualization::{FigureConfig, LineFigure};
