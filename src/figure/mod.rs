//! Plotting context
//!
//! This module defines what a figure must provide to be exported, and the
//! image formats the built-in `plotters` figure can encode.
//!
//! # Core Concepts
//!
//! - **Figure**: an in-memory plot that can tighten its layout and save itself
//! - **ImageFormat**: type-safe identifier for an output encoding
//!
//! The exporter only ever talks to the [`Figure`] trait, so any plotting
//! library can be plugged in by implementing it. The crate ships one
//! implementation, [`LineFigure`](crate::output::visualization::LineFigure).

pub mod format;
pub mod traits;

pub use format::{ImageFormat, POINTS_PER_INCH};
pub use traits::Figure;
