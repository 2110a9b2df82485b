//! Common utilities for integration tests

pub mod recording_figure;
pub mod test_helpers;

// Re-export commonly used items
pub use recording_figure::{Call, RecordingFigure};
pub use test_helpers::{files_in, labelled_figure, sample_figure};
