//! A figure double that logs every capability the exporter uses
//!
//! `save` writes a small marker file so filesystem effects can be checked
//! for any format string, including ones `plotters` cannot encode.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use figsave::figure::Figure;

/// One call made on the figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    TightLayout,
    Save {
        path: PathBuf,
        format: String,
        dpi: u32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingFigure {
    calls: RefCell<Vec<Call>>,
}

impl RecordingFigure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn tighten_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::TightLayout)
            .count()
    }
}

impl Figure for RecordingFigure {
    type Error = io::Error;

    fn tight_layout(&mut self) {
        self.calls.get_mut().push(Call::TightLayout);
    }

    fn save(&self, path: &Path, format: &str, dpi: u32) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(Call::Save {
            path: path.to_path_buf(),
            format: format.to_string(),
            dpi,
        });
        fs::write(path, format!("{format}@{dpi}"))
    }
}
