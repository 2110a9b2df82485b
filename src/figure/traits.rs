//! The plotting-context trait consumed by the exporter
//!
//! This module defines the two capabilities a figure must expose to be saved:
//! - `tight_layout`: recompute spacing to minimise wasted margin
//! - `save`: encode the figure to a path in a given format at a given density

use std::path::Path;

// =================================================================================================
// Figure (Plotting Context)
// =================================================================================================

/// An in-memory figure that can tighten its layout and encode itself to disk
///
/// The figure is always passed explicitly; nothing in this crate keeps a
/// "current figure" around.
///
/// # Associated type `Error`
///
/// Each implementation reports failures with its own error type. The exporter
/// returns these errors unchanged, so callers can match on them directly.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use figsave::figure::Figure;
///
/// struct Blank {
///     tightened: bool,
/// }
///
/// impl Figure for Blank {
///     type Error = std::io::Error;
///
///     fn tight_layout(&mut self) {
///         self.tightened = true;
///     }
///
///     fn save(&self, path: &Path, _format: &str, _dpi: u32) -> Result<(), Self::Error> {
///         std::fs::write(path, b"")
///     }
/// }
/// ```
pub trait Figure {
    /// Error returned when encoding fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Recompute subplot spacing so the content fills the canvas.
    fn tight_layout(&mut self);

    /// Encode the figure to `path`.
    ///
    /// `format` is the encoder name (usually the file extension, e.g. `"png"`
    /// or `"svg"`). `dpi` only matters for raster formats. Any existing file at
    /// `path` is overwritten.
    fn save(&self, path: &Path, format: &str, dpi: u32) -> Result<(), Self::Error>;
}

impl<F: Figure + ?Sized> Figure for &mut F {
    type Error = F::Error;

    fn tight_layout(&mut self) {
        (**self).tight_layout();
    }

    fn save(&self, path: &Path, format: &str, dpi: u32) -> Result<(), Self::Error> {
        (**self).save(path, format, dpi)
    }
}

impl<F: Figure + ?Sized> Figure for Box<F> {
    type Error = F::Error;

    fn tight_layout(&mut self) {
        (**self).tight_layout();
    }

    fn save(&self, path: &Path, format: &str, dpi: u32) -> Result<(), Self::Error> {
        (**self).save(path, format, dpi)
    }
}
