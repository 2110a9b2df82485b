//! Saving figures under a deterministic images directory
//!
//! Every figure lands at `<root>/<fig_id>.<fig_extension>`. The root
//! (`images/figures` by default) is created once, with its parents, when the
//! exporter is built; creating it again is a no-op.
//!
//! # Quick Examples
//!
//! ## Defaults (tight layout, png, 300 dpi)
//!
//! ```rust,no_run
//! use figsave::output::export::{FigureExporter, SaveOptions};
//! use figsave::output::visualization::{FigureConfig, LineFigure};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = FigureExporter::in_working_dir()?;
//! let mut figure = LineFigure::new(FigureConfig::titled("Demo"));
//! figure.add_series("y = x", &[0.0, 1.0], &[0.0, 1.0])?;
//!
//! // Writes images/figures/demo.png
//! exporter.save_fig(&mut figure, "demo", &SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Vector output, layout untouched
//!
//! ```rust,ignore
//! let options = SaveOptions::default().extension("svg").tight_layout(false);
//! exporter.save_fig(&mut figure, "demo", &options)?;
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::figure::Figure;

/// Default images root, relative to the working directory
pub const IMAGES_PATH: &str = "images/figures";

// =================================================================================================
// Configuration
// =================================================================================================

/// Options for one export request
///
/// # Fields
///
/// - `tight_layout`: Tighten the figure layout before encoding (default: true)
/// - `fig_extension`: File suffix and encoder format (default: "png")
/// - `resolution`: Dots per inch for raster formats (default: 300)
///
/// Nothing is validated here; the figure decides which formats and
/// resolutions it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Tighten the layout before encoding (default: true)
    pub tight_layout: bool,

    /// Output format, also used as the file extension (default: "png")
    pub fig_extension: String,

    /// Raster density in dots per inch (default: 300)
    pub resolution: u32,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            tight_layout: true,
            fig_extension: "png".to_string(),
            resolution: 300,
        }
    }
}

impl SaveOptions {
    /// Builder pattern: enable or disable layout tightening
    pub fn tight_layout(mut self, tight_layout: bool) -> Self {
        self.tight_layout = tight_layout;
        self
    }

    /// Builder pattern: set output format / extension
    pub fn extension(mut self, fig_extension: impl Into<String>) -> Self {
        self.fig_extension = fig_extension.into();
        self
    }

    /// Builder pattern: set resolution in dpi
    pub fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }
}

// =================================================================================================
// Exporter
// =================================================================================================

/// Create `root` and any missing parents; succeeds if it already exists
pub fn ensure_images_dir(root: impl AsRef<Path>) -> io::Result<PathBuf> {
    let root = root.as_ref();
    fs::create_dir_all(root)?;
    debug!(root = %root.display(), "images directory ready");
    Ok(root.to_path_buf())
}

/// Saves figures under one images root
#[derive(Debug, Clone)]
pub struct FigureExporter {
    root: PathBuf,
}

impl FigureExporter {
    /// Exporter writing under `root`, which is created if missing
    ///
    /// # Errors
    ///
    /// Returns the filesystem error if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = ensure_images_dir(root.into())?;
        Ok(Self { root })
    }

    /// Exporter rooted at [`IMAGES_PATH`] in the working directory
    pub fn in_working_dir() -> io::Result<Self> {
        Self::new(IMAGES_PATH)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<fig_id>.<fig_extension>`
    ///
    /// `fig_id` is used verbatim, so callers must pass a filesystem-safe name.
    pub fn figure_path(&self, fig_id: &str, fig_extension: &str) -> PathBuf {
        self.root.join(format!("{fig_id}.{fig_extension}"))
    }

    /// Save `figure` as `<root>/<fig_id>.<fig_extension>`
    ///
    /// Tightens the layout first when `options.tight_layout` is set, then asks
    /// the figure to encode itself. An existing file at the target path is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Whatever the figure's `save` returns, unchanged.
    pub fn save_fig<F>(&self, figure: &mut F, fig_id: &str, options: &SaveOptions) -> Result<(), F::Error>
    where
        F: Figure + ?Sized,
    {
        let path = self.figure_path(fig_id, &options.fig_extension);

        if options.tight_layout {
            figure.tight_layout();
        }
        figure.save(&path, &options.fig_extension, options.resolution)?;

        info!(
            path = %path.display(),
            dpi = options.resolution,
            tight_layout = options.tight_layout,
            "saved figure to {}",
            path.display()
        );
        Ok(())
    }
}

/// Save `figure` under [`IMAGES_PATH`] in the working directory
///
/// Creates the directory on every call (a no-op once it exists), so no setup
/// step is needed.
///
/// # Errors
///
/// Directory creation errors (converted into the figure's error type) or
/// whatever the figure's `save` returns.
pub fn save_fig<F>(figure: &mut F, fig_id: &str, options: &SaveOptions) -> Result<(), F::Error>
where
    F: Figure + ?Sized,
    F::Error: From<io::Error>,
{
    FigureExporter::in_working_dir()?.save_fig(figure, fig_id, options)
}

// =================================================================================================
// Tests
// =================================================================================================
