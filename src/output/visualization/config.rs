//! Figure configuration shared by the plotters-backed figures
//!
//! Sizes are physical (inches, points) rather than pixels: the pixel size of
//! a raster image is only known once a resolution is chosen at save time.

use plotters::prelude::*;

/// Configuration for customizing figures
///
/// # Fields
///
/// - `width_in`, `height_in`: Figure size in inches
/// - `title`: Caption drawn above the axes (empty string: no caption)
/// - `xlabel`, `ylabel`: Axis descriptions
/// - `line_color`: Color of the first series
/// - `palette`: Optional colors for multi-series figures (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in points
/// - `font_size`: Base font size in points (the caption is drawn 1.2x larger)
/// - `show_grid`: Whether to draw the mesh, tick labels and axis descriptions
/// - `show_legend`: Whether to draw the series legend
///
/// # Example
///
/// ```rust
/// use figsave::output::visualization::FigureConfig;
/// use plotters::prelude::*;
///
/// let mut config = FigureConfig::titled("Loss curve");
/// config.line_color = BLUE;
/// config.width_in = 8.0;
/// config.height_in = 4.5;
/// ```
#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// Figure width in inches (default: 6.4)
    pub width_in: f64,

    /// Figure height in inches (default: 4.8)
    pub height_in: f64,

    /// Figure title (default: empty, no caption)
    pub title: String,

    /// X-axis label (default: empty)
    pub xlabel: String,

    /// Y-axis label (default: empty)
    pub ylabel: String,

    /// Line color for the first series when no palette is set (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for multi-series figures
    ///
    /// If None, the first series uses `line_color` and the rest the default palette.
    pub palette: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in points (default: 1.5)
    pub line_width: f64,

    /// Base font size in points (default: 10)
    pub font_size: f64,

    /// Draw mesh and tick labels (default: true)
    pub show_grid: bool,

    /// Draw legend for labelled series (default: true)
    pub show_legend: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 4.8,
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: BLUE,
            palette: None,
            background: WHITE,
            line_width: 1.5,
            font_size: 10.0,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// Helper trait to accept both strings and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title
pub const NO_TITLE: Option<&str> = None;

impl FigureConfig {
    /// Create a config with an optional caption
    ///
    /// ```rust
    /// use figsave::output::visualization::{FigureConfig, NO_TITLE};
    ///
    /// let config = FigureConfig::titled("Training loss");
    /// assert_eq!(config.title, "Training loss");
    ///
    /// let config = FigureConfig::titled(NO_TITLE);
    /// assert!(config.title.is_empty());
    /// ```
    pub fn titled(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title.into_optional_title().unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Builder pattern: set axis labels
    pub fn labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    /// Builder pattern: set figure size in inches
    pub fn size(mut self, width_in: f64, height_in: f64) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// A config that draws no text at all (no caption, mesh or legend)
    pub fn bare() -> Self {
        Self {
            show_grid: false,
            show_legend: false,
            ..Default::default()
        }
    }

    /// Pixel dimensions at the given density (pixels per inch)
    pub fn pixel_size(&self, density: f64) -> (u32, u32) {
        (
            (self.width_in * density).round().max(1.0) as u32,
            (self.height_in * density).round().max(1.0) as u32,
        )
    }

    /// Get color for series at index i
    pub(crate) fn series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.palette {
            if let Some(color) = colors.get(series_index) {
                return *color;
            }
        } else if series_index == 0 {
            return self.line_color;
        }

        const DEFAULT_COLORS: [RGBColor; 8] = [
            BLUE,
            RGBColor(255, 127, 14), // Orange
            GREEN,
            RED,
            RGBColor(148, 103, 189), // Purple
            RGBColor(140, 86, 75),   // Brown
            MAGENTA,
            CYAN,
        ];

        DEFAULT_COLORS[series_index % DEFAULT_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_config_default() {
        let config = FigureConfig::default();
        assert_eq!(config.width_in, 6.4);
        assert_eq!(config.height_in, 4.8);
        assert!(config.title.is_empty());
        assert!(config.show_grid);
    }

    #[test]
    fn test_titled_with_string() {
        let config = FigureConfig::titled(format!("Run {}", 3));
        assert_eq!(config.title, "Run 3");
    }

    #[test]
    fn test_bare_draws_no_text() {
        let config = FigureConfig::bare();
        assert!(config.title.is_empty());
        assert!(!config.show_grid);
        assert!(!config.show_legend);
    }

    #[test]
    fn test_pixel_size() {
        let config = FigureConfig::default();
        assert_eq!(config.pixel_size(100.0), (640, 480));
        assert_eq!(config.pixel_size(300.0), (1920, 1440));
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = FigureConfig::default();
        assert_eq!(config.series_color(0), BLUE);
        assert_eq!(config.series_color(3), RED);
        assert_eq!(config.series_color(8), BLUE); // Wraparound
    }

    #[test]
    fn test_series_color_uses_line_color_first() {
        let mut config = FigureConfig::default();
        config.line_color = BLACK;
        assert_eq!(config.series_color(0), BLACK);
        assert_eq!(config.series_color(2), GREEN);
    }

    #[test]
    fn test_series_color_custom_palette() {
        let mut config = FigureConfig::default();
        config.palette = Some(vec![RED, GREEN]);
        assert_eq!(config.series_color(0), RED);
        assert_eq!(config.series_color(1), GREEN);
        // Past the palette: falls back to defaults
        assert_eq!(config.series_color(2), GREEN);
    }
}
