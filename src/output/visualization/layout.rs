//! Figure layout: outer margin and axis label areas
//!
//! All values are in points (1/72 inch) so a layout stays the same physical
//! size whatever resolution the figure is saved at.

use std::ops::Range;

use super::config::FigureConfig;
use crate::figure::POINTS_PER_INCH;

/// Padding around the figure after tightening, in multiples of the font size
pub const TIGHT_PAD: f64 = 1.08;

/// Average glyph width of a sans-serif font relative to its size
const GLYPH_WIDTH: f64 = 0.6;

/// Spacing and label areas of a figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Blank space around the whole chart (pt)
    pub margin: f64,

    /// Height reserved below the plot for x tick labels and description (pt)
    pub x_label_area: f64,

    /// Width reserved left of the plot for y tick labels and description (pt)
    pub y_label_area: f64,
}

impl Default for Layout {
    /// The loose layout every new figure starts with
    fn default() -> Self {
        Self {
            margin: 24.0,
            x_label_area: 36.0,
            y_label_area: 54.0,
        }
    }
}

impl Layout {
    /// Smallest layout that still fits the text the figure will draw
    ///
    /// `y_range` is the data range of the y axis; its bounds decide how wide
    /// the tick labels are.
    pub fn tight(config: &FigureConfig, y_range: &Range<f64>) -> Self {
        let font = config.font_size;
        let margin = TIGHT_PAD * font;

        if !config.show_grid {
            return Self {
                margin,
                x_label_area: 0.0,
                y_label_area: 0.0,
            };
        }

        let gap = 0.5 * font;
        let desc = |label: &str| if label.is_empty() { 0.0 } else { 1.2 * font };

        let tick_chars = tick_label(y_range.start)
            .len()
            .max(tick_label(y_range.end).len());

        Self {
            margin,
            x_label_area: font + gap + desc(&config.xlabel),
            y_label_area: tick_chars as f64 * GLYPH_WIDTH * font + gap + desc(&config.ylabel),
        }
    }
}

/// Text drawn for a tick at `value`
pub(crate) fn tick_label(value: f64) -> String {
    format!("{:.2}", value)
}

/// Convert a length in points to pixels at `density` pixels per inch
pub(crate) fn points_to_pixels(points: f64, density: f64) -> u32 {
    (points * density / POINTS_PER_INCH).round().max(0.0) as u32
}
