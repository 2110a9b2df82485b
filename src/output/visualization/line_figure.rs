//! Line figures rendered with `plotters`
//!
//! [`LineFigure`] is the built-in [`Figure`] implementation: a set of labelled
//! `(x, y)` series drawn on shared cartesian axes. It is built entirely in
//! memory and only touches the filesystem when saved.
//!
//! # Usage
//!
//! ```rust,no_run
//! use figsave::figure::Figure;
//! use figsave::output::visualization::{FigureConfig, LineFigure};
//!
//! # fn main() -> Result<(), figsave::FigureError> {
//! let mut figure = LineFigure::new(FigureConfig::titled("Loss").labels("epoch", "loss"));
//! figure.add_series("train", &[0.0, 1.0, 2.0], &[1.0, 0.6, 0.4])?;
//! figure.tight_layout();
//! figure.save("loss.png".as_ref(), "png", 150)?;
//! # Ok(())
//! # }
//! ```

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use super::config::FigureConfig;
use super::layout::{points_to_pixels, tick_label, Layout};
use crate::error::{FigureError, Result};
use crate::figure::{Figure, ImageFormat};

/// One labelled line
#[derive(Debug, Clone)]
struct Series {
    label: String,
    points: Vec<(f64, f64)>,
}

/// A figure made of line series sharing one pair of axes
#[derive(Debug, Clone)]
pub struct LineFigure {
    config: FigureConfig,
    layout: Layout,
    series: Vec<Series>,
}

impl LineFigure {
    /// Create an empty figure with the default (loose) layout
    pub fn new(config: FigureConfig) -> Self {
        Self {
            config,
            layout: Layout::default(),
            series: Vec::new(),
        }
    }

    /// Add a line through `(xs[i], ys[i])`
    ///
    /// An empty `label` keeps the series out of the legend.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::LengthMismatch`] if `xs` and `ys` differ in length.
    pub fn add_series(&mut self, label: &str, xs: &[f64], ys: &[f64]) -> Result<&mut Self> {
        if xs.len() != ys.len() {
            return Err(FigureError::LengthMismatch {
                label: label.to_string(),
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        self.series.push(Series {
            label: label.to_string(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        });
        Ok(self)
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Replace the current layout, e.g. to undo a previous tightening
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Axis ranges covering every finite point, padded by 5% on y
    ///
    /// An empty or degenerate figure falls back to the unit square.
    fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in finite {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let x_range = span_or_unit(x_min, x_max, 0.0);
        let y_range = span_or_unit(y_min, y_max, 0.05);
        (x_range, y_range)
    }

    /// Draw the whole figure on `backend`
    ///
    /// `density` is in pixels per inch and scales every point-sized quantity.
    fn render<DB: DrawingBackend>(&self, backend: DB, density: f64) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let px = |points: f64| points_to_pixels(points, density);
        let (x_range, y_range) = self.bounds();

        let root = backend.into_drawing_area();
        root.fill(&self.config.background)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(px(self.layout.margin))
            .x_label_area_size(px(self.layout.x_label_area))
            .y_label_area_size(px(self.layout.y_label_area));

        if !self.config.title.is_empty() {
            let caption_px = f64::from(px(1.2 * self.config.font_size));
            builder.caption(&self.config.title, ("sans-serif", caption_px).into_font());
        }

        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

        if self.config.show_grid {
            let label_px = f64::from(px(self.config.font_size));
            chart
                .configure_mesh()
                .x_desc(&self.config.xlabel)
                .y_desc(&self.config.ylabel)
                .label_style(("sans-serif", label_px).into_font())
                .x_label_formatter(&|x| tick_label(*x))
                .y_label_formatter(&|y| tick_label(*y))
                .draw()?;
        }

        let stroke = px(self.config.line_width).max(1);
        for (idx, series) in self.series.iter().enumerate() {
            let color = self.config.series_color(idx);
            let drawn = chart.draw_series(LineSeries::new(
                series.points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(stroke),
            ))?;

            if !series.label.is_empty() {
                let legend_len = px(20.0) as i32;
                drawn
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + legend_len, y)], color.stroke_width(stroke))
                    });
            }
        }

        let has_legend = self.series.iter().any(|s| !s.label.is_empty());
        if self.config.show_legend && has_legend {
            let label_px = f64::from(px(self.config.font_size));
            chart
                .configure_series_labels()
                .label_font(("sans-serif", label_px).into_font())
                .background_style(&self.config.background.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

/// `min..max`, widened by `pad` of the span; unit range when nothing is finite
fn span_or_unit(min: f64, max: f64, pad: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 0.5)..(max + 0.5);
    }
    (min - pad * span)..(max + pad * span)
}

impl Figure for LineFigure {
    type Error = FigureError;

    fn tight_layout(&mut self) {
        let (_, y_range) = self.bounds();
        self.layout = Layout::tight(&self.config, &y_range);
        debug!(layout = ?self.layout, "tightened figure layout");
    }

    fn save(&self, path: &Path, format: &str, dpi: u32) -> Result<()> {
        let format: ImageFormat = format.parse()?;
        if dpi == 0 {
            return Err(FigureError::InvalidResolution(dpi));
        }

        let density = format.density(dpi);
        let size = self.config.pixel_size(density);
        debug!(path = %path.display(), %format, ?size, "encoding figure");

        match format.raster_encoding() {
            None => self.render(SVGBackend::new(path, size), density),
            Some(encoding) => {
                // Draw in memory, then encode in the requested format whatever the path suffix
                let (width, height) = size;
                let mut buffer = vec![0u8; width as usize * height as usize * 3];
                self.render(BitMapBackend::with_buffer(&mut buffer, size), density)?;

                let image = image::RgbImage::from_raw(width, height, buffer)
                    .ok_or_else(|| FigureError::Render("bitmap buffer does not match figure size".to_string()))?;
                image.save_with_format(path, encoding)?;
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
