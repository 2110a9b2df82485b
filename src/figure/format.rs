//! Image formats understood by the `plotters` backends

use std::fmt;
use std::str::FromStr;

use crate::error::FigureError;

/// Points per inch; vector output is sized at this density regardless of dpi.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Output encoding for a [`LineFigure`](crate::output::visualization::LineFigure)
///
/// Raster formats go through `BitMapBackend`, `Svg` through `SVGBackend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,

    /// JPEG (accepts both `jpg` and `jpeg`)
    Jpeg,

    /// Windows bitmap
    Bmp,

    /// Scalable Vector Graphics
    Svg,
}

impl ImageFormat {
    /// Look up a format by file extension, ignoring case
    ///
    /// ```rust
    /// use figsave::figure::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_extension("pdf"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            "svg" => Some(ImageFormat::Svg),
            _ => None,
        }
    }

    /// Canonical extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Svg => "svg",
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, ImageFormat::Svg)
    }

    /// Encoder used for raster output; `None` for vector formats
    pub fn raster_encoding(&self) -> Option<image::ImageFormat> {
        match self {
            ImageFormat::Png => Some(image::ImageFormat::Png),
            ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
            ImageFormat::Bmp => Some(image::ImageFormat::Bmp),
            ImageFormat::Svg => None,
        }
    }

    /// Pixels per inch actually used when drawing
    ///
    /// Raster formats honour the requested dpi; vector formats ignore it.
    pub fn density(&self, dpi: u32) -> f64 {
        if self.is_vector() {
            POINTS_PER_INCH
        } else {
            f64::from(dpi)
        }
    }
}

impl FromStr for ImageFormat {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::from_extension(s).ok_or_else(|| FigureError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
