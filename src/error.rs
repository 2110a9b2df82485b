//! Error type for the built-in `plotters` figure
//!
//! The exporter itself never wraps errors: it hands back whatever the
//! [`Figure`](crate::figure::Figure) implementation returns. `FigureError` is
//! the error type of [`LineFigure`](crate::output::visualization::LineFigure).

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while building or encoding a [`LineFigure`](crate::output::visualization::LineFigure)
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image format: {0:?} (expected png, jpg, jpeg, bmp or svg)")]
    UnsupportedFormat(String),

    #[error("invalid resolution: {0} dpi (must be positive)")]
    InvalidResolution(u32),

    #[error("series {label:?}: {x_len} x values but {y_len} y values")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("render error: {0}")]
    Render(String),
}

// Backend errors are generic over the backend type, so keep the message only.
impl<E> From<DrawingAreaErrorKind<E>> for FigureError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        FigureError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FigureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: FigureError = io.into();
        assert!(matches!(err, FigureError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unsupported_format_message_names_format() {
        let err = FigureError::UnsupportedFormat("pdf".to_string());
        assert!(err.to_string().contains("\"pdf\""));
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = FigureError::LengthMismatch {
            label: "signal".to_string(),
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(err.to_string(), "series \"signal\": 3 x values but 2 y values");
    }
}
