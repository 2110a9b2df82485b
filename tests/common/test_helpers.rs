//! Helper functions for integration tests

use std::fs;
use std::path::Path;

use figsave::output::visualization::{FigureConfig, LineFigure};

/// A two-series figure that draws no text
pub fn sample_figure() -> LineFigure {
    let xs: Vec<f64> = (0..20).map(f64::from).collect();
    let squares: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let line: Vec<f64> = xs.iter().map(|x| 10.0 * x).collect();

    let mut figure = LineFigure::new(FigureConfig::bare());
    figure
        .add_series("square", &xs, &squares)
        .unwrap()
        .add_series("linear", &xs, &line)
        .unwrap();
    figure
}

/// A titled, labelled two-series figure with the default config
pub fn labelled_figure() -> LineFigure {
    let xs: Vec<f64> = (0..20).map(f64::from).collect();
    let decay: Vec<f64> = xs.iter().map(|x| (-0.2 * x).exp()).collect();
    let growth: Vec<f64> = xs.iter().map(|x| 1.0 - (-0.2 * x).exp()).collect();

    let config = FigureConfig::titled("Relaxation").labels("Time (s)", "Fraction");
    let mut figure = LineFigure::new(config);
    figure
        .add_series("decay", &xs, &decay)
        .unwrap()
        .add_series("growth", &xs, &growth)
        .unwrap();
    figure
}

/// Sorted file names directly inside `dir`
pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
