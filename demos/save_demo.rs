//! Example: save the same figure in several formats
//!
//! Writes under `images/figures/` in the current directory:
//! - `damped.png`  (300 dpi, tight layout)
//! - `damped_loose.png` (100 dpi, layout untouched)
//! - `damped.svg`
//!
//! Run with `RUST_LOG=debug` to see layout and encoding details.

use figsave::logging::init_tracing;
use figsave::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let exporter = FigureExporter::in_working_dir()?;

    let ts: Vec<f64> = (0..=400).map(|i| f64::from(i) * 0.05).collect();
    let damped: Vec<f64> = ts.iter().map(|t| (-0.2 * t).exp() * (2.0 * t).cos()).collect();
    let envelope: Vec<f64> = ts.iter().map(|t| (-0.2 * t).exp()).collect();

    let config = FigureConfig::titled("Damped oscillator").labels("Time (s)", "Amplitude");
    let mut figure = LineFigure::new(config);
    figure
        .add_series("x(t)", &ts, &damped)?
        .add_series("envelope", &ts, &envelope)?;

    exporter.save_fig(&mut figure, "damped", &SaveOptions::default())?;

    // Start again from the loose layout for comparison
    figure.set_layout(Layout::default());
    let loose = SaveOptions::default().tight_layout(false).resolution(100);
    exporter.save_fig(&mut figure, "damped_loose", &loose)?;

    exporter.save_fig(&mut figure, "damped", &SaveOptions::default().extension("svg"))?;

    println!("Figures written to {}", exporter.root().display());
    Ok(())
}
