// demos/plot_sensitivity.rs

//! Builds the price-vs-underlying curve and writes it as an SVG chart and a CSV
//! table.
//!
//! Usage:
//!     cargo run --example plot_sensitivity -- [output_stem] [curve_config.toml]
//!
//! Writes `<output_stem>.svg` and `<output_stem>.csv` (default stem:
//! `option_pricing`). The optional TOML file may set `sample_count`,
//! `half_width` and `floor`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use option_calc::{
    build_sensitivity_curve_with_config, evaluate_input, render_svg, ChartStyle, CurveConfig,
    RawValuationInput, SensitivityCurve, ValuationInput,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn write_csv(curve: &SensitivityCurve, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["underlying", "call", "put"])?;
    for (x, call, put) in curve.points() {
        writer.write_record(&[x.to_string(), call.to_string(), put.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let stem = args.get(1).map(String::as_str).unwrap_or("option_pricing");
    let config = match args.get(2) {
        Some(path) => CurveConfig::from_file(path)?,
        None => CurveConfig::default(),
    };

    let input = ValuationInput::parse(&RawValuationInput::default())?;
    let result = evaluate_input(&input);
    info!(%result, "valuation");

    let curve = build_sensitivity_curve_with_config(&input, &config)?;
    if let Some((lower, upper)) = curve.bounds() {
        info!(samples = curve.len(), lower, upper, "curve built");
    }

    let svg_path = PathBuf::from(format!("{}.svg", stem));
    render_svg(&curve, &svg_path, &ChartStyle::dark())?;
    println!("Chart saved to {}", svg_path.display());

    let csv_path = PathBuf::from(format!("{}.csv", stem));
    write_csv(&curve, &csv_path)?;
    println!("Samples saved to {}", csv_path.display());

    Ok(())
}
