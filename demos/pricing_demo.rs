// demos/pricing_demo.rs

//! Terminal version of the option calculator.
//!
//! Usage:
//!     cargo run --example pricing_demo -- [spot strike time rate vol]
//!
//! With no arguments the calculator's default inputs (50, 45, 1.5, 0.05, 0.15)
//! are used. Set `RUST_LOG=debug` to see why a request was rejected.

use std::env;

use anyhow::Result;
use option_calc::{
    build_sensitivity_curve, evaluate, RawValuationInput, ResultLabels, ValuationInput,
    DEFAULT_SAMPLE_COUNT,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let raw = match args.as_slice() {
        [] => RawValuationInput::default(),
        [spot, strike, time, rate, vol] => RawValuationInput::new(
            spot.as_str(),
            strike.as_str(),
            time.as_str(),
            rate.as_str(),
            vol.as_str(),
        ),
        _ => {
            eprintln!("Usage: pricing_demo [spot strike time rate vol]");
            std::process::exit(2);
        }
    };

    println!("Black-Scholes Option Calculator");
    println!("===============================");
    println!("Price (X): {}", raw.spot);
    println!("Strike (K): {}", raw.strike);
    println!("Time (T): {}", raw.time);
    println!("Rate (r): {}", raw.rate);
    println!("Vol (v): {}", raw.volatility);
    println!();

    let result = match evaluate(&raw) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for label in ResultLabels::from(&result).as_array() {
        println!("{}", label);
    }

    let input = ValuationInput::parse(&raw)?;
    let curve = build_sensitivity_curve(&input, DEFAULT_SAMPLE_COUNT)?;

    println!("\nSensitivity to underlying ({} samples):", curve.len());
    println!("{:>10} {:>12} {:>12}", "Price", "Call", "Put");
    println!("{}", "-".repeat(36));
    for (x, call, put) in curve.points().step_by(15) {
        println!("{:>10.2} {:>12.4} {:>12.4}", x, call, put);
    }

    Ok(())
}
