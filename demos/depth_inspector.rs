//! Depth inspector demo.
//!
//! Prints max/min/mean of a 16-bit depth PNG (and an optional raw buffer)
//! and writes a false-color rendering where near surfaces are bright.
//!
//! Usage:
//!   cargo run --example depth_inspector -- depth.json
//!   cargo run --example depth_inspector -- frame-000020.depth.png [out.png]

use std::process::ExitCode;

use camscope::{inspect_depth, DepthInspectorConfig, DepthStats};

fn print_stats(label: &str, stats: &DepthStats) {
    println!("{label}: ({}, {}) u{}", stats.height, stats.width, stats.bit_depth);
    println!("max:  {}", stats.max);
    println!("min:  {}", stats.min);
    println!("mean: {}", stats.mean);
}

fn load_config(args: &[String]) -> Option<camscope::Result<DepthInspectorConfig>> {
    match args {
        [path] if path.ends_with(".json") => Some(DepthInspectorConfig::from_file(path)),
        [png] => Some(Ok(DepthInspectorConfig::new(png))),
        [png, output] => {
            let mut config = DepthInspectorConfig::new(png);
            config.output = Some(output.into());
            Some(Ok(config))
        }
        _ => None,
    }
}

fn run(config: &DepthInspectorConfig) -> camscope::Result<()> {
    let report = inspect_depth(config)?;
    if let Some(raw) = &report.raw {
        print_stats("raw", raw);
    }
    print_stats("png", &report.png);
    if let Some(output) = &config.output {
        println!("false-color image written to {}", output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    camscope::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = load_config(&args) else {
        eprintln!("usage: depth_inspector <config.json | depth.png [out.png]>");
        return ExitCode::from(2);
    };
    match config.and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
