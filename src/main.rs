//! Command-line interface for flag_colors
//!
//! Prints the JSON report to stdout, a readable summary to stderr, and
//! writes the image/map artifacts to the output directory.

use clap::Parser;
use flag_colors::{
    save_artifacts, AnalysisError, DefaultPipeline, FlagReport, PipelineConfig,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Analyze the colors of a country's flag
#[derive(Parser, Debug)]
#[command(name = "flag-colors", version, about)]
struct Args {
    /// Country name or ISO code (e.g. France, Japan, BR)
    #[arg(required_unless_present = "write_config")]
    country: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of dominant colors
    #[arg(short = 'k', long)]
    colors: Option<usize>,

    /// Resize target before clustering, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    resize: Option<(u32, u32)>,

    /// k-means seed
    #[arg(long)]
    seed: Option<u64>,

    /// k-means restarts; the best run wins
    #[arg(long)]
    runs: Option<usize>,

    /// Output directory for artifacts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read flags from <DIR>/<code>.png instead of downloading them
    #[arg(long, value_name = "DIR")]
    flag_dir: Option<PathBuf>,

    /// Skip geocoding and the map
    #[arg(long)]
    no_map: bool,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<PathBuf>,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

fn build_config(args: &Args) -> flag_colors::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(k) = args.colors {
        config.analysis.n_colors = k;
    }
    if let Some((w, h)) = args.resize {
        config.analysis.resize_width = w;
        config.analysis.resize_height = h;
    }
    if let Some(seed) = args.seed {
        config.analysis.seed = seed;
    }
    if let Some(runs) = args.runs {
        config.analysis.runs = runs;
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(dir) = &args.flag_dir {
        config.flag_source.local_dir = Some(dir.clone());
    }
    if args.no_map {
        config.locator.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{}", err);
        eprintln!("{}", err.user_message());
        process::exit(1);
    }
}

fn run(args: &Args) -> flag_colors::Result<()> {
    let config = build_config(args)?;

    if let Some(path) = &args.write_config {
        config.to_json_file(path)?;
        info!(path = %path.display(), "configuration written");
        return Ok(());
    }

    let country = args
        .country
        .as_deref()
        .ok_or_else(|| AnalysisError::invalid("country", "<missing>"))?;

    let pipeline = DefaultPipeline::from_config(config.clone())?;
    let report = pipeline.run(country)?;

    let written = save_artifacts(&report, &config.output_path)?;
    for path in &written {
        info!(path = %path.display(), "wrote artifact");
    }

    print_report(&report)
}

fn print_report(report: &FlagReport) -> flag_colors::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AnalysisError::render("Failed to serialize report", e))?;
    println!("{}", json);

    eprintln!();
    eprintln!("Flag Color Summary: {} ({})", report.country.name, report.country.alpha_2);
    for color in report.palette.colors() {
        eprintln!("  {}  {:5.1}%", color.hex, color.proportion * 100.0);
    }
    eprintln!(
        "  Blended: {}  RGB: ({}, {}, {})",
        report.blended.hex, report.blended.rgb[0], report.blended.rgb[1], report.blended.rgb[2]
    );
    eprintln!(
        "  Lab: L*={:.1}, a*={:.1}, b*={:.1}",
        report.blended.lab.l, report.blended.lab.a, report.blended.lab.b
    );
    eprintln!("  ΔE76 from dominant: {:.1}", report.dominant_delta_e);
    match &report.location {
        Some(at) => eprintln!("  Location: {:.4}, {:.4}", at.latitude, at.longitude),
        None => eprintln!("  Location: not found"),
    }

    Ok(())
}
