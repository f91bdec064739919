//! pixdiff command line tool
//!
//! Compares two images and prints their metrics, optionally for a region
//! too, and optionally writes the rendered diff as PNG.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pixdiff::{DEFAULT_TOLERANCE, DiffSession, Metrics, Rect, RenderMode, io};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pixdiff",
    version,
    about = "Compare two images pixel by pixel and render the difference"
)]
struct Args {
    /// Reference image (A)
    first: PathBuf,

    /// Image compared against the reference (B)
    second: PathBuf,

    /// Render mode: highlight, heatmap or diffRGB
    #[arg(short, long, default_value_t = RenderMode::Highlight)]
    mode: RenderMode,

    /// Largest per-channel difference still counted as equal
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: u8,

    /// Stretch B to A's size when the sizes differ
    #[arg(long)]
    resize_to_a: bool,

    /// Also report metrics for a region, given as X,Y,W,H
    #[arg(short, long, value_parser = parse_region)]
    region: Option<Rect>,

    /// Write the rendered diff as PNG
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_region(s: &str) -> std::result::Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, w, h] = parts.as_slice() else {
        return Err(format!("expected X,Y,W,H but got {:?}", s));
    };
    let num = |v: &str| {
        v.parse::<i32>()
            .map_err(|e| format!("invalid region value {:?}: {}", v, e))
    };
    Ok(Rect::new(num(x)?, num(y)?, num(w)?, num(h)?))
}

fn print_metrics(title: &str, metrics: &Metrics) {
    println!("{}", title);
    for line in metrics.to_string().lines() {
        println!("  {}", line);
    }
}

fn run(args: &Args) -> Result<()> {
    let loaded = io::load_pair(&args.first, &args.second, args.resize_to_a);
    let (a, b) = loaded.with_context(|| {
        format!(
            "failed to load {} and {}",
            args.first.display(),
            args.second.display()
        )
    })?;
    info!(
        "comparing {} against {} ({}x{})",
        args.second.display(),
        args.first.display(),
        a.width(),
        a.height()
    );

    let mut session = DiffSession::with_settings(a, b, args.mode, args.tolerance)?;
    print_metrics(
        &format!("Metrics ({}, tolerance {}):", args.mode, args.tolerance),
        &session.comparison().metrics,
    );

    if let Some(path) = &args.output {
        io::write_image(&session.comparison().output, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote diff to {}", path.display());
    }

    if let Some(rect) = args.region {
        match session.select_region(rect)? {
            Some(metrics) => print_metrics(
                &format!("Region ({}, {}, {}, {}):", rect.x, rect.y, rect.w, rect.h),
                metrics,
            ),
            None => println!(
                "Region ({}, {}, {}, {}): empty selection, nothing to measure",
                rect.x, rect.y, rect.w, rect.h
            ),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
