//! Fractal antenna backend CLI.
//!
//! Wires user parameters into `antenna-core`, runs one generation, and
//! either serializes the plan as JSON or drives the history-script backend
//! to produce a host-modeler script file.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

use antenna_core::emitter::{emit, BackendError, EmissionReport, HistoryScriptBackend, ModelBackend};
use antenna_core::generator::{generate, FractalConfig};
use antenna_core::geometry::Point2;
use antenna_core::plan::{FractalFamily, FractalPlan};

#[derive(Debug, Clone, ValueEnum)]
enum Family {
    /// Sierpinski carpet (square base, 3x3 subdivision)
    Carpet,
    /// Sierpinski triangle (equilateral base, midpoint subdivision)
    Triangle,
}

impl From<Family> for FractalFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Carpet => FractalFamily::Carpet,
            Family::Triangle => FractalFamily::Triangle,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print the plan as JSON on stdout
    Json,
    /// Write a modeler history script to the project path
    Script,
}

#[derive(Parser)]
#[command(name = "antenna-backend")]
#[command(about = "Generate Sierpinski fractal antenna geometry", long_about = None)]
struct Args {
    /// Fractal family to generate
    #[arg(long, value_enum, default_value = "carpet")]
    family: Family,

    /// Base shape side length in model units
    #[arg(long, default_value = "50.0")]
    size: f64,

    /// Conductor thickness
    #[arg(long, default_value = "0.35")]
    thickness: f64,

    /// Number of fractal iterations
    #[arg(long, default_value = "3")]
    iterations: u32,

    /// Base shape center, X
    #[arg(long, default_value = "0.0")]
    center_x: f64,

    /// Base shape center, Y
    #[arg(long, default_value = "0.0")]
    center_y: f64,

    /// Project file the history script is written to
    #[arg(long, default_value = "Sierpinski_Level.mod")]
    project: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

fn write_script(plan: &FractalPlan, path: &Path) -> Result<EmissionReport, BackendError> {
    let mut backend = HistoryScriptBackend::new();
    backend.open_or_create_project(path)?;
    let report = emit(plan, &mut backend)?;
    backend.save()?;
    backend.close()?;
    Ok(report)
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = FractalConfig::new(
        args.family.clone().into(),
        args.size,
        args.thickness,
        args.iterations,
    )
    .with_center(Point2::new(args.center_x, args.center_y));

    let plan = match generate(&config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error generating plan: {}", e);
            process::exit(1);
        }
    };
    info!(
        "Generated {:?} plan with {} subtraction shapes",
        plan.family,
        plan.subtractions.len()
    );

    match args.format {
        OutputFormat::Json => {
            let json = match serde_json::to_string_pretty(&plan) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error serializing plan: {}", e);
                    process::exit(1);
                }
            };
            println!("{}", json);
        }
        OutputFormat::Script => match write_script(&plan, &args.project) {
            Ok(report) => {
                for line in &report.logs {
                    info!("{}", line);
                }
                info!("Wrote history script to {}", args.project.display());
            }
            Err(e) => {
                eprintln!("Error writing script: {}", e);
                process::exit(1);
            }
        },
    }
}
