//! Run one scenario (or a batch) and write the projected trajectory as CSV

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use macro_projection::{
    inputs::{load_guides, load_inputs},
    run_scenarios, simulate, Scenario, Trajectory, Variable,
};

#[derive(Parser, Debug)]
#[command(about = "Project a macroeconomic stress scenario quarter by quarter")]
struct Args {
    /// Scenario configuration (JSON). With --batch, a JSON array of named scenarios.
    #[arg(short, long)]
    config: PathBuf,

    /// Guide series (CSV, one column per guided variable)
    #[arg(short, long)]
    guides: Option<PathBuf>,

    /// Output CSV file; a directory with --batch. Stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat --config as a list of scenarios and run them in parallel
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    if args.batch {
        run_batch(&args)?;
    } else {
        run_single(&args)?;
    }

    eprintln!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn run_single(args: &Args) -> Result<()> {
    let mut inputs = load_inputs(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    if let Some(path) = &args.guides {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        load_guides(BufReader::new(file), &mut inputs.markets)
            .with_context(|| format!("failed to read guides from {}", path.display()))?;
    }

    let trajectory = simulate(&inputs).context("projection failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            trajectory.write_csv(BufWriter::new(file))?;
            eprintln!("Output written to {}", path.display());
            print_summary(&trajectory);
        }
        None => trajectory.write_csv(io::stdout().lock())?,
    }

    Ok(())
}

fn run_batch(args: &Args) -> Result<()> {
    if args.guides.is_some() {
        bail!("--guides applies to a single scenario; put guides in each scenario's configuration");
    }
    let Some(dir) = &args.output else {
        bail!("--batch needs --output <directory>");
    };
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let file = File::open(&args.config)
        .with_context(|| format!("failed to open {}", args.config.display()))?;
    let scenarios: Vec<Scenario> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse scenarios in {}", args.config.display()))?;

    for scenario in &scenarios {
        check_scenario_name(&scenario.name)?;
    }

    let mut failures = 0;
    for result in run_scenarios(&scenarios) {
        match result.trajectory {
            Ok(trajectory) => {
                let path = dir.join(format!("{}.csv", result.name));
                let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
                trajectory.write_csv(BufWriter::new(file))?;
                eprintln!("{}: {} quarters -> {}", result.name, trajectory.len(), path.display());
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: FAILED ({})", result.name, err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} scenarios failed", failures, scenarios.len());
    }
    Ok(())
}

/// Scenario names become file names inside the output directory
fn check_scenario_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name && !name.contains(['/', '\\']) => Ok(()),
        _ => bail!("invalid scenario name '{}': must be a plain file name", name),
    }
}

fn print_summary(trajectory: &Trajectory) {
    let summary = [
        Variable::UnemploymentRate,
        Variable::RealGdpGrowth,
        Variable::CorePceInflation,
        Variable::PolicyRate,
        Variable::Yield10y,
        Variable::BbbSpread,
    ];

    eprintln!("\nScenario Summary:");
    eprint!("{:>8}", "Quarter");
    for variable in &summary {
        eprint!(" {:>20}", variable.name());
    }
    eprintln!();

    for row in trajectory.rows() {
        let label = trajectory
            .quarter_label(row.quarter)
            .unwrap_or_else(|| row.quarter.to_string());
        eprint!("{:>8}", label);
        for &variable in &summary {
            let value = trajectory.get(row.quarter, variable).unwrap_or(f64::NAN);
            eprint!(" {:>20.3}", value);
        }
        eprintln!();
    }
}
