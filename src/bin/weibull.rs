//! Distribute Weibull crack-activation flaws over a particle input file,
//! after Benz & Asphaug's brittle-failure model. Reads the generator's
//! particle file, scatters n*ln(n) seeded flaws, and rewrites every record
//! with its activation thresholds appended.

use clap::Parser;
use impact_physics::flaws::{WeibullParams, distribute_flaws};
use impact_storage::{read_particles, write_particles};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weibull")]
#[command(about = "Distribute Weibull flaws over an SPH particle file", long_about = None)]
struct Args {
    /// Input particle file
    #[arg(short, long)]
    filename: PathBuf,

    /// Output particle file
    #[arg(short, long)]
    output: PathBuf,

    /// Weibull constant k, 1/m^3
    #[arg(short = 'k', long, default_value_t = 0.0)]
    constant_k: f64,

    /// Weibull modulus m
    #[arg(short = 'm', long, default_value_t = 0.0)]
    constant_m: f64,

    /// Use the predefined basalt constants (k = 5.0e34, m = 8.5)
    #[arg(short = 'B', long)]
    basalt: bool,

    /// Only flaw particles with this material id
    #[arg(short = 't', long)]
    material_type: Option<u32>,

    /// Seed for the flaw assignment
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Maximum number of flaws per particle
    #[arg(short = 'M', long, default_value_t = impact_core::DEFAULT_MAX_FLAWS)]
    max_flaws: usize,

    /// Target volume override; computed from the particles when omitted
    #[arg(short = 'A', long)]
    volume: Option<f64>,

    /// Verbose progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("weibull: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let base = if args.basalt {
        WeibullParams::basalt()
    } else {
        WeibullParams::new(args.constant_k, args.constant_m)
    };
    let params = WeibullParams {
        max_flaws: args.max_flaws,
        material: args.material_type,
        seed: args.seed,
        volume: args.volume,
        ..base
    };

    if args.verbose {
        eprintln!("Reading particles from {}", args.filename.display());
    }
    let mut particles = read_particles(&args.filename)?;
    if args.verbose {
        eprintln!(
            "Weibulling {} particles with k = {:e}, m = {:e}, seed = {}",
            particles.len(),
            params.k,
            params.m,
            params.seed
        );
    }

    let stats = distribute_flaws(&mut particles, &params)?;
    eprintln!("Target volume: {:e}", stats.volume);
    eprintln!(
        "Distributed {} flaws over {} particles (mean {:.2} per particle)",
        stats.total_flaws,
        stats.eligible,
        stats.mean_flaws()
    );

    write_particles(&args.output, &particles)?;
    if args.verbose {
        eprintln!("Wrote {}", args.output.display());
    }
    Ok(())
}
