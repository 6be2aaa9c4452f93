//! Initial conditions for SPH 3D impact simulations: a porous basalt target
//! hemisphere at rest and an aluminium projectile on an oblique impact path,
//! placed on an HCP lattice and written as one solver input file.

use clap::Parser;
use impact_core::SetupConfig;
use impact_setup::emit;
use impact_setup::scene::{Body, ImpactScene};
use impact_storage::{RegionSummary, SetupSummary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "impact")]
#[command(about = "Generate SPH initial conditions for a hemisphere impact", long_about = None)]
struct Args {
    /// Approximate number of target simulation particles
    #[arg(short = 'n', long, default_value_t = 1e5)]
    particles: f64,

    /// Radius of the target hemisphere
    #[arg(short, long, default_value_t = 12.0)]
    radius: f64,

    /// Porosity of the target, in [0, 1)
    #[arg(short, long, default_value_t = 0.5)]
    porosity: f64,

    /// Impact angle of the projectile in degrees
    #[arg(short, long, default_value_t = 0.0)]
    angle: f64,

    /// Projectile cube edge length; zero collapses the cube to a point
    #[arg(long, default_value_t = 0.0)]
    projectile_edge: f64,

    /// Thickness of the boundary shell in lattice spacings
    #[arg(long, default_value_t = 0.0)]
    boundary_layers: f64,

    /// Output particle file
    #[arg(short, long, default_value = "impact.0000")]
    output: PathBuf,

    /// Also write a binary run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("impact: {e}");
        std::process::exit(1);
    }
}

fn emit_body<W: Write>(
    w: &mut W,
    scene: &ImpactScene,
    body: &Body,
) -> Result<RegionSummary, String> {
    let written = emit::write_particles(w, scene.delta, &body.region, &body.state, scene.rotation)?;
    Ok(RegionSummary {
        particles: written,
        mass: body.state.particle_mass * written as f64,
    })
}

fn run(args: &Args) -> Result<(), String> {
    let config = SetupConfig {
        target_particles: args.particles,
        target_radius: args.radius,
        porosity: args.porosity,
        impact_angle_deg: args.angle,
        projectile_edge: args.projectile_edge,
        boundary_layers: args.boundary_layers,
        ..SetupConfig::default()
    };
    if !(0.0..1.0).contains(&config.porosity) {
        return Err(format!("porosity {} outside [0, 1)", config.porosity));
    }

    let scene = ImpactScene::build(&config)?;

    let file = File::create(&args.output)
        .map_err(|e| format!("cannot create {}: {e}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    // Record order is a solver contract: interior, boundary, projectile.
    let interior = emit_body(&mut out, &scene, &scene.target_interior)?;
    let boundary = emit_body(&mut out, &scene, &scene.target_boundary)?;

    println!(
        "Input dependent values:\n\
         Radius: {:e}, NumPart: {}, Angle: {:e}, Delta: {:e}\n",
        config.target_radius, config.target_particles, config.impact_angle_deg, scene.delta
    );
    println!(
        "Target number of simulation particles: {}\n\
         Target simulation mass: {:e}\n\
         Target number of boundary particles: {}\n\
         Target boundary mass: {:e}\n\n\
         Target total number of particles: {}\n\
         Target total mass: {:e}\n",
        interior.particles,
        interior.mass,
        boundary.particles,
        boundary.mass,
        interior.particles + boundary.particles,
        interior.mass + boundary.mass,
    );

    let projectile = emit_body(&mut out, &scene, &scene.projectile)?;
    out.flush()
        .map_err(|e| format!("cannot flush {}: {e}", args.output.display()))?;

    println!(
        "Projectile number of particles: {}\n\
         Projectile mass: {:e}\n",
        projectile.particles, projectile.mass,
    );

    if let Some(path) = &args.summary {
        let summary = SetupSummary {
            config,
            delta: scene.delta,
            target_interior: interior,
            target_boundary: boundary,
            projectile,
        };
        impact_storage::save_summary(&summary, path)?;
        eprintln!("Summary written to {}", path.display());
    }

    Ok(())
}
