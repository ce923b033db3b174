use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use solar_sim::config::Config;
use solar_sim::file::{read_file, write_file};
use solar_sim::gui;
use solar_sim::model::Simulation;
use solar_sim::physics::{total_energy, total_momentum};

#[derive(Debug, Parser)]
#[command(about = "Newtonian gravity for stars and planets in the plane")]
struct Args {
    /// Scenario file, one body per line
    scenario: PathBuf,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the scenario when saving (S in the viewer, or at the
    /// end of a headless run)
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Simulated seconds to cover in a headless run
    #[arg(long, default_value_t = 86400.0, requires = "headless")]
    duration: f64,

    /// Longest single step in a headless run, in simulated seconds
    #[arg(long, default_value_t = 60.0, requires = "headless")]
    step: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let orrery = read_file(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;
    let simulation = Simulation::new(orrery, &config);

    if args.headless {
        run_headless(simulation, &args)
    } else {
        gui::run(simulation, &config, args.scenario, args.save);
        Ok(())
    }
}

fn run_headless(mut simulation: Simulation, args: &Args) -> Result<()> {
    let g = simulation.integrator().gravitational_constant();
    let energy_before = total_energy(g, simulation.orrery().bodies());
    let momentum_before = total_momentum(simulation.orrery().bodies());

    let num_steps = simulation.run_for(args.duration, args.step)?;

    let energy_after = total_energy(g, simulation.orrery().bodies());
    let momentum_after = total_momentum(simulation.orrery().bodies());
    info!(
        "Took {} steps; {}",
        num_steps,
        simulation.elapsed_text()
    );
    info!(
        "Energy: {:e} -> {:e} (relative drift {:e})",
        energy_before,
        energy_after,
        relative_drift(energy_before, energy_after)
    );
    info!(
        "Momentum: {:e} -> {:e} (drift {:e})",
        momentum_before.norm(),
        momentum_after.norm(),
        (momentum_after - momentum_before).norm()
    );

    if let Some(path) = &args.save {
        write_file(path, simulation.orrery())
            .with_context(|| format!("failed to save scenario to {}", path.display()))?;
    }
    Ok(())
}

fn relative_drift(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        after - before
    } else {
        (after - before) / before.abs()
    }
}
