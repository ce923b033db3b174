use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use plotters::prelude::*;

use solar_sim::config::Config;
use solar_sim::file::read_file;
use solar_sim::model::Simulation;
use solar_sim::orrery::Body;

/// Integrates a scenario without a window and plots where every body went.
#[derive(Debug, Parser)]
struct Args {
    scenario: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to cover
    #[arg(long, default_value_t = 365.25 * 86400.0)]
    duration: f64,

    /// Simulated seconds per step
    #[arg(long, default_value_t = 3600.0)]
    step: f64,

    /// Record a point every this many steps
    #[arg(long, default_value_t = 24)]
    sample_every: usize,

    #[arg(short, long, default_value = "trajectory.png")]
    output: PathBuf,
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
    let mut simulation = Simulation::new(orrery, &config);

    let paths = integrate(&mut simulation, &args)?;
    draw_plot(&args.output, simulation.orrery().bodies(), &paths)
        .map_err(|err| anyhow!("failed to draw {}: {}", args.output.display(), err))?;

    info!(
        "Plotted {} bodies over {} to {}",
        paths.len(),
        simulation.elapsed_text(),
        args.output.display()
    );
    Ok(())
}

/// One list of sampled (x, y) positions per body.
fn integrate(simulation: &mut Simulation, args: &Args) -> Result<Vec<Vec<(f64, f64)>>> {
    let sample_every = args.sample_every.max(1);
    let mut paths = vec![Vec::new(); simulation.orrery().len()];
    record(simulation, &mut paths);

    simulation.run_for_each(args.duration, args.step, |simulation, num_steps| {
        if num_steps % sample_every == 0 {
            record(simulation, &mut paths);
        }
    })?;
    record(simulation, &mut paths);

    Ok(paths)
}

fn record(simulation: &Simulation, paths: &mut [Vec<(f64, f64)>]) {
    for (path, body) in paths.iter_mut().zip(simulation.orrery().bodies()) {
        path.push((body.state.position.x, body.state.position.y));
    }
}

fn draw_plot(
    name: &Path,
    bodies: &[Body],
    paths: &[Vec<(f64, f64)>],
) -> Result<(), Box<dyn std::error::Error>> {
    // Square, centered on the origin, so orbits come out round
    let extent = paths
        .iter()
        .flatten()
        .map(|(x, y)| x.abs().max(y.abs()))
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.05;

    let root = BitMapBackend::new(name, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| format!("{:.1e}", x))
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    for (body, path) in bodies.iter().zip(paths) {
        let color = plot_color(body);
        chart.draw_series(LineSeries::new(path.iter().copied(), &color))?;
        if let Some(&last) = path.last() {
            chart.draw_series(std::iter::once(Circle::new(last, 4, color.filled())))?;
        }
    }

    root.present()?;
    Ok(())
}

// White on white doesn't show up
fn plot_color(body: &Body) -> RGBColor {
    let rgb = body.info.color.rgb();
    if rgb.x.min(rgb.y).min(rgb.z) > 0.9 {
        return BLACK;
    }
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(rgb.x), channel(rgb.y), channel(rgb.z))
}
