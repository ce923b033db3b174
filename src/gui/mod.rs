//! An interactive kiss3d window onto a [Simulation].

use std::path::PathBuf;
use std::time::Instant;

use kiss3d::window::{State, Window};
use log::{error, info, warn};

use self::controller::{Command, Controller};
use self::view::View;
use crate::config::Config;
use crate::file::{read_file, write_file};
use crate::model::{RedrawThrottle, Simulation};

mod controller;
mod view;

pub use self::controller::command_for;
pub use self::view::scale_factor;

pub struct Viewer {
    simulation: Simulation,
    view: View,
    controller: Controller,
    throttle: RedrawThrottle,
    last_frame: Instant,
    scenario_path: PathBuf,
    save_path: Option<PathBuf>,
}

impl Viewer {
    pub fn new(
        simulation: Simulation,
        config: &Config,
        window: &mut Window,
        scenario_path: PathBuf,
        save_path: Option<PathBuf>,
    ) -> Self {
        Viewer {
            view: View::new(window, simulation.orrery()),
            simulation,
            controller: Controller::new(),
            throttle: RedrawThrottle::new(config.redraw_interval()),
            last_frame: Instant::now(),
            scenario_path,
            save_path,
        }
    }

    fn apply(&mut self, command: Command, window: &mut Window) {
        match command {
            Command::TogglePause => self.simulation.toggle_pause(),
            Command::SpeedUp => self.simulation.speed_up(),
            Command::SlowDown => self.simulation.slow_down(),
            Command::Save => self.save(),
            Command::Reload => self.reload(window),
            Command::Quit => self.simulation.stop(),
        }
    }

    fn save(&self) {
        let path = match &self.save_path {
            Some(path) => path,
            None => {
                warn!("Nowhere to save to; pass --save to enable saving");
                return;
            }
        };
        if let Err(err) = write_file(path, self.simulation.orrery()) {
            error!("Could not save to {}: {}", path.display(), err);
        }
    }

    fn reload(&mut self, window: &mut Window) {
        match read_file(&self.scenario_path) {
            Ok(orrery) => {
                self.simulation.load(orrery);
                self.view.rebuild(window, self.simulation.orrery());
                self.throttle.reset();
            }
            Err(err) => error!(
                "Could not reload {}: {}",
                self.scenario_path.display(),
                err
            ),
        }
    }
}

impl State for Viewer {
    fn step(&mut self, window: &mut Window) {
        for command in self.controller.process_events(window.events()) {
            self.apply(command, window);
        }
        if !self.simulation.is_alive() {
            info!("Quitting at {}", self.simulation.elapsed_text());
            window.close();
            return;
        }

        let now = Instant::now();
        let wall_delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        if let Err(err) = self.simulation.advance(wall_delta) {
            error!("Pausing: {}", err);
            self.simulation.pause();
        }

        if self.throttle.should_redraw(now) {
            self.view.update_positions(self.simulation.orrery());
        }
        self.view
            .draw_overlay(window, &self.simulation, self.controller.fps());
        self.controller.increment_frame_counter();
    }
}

/// Opens a window and runs until the user quits.
pub fn run(
    simulation: Simulation,
    config: &Config,
    scenario_path: PathBuf,
    save_path: Option<PathBuf>,
) {
    let mut window = Window::new_with_size(
        "Solar System Simulation",
        config.window.width,
        config.window.height,
    );
    window.set_background_color(0.0, 0.0, 0.0);
    window.set_framerate_limit(Some(60));

    let viewer = Viewer::new(simulation, config, &mut window, scenario_path, save_path);
    window.render_loop(viewer);
}
