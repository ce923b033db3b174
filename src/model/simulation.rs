use std::time::Duration;

use log::{debug, info};

use crate::config::Config;
use crate::error::InvalidArgumentError;
use crate::orrery::Orrery;
use crate::physics::Integrator;

/// Range of the speed slider. A slider value `s` means `exp(5 + s)`
/// simulated seconds per wall-clock second.
pub const SLIDER_MIN: f64 = -20.0;
pub const SLIDER_MAX: f64 = 20.0;

const SLIDER_OFFSET: f64 = 5.0;

/// Inverse of the slider mapping. Scales too small to represent land at
/// [SLIDER_MIN].
pub fn time_scale_to_slider(time_scale: f64) -> f64 {
    if time_scale <= 0.0 {
        return SLIDER_MIN;
    }
    (time_scale.ln() - SLIDER_OFFSET).clamp(SLIDER_MIN, SLIDER_MAX)
}

/// One loaded scenario and the clock that drives it.
pub struct Simulation {
    orrery: Orrery,
    integrator: Integrator,
    // Invariants:
    //   - model_time is the sum of every delta successfully stepped since the
    //     last load
    //   - speed_slider is within [SLIDER_MIN, SLIDER_MAX]
    model_time: f64,
    time_scale: f64,
    speed_slider: f64,
    running: bool,
    alive: bool,
}

impl Simulation {
    /// Starts out running, at the configured time scale.
    pub fn new(orrery: Orrery, config: &Config) -> Self {
        Simulation {
            orrery,
            integrator: config.integrator(),
            model_time: 0.0,
            time_scale: config.time_scale,
            speed_slider: time_scale_to_slider(config.time_scale),
            running: true,
            alive: true,
        }
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn model_time(&self) -> f64 {
        self.model_time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn speed_slider(&self) -> f64 {
        self.speed_slider
    }

    pub fn max_distance(&self) -> f64 {
        self.orrery.max_distance()
    }

    // Run state

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_pause(&mut self) {
        self.running = !self.running;
    }

    /// Stops for good. There's no coming back from this one.
    pub fn stop(&mut self) {
        self.running = false;
        self.alive = false;
    }

    pub fn is_running(&self) -> bool {
        self.running && self.alive
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    // Time

    /// Moves the model forward by however much simulated time corresponds to
    /// `wall_delta` of real time. Does nothing while paused.
    pub fn advance(&mut self, wall_delta: Duration) -> Result<(), InvalidArgumentError> {
        if !self.is_running() {
            return Ok(());
        }
        self.step_by(wall_delta.as_secs_f64() * self.time_scale)
    }

    /// One step of exactly `delta` simulated seconds, paused or not.
    pub fn step_by(&mut self, delta: f64) -> Result<(), InvalidArgumentError> {
        self.integrator.step(self.orrery.bodies_mut(), delta)?;
        self.model_time += delta;
        Ok(())
    }

    /// Covers `duration` simulated seconds in steps no longer than
    /// `max_step`, returning how many steps it took.
    pub fn run_for(&mut self, duration: f64, max_step: f64) -> Result<usize, InvalidArgumentError> {
        self.run_for_each(duration, max_step, |_, _| {})
    }

    /// Like [Simulation::run_for], calling `after_step` with the simulation
    /// and the number of steps taken so far after every step.
    pub fn run_for_each<F>(
        &mut self,
        duration: f64,
        max_step: f64,
        mut after_step: F,
    ) -> Result<usize, InvalidArgumentError>
    where
        F: FnMut(&Simulation, usize),
    {
        if !(duration >= 0.0 && duration.is_finite()) {
            return Err(InvalidArgumentError {
                name: "duration",
                value: duration,
            });
        }
        if !(max_step > 0.0 && max_step.is_finite()) {
            return Err(InvalidArgumentError {
                name: "max_step",
                value: max_step,
            });
        }

        let mut remaining = duration;
        let mut num_steps = 0;
        while remaining > 0.0 {
            let delta = remaining.min(max_step);
            self.step_by(delta)?;
            remaining -= delta;
            num_steps += 1;
            after_step(self, num_steps);
        }
        Ok(num_steps)
    }

    // Speed

    /// NaN is ignored; everything else is clamped to the slider's range.
    pub fn set_speed_slider(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.speed_slider = value.clamp(SLIDER_MIN, SLIDER_MAX);
        self.time_scale = (SLIDER_OFFSET + self.speed_slider).exp();
        debug!("Time scale is now {:.3e} s / s", self.time_scale);
    }

    pub fn speed_up(&mut self) {
        self.set_speed_slider(self.speed_slider + 1.0);
    }

    pub fn slow_down(&mut self) {
        self.set_speed_slider(self.speed_slider - 1.0);
    }

    // Scenario

    /// Swaps in a new set of bodies and restarts the clock. The run state and
    /// speed are left alone.
    pub fn load(&mut self, orrery: Orrery) {
        info!(
            "Replacing {} bodies with {}, resetting the clock",
            self.orrery.len(),
            orrery.len()
        );
        self.orrery = orrery;
        self.model_time = 0.0;
    }

    pub fn elapsed_text(&self) -> String {
        format!("{} seconds passed", self.model_time.trunc() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use crate::orrery::{BodyKind, Color};

    fn config() -> Config {
        Config {
            gravitational_constant: 1.0,
            time_scale: 10.0,
            ..Config::default()
        }
    }

    fn two_bodies() -> Orrery {
        let mut orrery = Orrery::new();
        orrery
            .create_body(
                BodyKind::Star,
                1000.0,
                Vector2::zeros(),
                Vector2::zeros(),
                10.0,
                Color::parse("yellow"),
            )
            .unwrap();
        orrery
            .create_body(
                BodyKind::Planet,
                1.0,
                Vector2::new(100.0, 0.0),
                Vector2::new(0.0, 3.0),
                2.0,
                Color::parse("blue"),
            )
            .unwrap();
        orrery
    }

    #[test]
    fn test_advance_uses_time_scale() {
        let mut sim = Simulation::new(two_bodies(), &config());
        assert!(sim.is_running());

        sim.advance(Duration::from_millis(500)).unwrap();
        assert_eq!(sim.model_time(), 5.0);
        assert_ne!(sim.orrery(), &two_bodies());
    }

    #[test]
    fn test_paused_does_nothing() {
        let mut sim = Simulation::new(two_bodies(), &config());
        sim.pause();
        sim.advance(Duration::from_secs(3)).unwrap();
        assert_eq!(sim.model_time(), 0.0);
        assert_eq!(sim.orrery(), &two_bodies());

        sim.toggle_pause();
        assert!(sim.is_running());
        sim.advance(Duration::from_secs(3)).unwrap();
        assert_eq!(sim.model_time(), 30.0);
    }

    #[test]
    fn test_stop_is_final() {
        let mut sim = Simulation::new(two_bodies(), &config());
        sim.stop();
        assert!(!sim.is_alive());

        sim.start();
        assert!(!sim.is_running());
        sim.advance(Duration::from_secs(1)).unwrap();
        assert_eq!(sim.model_time(), 0.0);
    }

    #[test]
    fn test_step_by_ignores_pause() {
        let mut sim = Simulation::new(two_bodies(), &config());
        sim.pause();
        sim.step_by(2.5).unwrap();
        assert_eq!(sim.model_time(), 2.5);

        let err = sim.step_by(-1.0).unwrap_err();
        assert_eq!(err.name, "delta");
        assert_eq!(sim.model_time(), 2.5);
    }

    #[test]
    fn test_run_for() {
        let mut sim = Simulation::new(two_bodies(), &config());
        assert_eq!(sim.run_for(10.0, 3.0).unwrap(), 4);
        assert_relative_eq!(sim.model_time(), 10.0);

        assert_eq!(sim.run_for(0.0, 3.0).unwrap(), 0);
        assert_eq!(sim.run_for(1.0, 0.0).unwrap_err().name, "max_step");
        assert_eq!(sim.run_for(f64::NAN, 1.0).unwrap_err().name, "duration");
        assert_eq!(
            sim.run_for(f64::INFINITY, 1.0).unwrap_err().name,
            "duration"
        );
        assert_relative_eq!(sim.model_time(), 10.0);
    }

    #[test]
    fn test_run_for_each() {
        let mut sim = Simulation::new(two_bodies(), &config());
        let mut seen = Vec::new();
        let num_steps = sim
            .run_for_each(5.0, 2.0, |sim, n| seen.push((n, sim.model_time())))
            .unwrap();

        assert_eq!(num_steps, 3);
        assert_eq!(seen, [(1, 2.0), (2, 4.0), (3, 5.0)]);

        // Bad arguments are caught before the callback ever runs
        let mut calls = 0;
        let err = sim
            .run_for_each(f64::INFINITY, 1.0, |_, _| calls += 1)
            .unwrap_err();
        assert_eq!(err.name, "duration");
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_speed_slider() {
        let mut sim = Simulation::new(two_bodies(), &config());
        assert_relative_eq!(sim.speed_slider(), 10.0f64.ln() - 5.0);

        sim.set_speed_slider(0.0);
        assert_relative_eq!(sim.time_scale(), 5.0f64.exp());

        sim.speed_up();
        assert_relative_eq!(sim.time_scale(), 6.0f64.exp());
        sim.slow_down();
        sim.slow_down();
        assert_relative_eq!(sim.time_scale(), 4.0f64.exp());

        sim.set_speed_slider(100.0);
        assert_eq!(sim.speed_slider(), SLIDER_MAX);
        sim.speed_up();
        assert_eq!(sim.speed_slider(), SLIDER_MAX);

        sim.set_speed_slider(f64::NAN);
        assert_eq!(sim.speed_slider(), SLIDER_MAX);
    }

    #[test]
    fn test_slider_mapping() {
        assert_relative_eq!(time_scale_to_slider(1000.0), 1000.0f64.ln() - 5.0);
        assert_eq!(time_scale_to_slider(0.0), SLIDER_MIN);
        assert_eq!(time_scale_to_slider(1e300), SLIDER_MAX);
    }

    #[test]
    fn test_load_resets_clock() {
        let mut sim = Simulation::new(two_bodies(), &config());
        sim.step_by(1234.9).unwrap();
        assert_eq!(sim.elapsed_text(), "1234 seconds passed");

        sim.load(Orrery::new());
        assert_eq!(sim.model_time(), 0.0);
        assert_eq!(sim.elapsed_text(), "0 seconds passed");
        assert!(sim.orrery().is_empty());
        assert_eq!(sim.max_distance(), 0.0);
    }
}
