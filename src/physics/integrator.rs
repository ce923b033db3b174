use nalgebra::Vector2;
use rayon::prelude::*;

use super::gravity::{accelerations, par_accelerations};
use super::state::{Particle, PhysicalState};
use crate::error::InvalidArgumentError;

/// Below this many bodies the rayon pool costs more than it saves.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Advances a set of bodies under their mutual gravity.
///
/// Each step is a semi-implicit (symplectic) Euler update. Every acceleration
/// is computed from the state at the start of the step, and only then is each
/// body kicked and drifted:
///
/// ```text
/// v' = v + a dt
/// x' = x + v' dt
/// ```
///
/// The integrator keeps nothing between calls besides its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    g: f64,
    parallel_threshold: usize,
}

impl Integrator {
    pub fn new(g: f64) -> Self {
        Integrator {
            g,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the body count from which both phases of a step run on the rayon
    /// pool. The results don't depend on this.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.g
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn is_parallel(&self, num_bodies: usize) -> bool {
        num_bodies >= self.parallel_threshold
    }

    pub fn accelerations<P: Particle + Sync>(&self, bodies: &[P]) -> Vec<Vector2<f64>> {
        if self.is_parallel(bodies.len()) {
            par_accelerations(self.g, bodies)
        } else {
            accelerations(self.g, bodies)
        }
    }

    /// Advances every body by `delta` units of simulated time.
    ///
    /// A zero `delta` leaves everything untouched. A negative or non-finite
    /// one is rejected before anything is modified.
    pub fn step<P: Particle + Send + Sync>(
        &self,
        bodies: &mut [P],
        delta: f64,
    ) -> Result<(), InvalidArgumentError> {
        if !(delta >= 0.0 && delta.is_finite()) {
            return Err(InvalidArgumentError {
                name: "delta",
                value: delta,
            });
        }
        if delta == 0.0 || bodies.is_empty() {
            return Ok(());
        }

        let accelerations = self.accelerations(bodies);

        if self.is_parallel(bodies.len()) {
            bodies
                .par_iter_mut()
                .zip(accelerations.par_iter())
                .for_each(|(body, a)| kick_drift(body.state_mut(), a, delta));
        } else {
            for (body, a) in bodies.iter_mut().zip(accelerations.iter()) {
                kick_drift(body.state_mut(), a, delta);
            }
        }

        Ok(())
    }
}

fn kick_drift(state: &mut PhysicalState, acceleration: &Vector2<f64>, delta: f64) {
    state.velocity += acceleration * delta;
    // Uses the velocity we just updated, not the old one
    state.position += state.velocity * delta;
}
