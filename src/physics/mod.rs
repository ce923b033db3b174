//! Newtonian gravity for a handful of point masses in the plane.
//!
//! The important pieces in this module are:
//! - [PhysicalState], the mass, position and velocity of one body. Anything
//!   that carries one can be advanced by implementing [Particle].
//! - [Integrator], which advances a slice of particles by one time step using
//!   all-pairs gravity and a semi-implicit Euler update.
//! - a few read-only diagnostics (momentum, energy, center of mass) and
//!   Kepler's laws for circular orbits, in [kepler].

mod diagnostics;
mod gravity;
mod integrator;
pub mod kepler;
mod state;

/// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.67408e-11;

pub use diagnostics::{
    center_of_mass, kinetic_energy, potential_energy, total_energy, total_mass, total_momentum,
};
pub use gravity::{accelerations, pairwise_acceleration, par_accelerations};
pub use integrator::{Integrator, DEFAULT_PARALLEL_THRESHOLD};
pub use state::{Particle, PhysicalState};
