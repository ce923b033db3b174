use nalgebra::Vector2;

use crate::error::InvalidBodyError;

/// The part of a body that gravity cares about.
///
/// Position and velocity are free to change between steps. The mass is fixed
/// at construction, and is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    mass: f64,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

impl PhysicalState {
    pub fn new(
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
    ) -> Result<Self, InvalidBodyError> {
        // Written this way round so that NaN is rejected too
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(InvalidBodyError { mass });
        }

        Ok(PhysicalState {
            mass,
            position,
            velocity,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}

/// Anything carrying a [PhysicalState] that the integrator can advance.
pub trait Particle {
    fn state(&self) -> &PhysicalState;

    fn state_mut(&mut self) -> &mut PhysicalState;

    fn mass(&self) -> f64 {
        self.state().mass()
    }

    fn position(&self) -> Vector2<f64> {
        self.state().position
    }

    fn velocity(&self) -> Vector2<f64> {
        self.state().velocity
    }
}

impl Particle for PhysicalState {
    fn state(&self) -> &PhysicalState {
        self
    }

    fn state_mut(&mut self) -> &mut PhysicalState {
        self
    }
}
