use nalgebra::Vector2;

use super::body::{Body, BodyKind, Color};
use crate::error::InvalidBodyError;

/// The bodies of one scenario, in the order they were added.
///
/// Bodies are known only by their index. There's no way to remove one; a new
/// scenario means a new orrery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orrery {
    bodies: Vec<Body>,
}

impl Orrery {
    pub fn new() -> Self {
        Orrery { bodies: Vec::new() }
    }

    /// Appends a body, returning its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Builds a body and appends it. A body with a bad mass is not added.
    pub fn create_body(
        &mut self,
        kind: BodyKind,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        radius: f32,
        color: Color,
    ) -> Result<usize, InvalidBodyError> {
        let body = Body::new(kind, mass, position, velocity, radius, color)?;
        Ok(self.add_body(body))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Largest |x| or |y| of any body, or zero if there are none. The viewer
    /// scales the scene by this.
    pub fn max_distance(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.state.position.x.abs().max(b.state.position.y.abs()))
            .fold(0.0, f64::max)
    }
}

impl FromIterator<Body> for Orrery {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Orrery {
            bodies: iter.into_iter().collect(),
        }
    }
}
