use nalgebra::Vector2;

use super::state::Particle;

pub fn total_mass<P: Particle>(bodies: &[P]) -> f64 {
    bodies.iter().map(|b| b.mass()).sum()
}

pub fn total_momentum<P: Particle>(bodies: &[P]) -> Vector2<f64> {
    bodies
        .iter()
        .fold(Vector2::zeros(), |acc, b| acc + b.state().momentum())
}

/// Mass-weighted mean position. `None` for an empty system.
pub fn center_of_mass<P: Particle>(bodies: &[P]) -> Option<Vector2<f64>> {
    if bodies.is_empty() {
        return None;
    }
    let weighted = bodies
        .iter()
        .fold(Vector2::zeros(), |acc, b| acc + b.position() * b.mass());
    Some(weighted / total_mass(bodies))
}

pub fn kinetic_energy<P: Particle>(bodies: &[P]) -> f64 {
    bodies.iter().map(|b| b.state().kinetic_energy()).sum()
}

/// Sum of `-G m_i m_j / r` over unordered pairs. Coincident pairs are
/// skipped, matching the force law.
pub fn potential_energy<P: Particle>(g: f64, bodies: &[P]) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let r = (b.position() - a.position()).norm();
            if r == 0.0 {
                continue;
            }
            energy -= g * a.mass() * b.mass() / r;
        }
    }
    energy
}

pub fn total_energy<P: Particle>(g: f64, bodies: &[P]) -> f64 {
    kinetic_energy(bodies) + potential_energy(g, bodies)
}
