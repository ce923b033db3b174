use nalgebra::Vector2;
use rayon::prelude::*;

use super::state::Particle;

/// Acceleration felt at `position` due to a point mass `other_mass` sitting at
/// `other`: `G m d / |d|^3`, with `d` pointing from `position` to `other`.
///
/// Two coincident points have no well-defined pull on each other, so they
/// contribute zero. This also covers separations small enough that `|d|^3`
/// underflows to zero.
pub fn pairwise_acceleration(
    g: f64,
    position: &Vector2<f64>,
    other: &Vector2<f64>,
    other_mass: f64,
) -> Vector2<f64> {
    let displacement = other - position;
    let r_cubed = displacement.norm().powi(3);
    if r_cubed == 0.0 {
        return Vector2::zeros();
    }
    displacement * (g * other_mass / r_cubed)
}

/// Net acceleration on body `i` from every other body in the slice.
///
/// Contributions are summed in index order, whoever calls this.
fn acceleration_on<P: Particle>(g: f64, bodies: &[P], i: usize) -> Vector2<f64> {
    let here = bodies[i].position();
    bodies
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(Vector2::zeros(), |acc, (_, other)| {
            acc + pairwise_acceleration(g, &here, &other.position(), other.mass())
        })
}

/// Computes the acceleration of every body from the current state, without
/// touching any of it.
pub fn accelerations<P: Particle>(g: f64, bodies: &[P]) -> Vec<Vector2<f64>> {
    (0..bodies.len())
        .map(|i| acceleration_on(g, bodies, i))
        .collect()
}

/// Same as [accelerations], but spread across the rayon pool. The output is
/// bit-for-bit identical.
pub fn par_accelerations<P: Particle + Sync>(g: f64, bodies: &[P]) -> Vec<Vector2<f64>> {
    (0..bodies.len())
        .into_par_iter()
        .map(|i| acceleration_on(g, bodies, i))
        .collect()
}
