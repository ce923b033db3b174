//! Kepler's laws for circular orbits, used to set up and sanity-check
//! scenarios. `mu` is the standard gravitational parameter `G M`.

use std::f64::consts::PI;

/// Speed of a circular orbit of the given radius.
pub fn circular_velocity(mu: f64, radius: f64) -> f64 {
    (mu / radius).sqrt()
}

/// Orbital period from Kepler's third law.
pub fn orbital_period(semimajor_axis: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * semimajor_axis.powi(3) / mu).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::NEWTON_G;

    const SUN_MASS: f64 = 1.98892e30;
    const MARS_ORBIT_RADIUS: f64 = 227.936e9;
    const DAY: f64 = 86400.0;

    #[test]
    fn test_mars() {
        // 686.98 days, if Mars' orbit were a circle
        approx::assert_relative_eq!(
            orbital_period(MARS_ORBIT_RADIUS, NEWTON_G * SUN_MASS) / DAY,
            686.98,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_earth() {
        let mu = NEWTON_G * SUN_MASS;
        let v = circular_velocity(mu, 149.6e9);
        approx::assert_relative_eq!(v, 29.78e3, max_relative = 1e-3);

        // A circular orbit goes round once in circumference / speed
        approx::assert_relative_eq!(
            orbital_period(149.6e9, mu),
            2.0 * PI * 149.6e9 / v,
            max_relative = 1e-12
        );
    }
}
