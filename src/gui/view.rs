use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2};

use crate::model::Simulation;
use crate::orrery::{Body, Orrery};

/// Fraction of the smaller window dimension the farthest body ends up at.
const FILL_FRACTION: f32 = 0.4;

/// Pixels per meter such that a body `max_distance` from the origin along
/// either axis stays on screen. An empty or collapsed scene gets 1.
pub fn scale_factor(max_distance: f64, width: u32, height: u32) -> f32 {
    if !(max_distance > 0.0 && max_distance.is_finite()) {
        return 1.0;
    }
    let half_extent = FILL_FRACTION * width.min(height) as f32;
    (half_extent as f64 / max_distance) as f32
}

/// The scene nodes for one scenario, in the same order as its bodies.
pub struct View {
    circles: Vec<PlanarSceneNode>,
    scale: f32,
}

impl View {
    pub fn new(window: &mut Window, orrery: &Orrery) -> Self {
        let mut view = View {
            circles: Vec::new(),
            scale: 1.0,
        };
        view.rebuild(window, orrery);
        view
    }

    /// Throws away the old circles and makes one per body, rescaling so
    /// everything fits.
    pub fn rebuild(&mut self, window: &mut Window, orrery: &Orrery) {
        for circle in self.circles.iter_mut() {
            circle.unlink();
        }
        self.scale = scale_factor(orrery.max_distance(), window.width(), window.height());
        self.circles = orrery
            .bodies()
            .iter()
            .map(|body| Self::create_body_object(window, body))
            .collect();
        self.update_positions(orrery);
    }

    fn create_body_object(window: &mut Window, body: &Body) -> PlanarSceneNode {
        let mut circle = window.add_circle(body.info.radius);
        let color = body.info.color.rgb();
        circle.set_color(color.x, color.y, color.z);
        circle
    }

    pub fn update_positions(&mut self, orrery: &Orrery) {
        for (circle, body) in self.circles.iter_mut().zip(orrery.bodies()) {
            let position = body.state.position * self.scale as f64;
            circle.set_local_translation(Translation2::new(position.x as f32, position.y as f32));
        }
    }

    pub fn draw_overlay(&self, window: &mut Window, simulation: &Simulation, fps: f64) {
        let font = Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &overlay_text(simulation, fps),
            &Point2::origin(),
            40.0,
            &font,
            &text_color,
        );
    }
}

fn overlay_text(simulation: &Simulation, fps: f64) -> String {
    let status = if simulation.is_running() {
        ""
    } else {
        " (paused)"
    };
    format!(
        "{}{}
Time scale: {:.3e} s/s
FPS: {:.0}",
        simulation.elapsed_text(),
        status,
        simulation.time_scale(),
        fps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::config::Config;

    #[test]
    fn test_scale_factor() {
        // Uses the smaller of the two dimensions
        assert_relative_eq!(scale_factor(100.0, 1000, 900), 3.6);
        assert_relative_eq!(scale_factor(100.0, 500, 900), 2.0);
        assert_relative_eq!(
            scale_factor(227.936e9, 1000, 900),
            360.0 / 227.936e9,
            max_relative = 1e-6
        );

        assert_eq!(scale_factor(0.0, 1000, 900), 1.0);
        assert_eq!(scale_factor(f64::NAN, 1000, 900), 1.0);
    }

    #[test]
    fn test_overlay_text() {
        let mut simulation = Simulation::new(Orrery::new(), &Config::default());
        simulation.step_by(90.5).unwrap();
        simulation.pause();

        let text = overlay_text(&simulation, 59.6);
        assert_eq!(
            text,
            "90 seconds passed (paused)\nTime scale: 1.000e3 s/s\nFPS: 60"
        );
    }
}
