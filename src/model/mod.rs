//! The state a running simulation carries between frames, kept apart from the
//! viewer so that it can be driven headless.

mod simulation;
mod throttle;

pub use simulation::{time_scale_to_slider, Simulation, SLIDER_MAX, SLIDER_MIN};
pub use throttle::RedrawThrottle;
