use std::fmt;

use nalgebra::{Point3, Vector2};

use crate::error::InvalidBodyError;
use crate::physics::{Particle, PhysicalState};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
        }
    }

    /// Case-insensitive; `None` if this isn't a kind we know.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "star" => Some(BodyKind::Star),
            "planet" => Some(BodyKind::Planet),
            _ => None,
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A display color, remembering how it was written so that saving a scenario
/// gives back the same token.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    token: String,
    rgb: Point3<f32>,
}

impl Color {
    /// Accepts a handful of color names, or six hex digits `RRGGBB`. Anything
    /// else is kept as-is and drawn white.
    pub fn parse(token: &str) -> Self {
        let rgb = named_color(token)
            .or_else(|| parse_hex(token))
            .unwrap_or_else(|| Point3::new(1.0, 1.0, 1.0));
        Color {
            token: token.to_owned(),
            rgb,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn rgb(&self) -> Point3<f32> {
        self.rgb
    }
}

fn named_color(name: &str) -> Option<Point3<f32>> {
    let (r, g, b) = match name.to_ascii_lowercase().as_str() {
        "red" => (1.0, 0.0, 0.0),
        "orange" => (1.0, 0.65, 0.0),
        "yellow" => (1.0, 1.0, 0.0),
        "green" => (0.0, 0.5, 0.0),
        "blue" => (0.0, 0.0, 1.0),
        "cyan" => (0.0, 1.0, 1.0),
        "magenta" => (1.0, 0.0, 1.0),
        "brown" => (0.65, 0.16, 0.16),
        "white" => (1.0, 1.0, 1.0),
        "gray" | "grey" => (0.5, 0.5, 0.5),
        "black" => (0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(Point3::new(r, g, b))
}

fn parse_hex(s: &str) -> Option<Point3<f32>> {
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;

    Some(Point3::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

// All the display-only info about a body. The integrator never looks at this.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub kind: BodyKind,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub info: BodyInfo,
    pub state: PhysicalState,
}

impl Body {
    /// Fails if `mass` isn't positive and finite; such a body never makes it
    /// into an orrery.
    pub fn new(
        kind: BodyKind,
        mass: f64,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        radius: f32,
        color: Color,
    ) -> Result<Self, InvalidBodyError> {
        let state = PhysicalState::new(mass, position, velocity)?;
        Ok(Body {
            info: BodyInfo {
                kind,
                radius,
                color,
            },
            state,
        })
    }

    pub fn kind(&self) -> BodyKind {
        self.info.kind
    }
}

impl Particle for Body {
    fn state(&self) -> &PhysicalState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PhysicalState {
        &mut self.state
    }
}
