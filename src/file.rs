//! Reading and writing scenario files.
//!
//! A scenario is plain text, one body per line:
//!
//! ```text
//! # <kind> <radius> <color> <mass> <x> <y> <Vx> <Vy>
//! Star   30 yellow 1.98892E30 0          0 0 0
//! Planet 8  blue   5.9736E24  149.6E9    0 0 29.783E3
//! ```
//!
//! Blank lines and lines starting with `#` are ignored, as are lines naming a
//! kind of body we don't know about.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use nalgebra::Vector2;

use crate::error::InvalidBodyError;
use crate::orrery::{Body, BodyKind, Color, Orrery};

const NUM_FIELDS: usize = 8;

#[derive(Debug)]
pub enum ScenarioError {
    Io(io::Error),
    /// A line we couldn't make sense of. Lines are numbered from 1.
    Parse { line: usize, reason: String },
    /// A well-formed line describing a body we refuse to simulate.
    InvalidBody {
        line: usize,
        source: InvalidBodyError,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io(err) => write!(f, "scenario I/O failed: {}", err),
            ScenarioError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            ScenarioError::InvalidBody { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(err) => Some(err),
            ScenarioError::Parse { .. } => None,
            ScenarioError::InvalidBody { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(err: io::Error) -> Self {
        ScenarioError::Io(err)
    }
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Orrery, ScenarioError> {
    let path = path.as_ref();
    let orrery = read_scenario(BufReader::new(File::open(path)?))?;
    info!("Loaded {} bodies from {}", orrery.len(), path.display());
    Ok(orrery)
}

pub fn read_scenario<R: BufRead>(reader: R) -> Result<Orrery, ScenarioError> {
    let mut orrery = Orrery::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let kind = match BodyKind::from_name(fields[0]) {
            Some(kind) => kind,
            None => {
                warn!(
                    "Line {}: unknown space object {:?}, skipping",
                    line_number, fields[0]
                );
                continue;
            }
        };

        orrery.add_body(parse_body(kind, &fields, line_number)?);
    }

    Ok(orrery)
}

fn parse_body(kind: BodyKind, fields: &[&str], line: usize) -> Result<Body, ScenarioError> {
    if fields.len() != NUM_FIELDS {
        return Err(ScenarioError::Parse {
            line,
            reason: format!(
                "expected {} fields for a {}, found {}",
                NUM_FIELDS,
                kind,
                fields.len()
            ),
        });
    }

    let radius = parse_radius(fields[1], line)?;
    let color = Color::parse(fields[2]);
    let mass = parse_field(fields[3], "mass", line)?;
    let position = Vector2::new(
        parse_field(fields[4], "x", line)?,
        parse_field(fields[5], "y", line)?,
    );
    let velocity = Vector2::new(
        parse_field(fields[6], "Vx", line)?,
        parse_field(fields[7], "Vy", line)?,
    );

    Body::new(kind, mass, position, velocity, radius, color)
        .map_err(|source| ScenarioError::InvalidBody { line, source })
}

fn parse_field(token: &str, name: &str, line: usize) -> Result<f64, ScenarioError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ScenarioError::Parse {
            line,
            reason: format!("{} must be finite, got {:?}", name, token),
        }),
        Err(_) => Err(ScenarioError::Parse {
            line,
            reason: format!("could not parse {} from {:?}", name, token),
        }),
    }
}

// Radii are drawn in f32, so check the value that actually gets stored
fn parse_radius(token: &str, line: usize) -> Result<f32, ScenarioError> {
    let radius = parse_field(token, "radius", line)? as f32;
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(ScenarioError::Parse {
            line,
            reason: format!("radius must be a non-negative f32, got {:?}", token),
        });
    }
    Ok(radius)
}

/// Writes one line per body, in the same format [read_scenario] accepts.
/// Numbers are written in exponent form, which reads back exactly.
pub fn write_scenario<W: Write>(mut writer: W, orrery: &Orrery) -> io::Result<()> {
    for body in orrery.bodies() {
        let state = &body.state;
        writeln!(
            writer,
            "{} {} {} {:e} {:e} {:e} {:e} {:e}",
            body.info.kind,
            body.info.radius,
            body.info.color.token(),
            state.mass(),
            state.position.x,
            state.position.y,
            state.velocity.x,
            state.velocity.y,
        )?;
    }
    Ok(())
}

pub fn write_file<P: AsRef<Path>>(path: P, orrery: &Orrery) -> Result<(), ScenarioError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_scenario(&mut writer, orrery)?;
    writer.flush()?;
    info!("Saved {} bodies to {}", orrery.len(), path.display());
    Ok(())
}
