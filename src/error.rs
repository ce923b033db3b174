use std::fmt;

/// A body was given a mass the force law can't work with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidBodyError {
    pub mass: f64,
}

impl fmt::Display for InvalidBodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid body: mass must be positive and finite, got {}",
            self.mass
        )
    }
}

impl std::error::Error for InvalidBodyError {}

/// A caller handed the simulation a value outside its contract, e.g. a
/// negative time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidArgumentError {
    pub name: &'static str,
    pub value: f64,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid argument: `{}` must be non-negative and finite, got {}",
            self.name, self.value
        )
    }
}

impl std::error::Error for InvalidArgumentError {}
