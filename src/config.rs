//! Simulation settings, loaded from YAML.
//!
//! Every field is optional and falls back to its default:
//!
//! ```yaml
//! gravitational_constant: 6.67408e-11  # N m^2 / kg^2
//! time_scale: 1000.0                   # simulated seconds per wall-clock second
//! redraw_interval: 0.01                # seconds between viewer redraws
//! parallel_threshold: 256              # bodies before the integrator goes parallel
//! window:
//!   width: 1000
//!   height: 900
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::physics::{Integrator, DEFAULT_PARALLEL_THRESHOLD, NEWTON_G};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub gravitational_constant: f64,
    pub time_scale: f64,
    pub redraw_interval: f64,
    pub parallel_threshold: usize,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gravitational_constant: NEWTON_G,
            time_scale: 1000.0,
            redraw_interval: 0.01,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1000,
            height: 900,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config: {}", err),
            ConfigError::Yaml(err) => write!(f, "could not parse config: {}", err),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Yaml(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = self.gravitational_constant;
        if !(g > 0.0 && g.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "gravitational_constant must be positive, got {}",
                g
            )));
        }
        if !(self.time_scale >= 0.0 && self.time_scale.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be non-negative, got {}",
                self.time_scale
            )));
        }
        if !(self.redraw_interval >= 0.0 && self.redraw_interval.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "redraw_interval must be non-negative, got {}",
                self.redraw_interval
            )));
        }
        Ok(())
    }

    pub fn integrator(&self) -> Integrator {
        Integrator::new(self.gravitational_constant)
            .with_parallel_threshold(self.parallel_threshold)
    }

    pub fn redraw_interval(&self) -> Duration {
        Duration::from_secs_f64(self.redraw_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file() {
        let yaml = "gravitational_constant: 1.0\nwindow:\n  width: 640\n";
        let config = Config::from_reader(yaml.as_bytes()).unwrap();

        assert_eq!(config.gravitational_constant, 1.0);
        assert_eq!(config.time_scale, 1000.0);
        assert_eq!(
            config.window,
            WindowConfig {
                width: 640,
                height: 900
            }
        );
        assert_eq!(config.integrator().gravitational_constant(), 1.0);
        assert_eq!(config.redraw_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_defaults_are_valid() {
        Config::default().validate().unwrap();
        assert_eq!(Config::default().gravitational_constant, NEWTON_G);
    }

    #[test]
    fn test_rejects_nonsense() {
        let err = Config::from_reader("gravitational_constant: -1.0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_reader("time_scale: -2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_reader("speed: 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
