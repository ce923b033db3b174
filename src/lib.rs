pub mod config;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod orrery;
pub mod physics;
