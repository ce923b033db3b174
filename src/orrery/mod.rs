mod body;
mod orrery;

pub use body::{Body, BodyInfo, BodyKind, Color};
pub use orrery::Orrery;
