//! Command implementations

mod geometry;
mod tables;
mod text;

pub use geometry::{closest, look, raycast};
pub use tables::{sample, shuffle, tables};
pub use text::capitalize;
