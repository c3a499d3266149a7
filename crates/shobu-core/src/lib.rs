//! Core types for Shobu.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] and [`Stone`] for cell contents
//! - [`Quadrant`] with its fixed home and partner relationships
//! - [`Coordinate`] and [`Vector`] for positions inside a 4x4 grid
//! - [`PassiveMove`], [`AggressiveMove`] and [`Turn`] with their
//!   `quadrant,start,end` notation

mod color;
mod coordinate;
mod mov;
mod quadrant;
mod stone;

pub use color::Color;
pub use coordinate::{Coordinate, CoordinateError, Vector, GRID_SIZE};
pub use mov::{split_fields, AggressiveMove, NotationError, PassiveMove, Turn};
pub use quadrant::Quadrant;
pub use stone::Stone;
