//! Spatial value types for the placement algorithm
//!
//! This module contains board-related functionality including:
//! - Board dimensions and fleet request data
//! - Coordinates, directions, and candidate placements

/// Board configuration and dimension helpers
pub mod board;
/// Coordinates, directions, and candidate ship placements
pub mod ship;

pub use board::BoardConfig;
pub use ship::{Candidate, Coordinate, Direction};
