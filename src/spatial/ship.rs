//! Coordinates, directions, and candidate ship placements
//!
//! These are the wire types of the generator: a successful response is the
//! board dimensions plus one [`Candidate`] per requested ship.

use serde::{Deserialize, Serialize};

/// Zero-indexed board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, `0 <= x < width`
    pub x: usize,
    /// Row, `0 <= y < height`
    pub y: usize,
}

/// Axis a ship extends along
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Extends along x, serialized as `"H"`
    #[serde(rename = "H")]
    Horizontal,
    /// Extends along y, serialized as `"V"`
    #[serde(rename = "V")]
    Vertical,
}

/// One provisional ship placement
///
/// A candidate is produced by enumeration and is only final once the
/// placement engine commits its cells to the occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Axis the ship extends along
    pub direction: Direction,
    /// First covered cell
    pub start: Coordinate,
    /// Number of covered cells
    pub length: usize,
}

impl Candidate {
    /// Last cell the ship would cover
    ///
    /// Returns `None` when the extent overflows `usize`; such a candidate
    /// can never lie on a real board and is rejected by enumeration.
    pub const fn end(&self) -> Option<Coordinate> {
        let span = match self.length.checked_sub(1) {
            Some(span) => span,
            None => return None,
        };
        match self.direction {
            Direction::Horizontal => match self.start.x.checked_add(span) {
                Some(x) => Some(Coordinate { x, y: self.start.y }),
                None => None,
            },
            Direction::Vertical => match self.start.y.checked_add(span) {
                Some(y) => Some(Coordinate { x: self.start.x, y }),
                None => None,
            },
        }
    }

    /// Iterate over every cell the ship would cover, start first
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let Coordinate { x, y } = self.start;
        let direction = self.direction;
        (0..self.length).map(move |step| match direction {
            Direction::Horizontal => Coordinate { x: x + step, y },
            Direction::Vertical => Coordinate { x, y: y + step },
        })
    }
}
