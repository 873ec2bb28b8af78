//! Board configuration shared by every stage of fleet generation

use crate::io::configuration::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use crate::spatial::ship::Coordinate;

/// Sanitized description of one generation request
///
/// Dimensions are strictly positive and the ship list holds strictly
/// positive lengths; [`crate::io::request::normalize_request`] upholds both
/// invariants before a config reaches the placement code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Requested ship lengths, one entry per ship
    pub ships: Vec<usize>,
    /// Forbid ships from sharing an edge or corner
    pub no_touching: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            ships: Vec::new(),
            no_touching: false,
        }
    }
}

impl BoardConfig {
    /// Total number of cells on the board
    ///
    /// Saturates rather than overflowing so hostile dimensions cannot panic
    /// the feasibility check.
    pub const fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Number of cells the requested fleet would cover
    pub fn ship_cell_demand(&self) -> usize {
        self.ships
            .iter()
            .fold(0usize, |total, &len| total.saturating_add(len))
    }

    /// Check that a coordinate lies on the board
    pub const fn contains(&self, cell: Coordinate) -> bool {
        cell.x < self.width && cell.y < self.height
    }
}
