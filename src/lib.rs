//! Randomized battleship-solitaire fleet generation under placement constraints
//!
//! The generator lays out a fleet of ships on a rectangular grid subject to
//! bounds, non-overlap, and an optional no-touching adjacency rule, selecting
//! uniformly among legal placements with injected randomness and retrying
//! whole attempts up to a fixed budget when a dead end is reached.

#![forbid(unsafe_code)]

/// Core placement algorithm: candidate enumeration, occupancy tracking, and retries
pub mod algorithm;
/// Request/response contracts, configuration defaults, and the CLI surface
pub mod io;
/// Board geometry and ship placement value types
pub mod spatial;

pub use io::error::{FleetError, Result};
pub use io::response::generate_fleet;
