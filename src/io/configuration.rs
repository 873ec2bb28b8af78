//! Generator constants and runtime configuration defaults

/// Board width substituted for missing or invalid requests
pub const DEFAULT_BOARD_WIDTH: usize = 10;
/// Board height substituted for missing or invalid requests
pub const DEFAULT_BOARD_HEIGHT: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 10_000;

/// Whole-attempt retries before generation gives up
pub const MAX_PLACEMENT_TRIES: usize = 100;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Error payload for fleets that cannot fit on the board
pub const ERROR_AREA_EXCEEDED: &str = "Ship segments exceed board area";
/// Error payload for exhausting the retry budget
pub const ERROR_RETRIES_EXHAUSTED: &str = "Failed to generate fleet after max retries";
