//! Response serialization and the top-level generation entry point

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::algorithm::placement::{GeneratedFleet, generate};
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{ERROR_AREA_EXCEEDED, ERROR_RETRIES_EXHAUSTED, MAX_PLACEMENT_TRIES};
use crate::io::request::normalize_request;
use crate::spatial::ship::Direction;

/// Terminal result of one generation request
///
/// Exactly one of the two shapes is ever produced; serialized, a fleet is
/// `{width, height, ships}` and a failure is `{"error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationOutcome {
    /// A successfully placed fleet
    Fleet(GeneratedFleet),
    /// A structured error payload
    Failure {
        /// Human-readable failure description
        error: String,
    },
}

/// Run one generation request against an injected random source
///
/// The precondition check runs before any randomness is consumed: a fleet
/// whose segments outnumber the board's cells can never be placed, so no
/// retry budget is spent on it.
pub fn run_request(input: &str, rng: &mut dyn RandomSource) -> GenerationOutcome {
    let config = normalize_request(input);
    if config.ship_cell_demand() > config.cell_count() {
        return GenerationOutcome::Failure {
            error: ERROR_AREA_EXCEEDED.to_string(),
        };
    }
    match generate(&config, rng, MAX_PLACEMENT_TRIES) {
        Some(fleet) => GenerationOutcome::Fleet(fleet),
        None => GenerationOutcome::Failure {
            error: ERROR_RETRIES_EXHAUSTED.to_string(),
        },
    }
}

/// Generate a fleet for a raw JSON request, returning the JSON response
///
/// The returned string is always parsable JSON: a `{width, height, ships}`
/// fleet, or one of the two `{"error": ...}` payloads. This function never
/// panics; malformed input degrades to defaults during normalization.
pub fn generate_fleet(input: &str, rng: &mut dyn RandomSource) -> String {
    serialize_outcome(&run_request(input, rng))
}

/// Serialize an outcome through `serde_json::Value`, which cannot fail
fn serialize_outcome(outcome: &GenerationOutcome) -> String {
    match outcome {
        GenerationOutcome::Fleet(fleet) => fleet_value(fleet).to_string(),
        GenerationOutcome::Failure { error } => json!({ "error": error }).to_string(),
    }
}

fn fleet_value(fleet: &GeneratedFleet) -> serde_json::Value {
    let ships: Vec<serde_json::Value> = fleet
        .ships
        .iter()
        .map(|ship| {
            json!({
                "direction": match ship.direction {
                    Direction::Horizontal => "H",
                    Direction::Vertical => "V",
                },
                "start": { "x": ship.start.x, "y": ship.start.y },
                "length": ship.length,
            })
        })
        .collect();
    json!({
        "width": fleet.width,
        "height": fleet.height,
        "ships": ships,
    })
}
