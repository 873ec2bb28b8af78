//! Lenient normalization of raw generation requests
//!
//! Malformed input never errors: unparsable JSON, missing fields, and junk
//! values all degrade to permissive defaults so the generator always has a
//! well-formed board to work with.

use serde_json::Value;

use crate::io::configuration::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION};
use crate::spatial::board::BoardConfig;

/// Parse and sanitize a raw JSON request into a board configuration
///
/// Accepted shapes per field:
/// - `width` / `height`: JSON number (floats floored) or decimal string;
///   anything non-positive, non-numeric, or beyond the dimension cap falls
///   back to the 10x10 default.
/// - `ships`: array of numbers or numeric strings, or one comma-separated
///   string; entries are trimmed, non-numeric and zero entries dropped.
///   Any other shape yields an empty fleet.
/// - `noTouching`: JSON bool, default false.
///
/// Idempotent on well-formed configurations.
pub fn normalize_request(raw: &str) -> BoardConfig {
    let value = serde_json::from_str::<Value>(raw).unwrap_or(Value::Null);
    BoardConfig {
        width: dimension(value.get("width"), DEFAULT_BOARD_WIDTH),
        height: dimension(value.get("height"), DEFAULT_BOARD_HEIGHT),
        ships: ship_lengths(value.get("ships")),
        no_touching: value
            .get("noTouching")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}

/// Coerce a JSON value into a strictly positive integer
fn positive_int(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.is_finite() && *float >= 1.0)
                    .map(|float| float.floor() as u64)
            })
            .and_then(|int| usize::try_from(int).ok())
            .filter(|&int| int > 0),
        Value::String(text) => text.trim().parse::<usize>().ok().filter(|&int| int > 0),
        _ => None,
    }
}

fn dimension(value: Option<&Value>, default: usize) -> usize {
    value
        .and_then(positive_int)
        .filter(|&dim| dim <= MAX_BOARD_DIMENSION)
        .unwrap_or(default)
}

fn ship_lengths(value: Option<&Value>) -> Vec<usize> {
    match value {
        Some(Value::Array(entries)) => entries.iter().filter_map(positive_int).collect(),
        Some(Value::String(text)) => text
            .split(',')
            .filter_map(|entry| entry.trim().parse::<usize>().ok())
            .filter(|&len| len > 0)
            .collect(),
        _ => Vec::new(),
    }
}
