//! JSON serialization for annotation layouts.
//!
//! Plotting frontends in other processes or languages can consume the
//! layout as JSON instead of linking against this crate.

use crate::annotation::BracketLayout;

/// Serialize a `BracketLayout` to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BracketLayout`).
pub fn to_json(layout: &BracketLayout) -> Result<String, serde_json::Error> {
    serde_json::to_string(layout)
}

/// Serialize a `BracketLayout` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `BracketLayout`).
pub fn to_json_pretty(layout: &BracketLayout) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(layout)
}
