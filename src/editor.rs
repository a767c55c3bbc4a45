use std::sync::Arc;

use serde_json::Value;

use crate::error::ParseError;
use crate::state::DocumentState;

/// Parse raw edit text into a value without touching any state.
pub fn parse(raw: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// Validate `raw` and, on success, publish it as the new document root.
///
/// On failure the current root is left exactly as it was; the error carries
/// the source position for inline display. Expansion state is deliberately
/// not reset here — whether stale paths should survive a root replacement
/// is the host's call.
pub fn commit(state: &DocumentState, raw: &str) -> Result<Arc<Value>, ParseError> {
    let parsed = parse(raw)?;
    log::debug!("committing new root from {} bytes of edit text", raw.len());
    Ok(state.replace(parsed))
}

/// Canonical text form of a value: 2-space indentation, object keys in
/// their original insertion order. This is the serialization contract for
/// both the clipboard export and the editor round trip.
pub fn serialize(value: &Value) -> String {
    // a Value holds no non-finite numbers and no non-string keys, so
    // serialization cannot fail
    serde_json::to_string_pretty(value).unwrap_or_default()
}
