//! Common types used throughout the crate
//!
//! Shared type aliases for the loosely typed catalog payloads.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One catalog entry's field bag. No fixed schema, any field may be absent.
pub type RawRecord = JsonObject;
