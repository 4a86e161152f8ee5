//! WASM bindings for conflict-engine.
//!
//! Exposes conflict detection, validation and the per-selection summary to the
//! browser-side registration planner via `wasm-bindgen`. Classrooms and results
//! cross the boundary as JSON strings in the same camelCase shape the planner
//! already stores.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p conflict-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/conflict_engine_wasm.wasm
//! ```

use conflict_engine::{Classroom, ConflictSummary};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out
// ---------------------------------------------------------------------------

fn parse_classrooms_json(json: &str) -> Result<Vec<Classroom>, JsValue> {
    conflict_engine::parse_classrooms(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find all pairwise conflicts between the selected classrooms.
///
/// `classrooms_json` must be a JSON array of classroom objects. Returns a JSON
/// array of conflict objects, each tagged with `type` (`"regular-regular"`,
/// `"makeup-regular"` or `"makeup-makeup"`).
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts(classrooms_json: &str) -> Result<String, JsValue> {
    let classrooms = parse_classrooms_json(classrooms_json)?;
    to_json(&conflict_engine::detect_conflicts(&classrooms))
}

/// Check a selection for inconsistent data.
///
/// Returns a JSON array of human-readable issue strings; an empty array means
/// the selection is well-formed.
#[wasm_bindgen(js_name = "validateClassrooms")]
pub fn validate_classrooms(classrooms_json: &str) -> Result<String, JsValue> {
    let classrooms = parse_classrooms_json(classrooms_json)?;
    let issues: Vec<String> = conflict_engine::validation_issues(&classrooms)
        .iter()
        .map(|issue| issue.to_string())
        .collect();
    to_json(&issues)
}

/// Detect conflicts and return per-kind counts plus the registration IDs to
/// flag, as a JSON object.
#[wasm_bindgen(js_name = "summarizeConflicts")]
pub fn summarize_conflicts(classrooms_json: &str) -> Result<String, JsValue> {
    let classrooms = parse_classrooms_json(classrooms_json)?;
    let conflicts = conflict_engine::detect_conflicts(&classrooms);
    to_json(&ConflictSummary::from_conflicts(&conflicts))
}
