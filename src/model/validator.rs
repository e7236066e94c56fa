//! Record validation
//!
//! Shallow shape check of an incoming draft. A string field must be present,
//! be a string and be truthy, so `""` fails while `"  "` passes. The trait
//! list must be present and be an array; its elements are not inspected.

use serde_json::Value;

use super::AnimalDraft;

const STRING_FIELDS: [&str; 3] = ["name", "species", "diet"];
const TRAITS_FIELD: &str = "personalityTraits";

/// Returns true if the draft has every required field in the right shape
pub fn validate_animal(draft: &AnimalDraft) -> bool {
    for key in STRING_FIELDS {
        if !is_truthy_string(draft.field(key)) {
            tracing::debug!(field = key, "animal rejected");
            return false;
        }
    }

    if !matches!(draft.field(TRAITS_FIELD), Some(Value::Array(_))) {
        tracing::debug!(field = TRAITS_FIELD, "animal rejected");
        return false;
    }

    true
}

fn is_truthy_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}
