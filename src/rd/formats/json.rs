//! JSON formatter
//!
//! Dumps the tree snapshot with `serde_json`, pretty printed. Useful for tools that want to
//! post-process a derivation rather than read it.

use crate::rd::formats::registry::{FormatError, Formatter};
use crate::rd::snapshot::TreeSnapshot;

pub fn to_json_str(snapshot: &TreeSnapshot) -> Result<String, FormatError> {
    serde_json::to_string_pretty(snapshot)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, snapshot: &TreeSnapshot) -> Result<String, FormatError> {
        to_json_str(snapshot)
    }

    fn description(&self) -> &str {
        "Tree snapshot as pretty printed JSON"
    }
}
