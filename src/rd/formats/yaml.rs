//! YAML formatter

use crate::rd::formats::registry::{FormatError, Formatter};
use crate::rd::snapshot::TreeSnapshot;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, snapshot: &TreeSnapshot) -> Result<String, FormatError> {
        serde_yaml::to_string(snapshot).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree snapshot as YAML"
    }
}
