use serde::Serialize;

use crate::engine::{DetectedValue, DetectionStore, RawValue};

/// One raw detected value, flattened out of a detection store for issue
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rule: String,
    pub context: String,
    pub convention: String,
    pub value_type: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Finding {
    pub fn from_detection(store: &DetectionStore, detected: &DetectedValue) -> Self {
        Finding {
            file: detected.location.file.clone(),
            line: detected.location.line,
            column: detected.location.column,
            rule: store.rule.clone(),
            context: store.context.as_str().to_string(),
            convention: store.convention.as_str().to_string(),
            value_type: detected.value.type_name().to_string(),
            value: value_to_json(&detected.value),
            keywords: detected.location.keywords.clone(),
        }
    }
}

fn value_to_json(value: &RawValue) -> serde_json::Value {
    match value {
        // Sizes are reported in bits regardless of the unit they were read in
        RawValue::KeySize(size)
        | RawValue::MacSize(size)
        | RawValue::SaltSize(size)
        | RawValue::TagSize(size)
        | RawValue::DigestSize(size)
        | RawValue::BlockSize(size) => serde_json::Value::Number(size.in_bits().into()),
        RawValue::IterationCount(n) => serde_json::Value::Number((*n).into()),
        other => serde_json::Value::String(other.to_string()),
    }
}
