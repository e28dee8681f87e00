//! Parse provider output into extracted form data

use crate::error::PopulateError;
use crate::types::RecordMap;
use serde_json::Value;
use tracing::warn;

/// Parse the provider's response into a flat extracted-data map
///
/// Accepts the flat object either bare or nested under `extractedData`.
/// Anything that does not parse down to at least one scalar field is a hard
/// `EmptyResponse` - an empty map never stands in for "no data".
pub fn parse_extracted(response: &str) -> Result<RecordMap, PopulateError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(PopulateError::EmptyResponse);
    }

    let json_str = strip_fences(trimmed);

    let json: Value = serde_json::from_str(&json_str).map_err(|e| {
        warn!("provider output is not JSON: {}", e);
        PopulateError::EmptyResponse
    })?;

    let obj = json.as_object().ok_or_else(|| {
        warn!("provider output is not a JSON object");
        PopulateError::EmptyResponse
    })?;

    // Unwrap the schema's "extractedData" envelope when present
    let fields = match obj.get("extractedData") {
        Some(Value::Object(nested)) => nested,
        _ => obj,
    };

    let mut extracted = RecordMap::new();
    for (key, value) in fields {
        match value {
            Value::Null => {
                warn!("dropping null value for '{}'", key);
            }
            Value::Object(_) | Value::Array(_) => {
                warn!("dropping non-scalar value for '{}'", key);
            }
            scalar => {
                extracted.insert(key.clone(), scalar.clone());
            }
        }
    }

    if extracted.is_empty() {
        return Err(PopulateError::EmptyResponse);
    }

    Ok(extracted)
}

/// Strip a markdown code fence if the provider wrapped its JSON in one
fn strip_fences(response: &str) -> String {
    if response.starts_with("```") {
        let lines: Vec<&str> = response.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }
        // Skip the opening ```json (or ```) line and the closing ``` line
        lines[1..lines.len().saturating_sub(1)].join("\n")
    } else {
        response.to_string()
    }
}
