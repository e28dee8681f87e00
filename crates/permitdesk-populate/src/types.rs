//! Request and response types for the population flow

use crate::error::PopulateError;
use permitdesk_domain::TemplateRef;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A free-form record: string keys to arbitrary JSON values
pub type RecordMap = Map<String, Value>;

/// Request to extract form data for one permit package
///
/// Carries the four record bundles the detail view assembles plus the
/// template reference, still as the raw data-URI string; `validate` parses
/// it. Requests are transient - they live for one `populate` call and are
/// never stored.
#[derive(Debug, Clone)]
pub struct PopulateRequest {
    /// Customer record
    pub customer: RecordMap,

    /// Primary contractor record
    pub contractor: RecordMap,

    /// Property record
    pub property: RecordMap,

    /// Permit record (permit number, county, status)
    pub permit: RecordMap,

    /// The PDF template as a `data:<mime>;base64,<payload>` string
    pub template: String,
}

impl PopulateRequest {
    /// Assemble a request from already-typed parts
    pub fn new(
        customer: RecordMap,
        contractor: RecordMap,
        property: RecordMap,
        permit: RecordMap,
        template: impl Into<String>,
    ) -> Self {
        Self {
            customer,
            contractor,
            property,
            permit,
            template: template.into(),
        }
    }

    /// Parse a request from its JSON wire form
    ///
    /// The wire form uses the field names the detail view sends:
    /// `customerData`, `contractorData`, `propertyData`, `permitData`, and
    /// `pdfTemplateDataUri`. All four record maps are required (they may be
    /// empty objects); a missing or non-object map fails here, before any
    /// provider call.
    pub fn from_json(value: &Value) -> Result<Self, PopulateError> {
        let obj = value.as_object().ok_or_else(|| {
            PopulateError::Validation("request must be a JSON object".to_string())
        })?;

        let customer = require_record(obj, "customerData")?;
        let contractor = require_record(obj, "contractorData")?;
        let property = require_record(obj, "propertyData")?;
        let permit = require_record(obj, "permitData")?;

        let template = match obj.get("pdfTemplateDataUri") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(PopulateError::Validation(
                    "field 'pdfTemplateDataUri' must be a string".to_string(),
                ))
            }
            None => {
                return Err(PopulateError::Validation(
                    "missing required field 'pdfTemplateDataUri'".to_string(),
                ))
            }
        };

        Ok(Self {
            customer,
            contractor,
            property,
            permit,
            template,
        })
    }

    /// Check the template reference invariant and parse it
    pub fn validate(&self) -> Result<TemplateRef, PopulateError> {
        TemplateRef::parse(&self.template)
            .map_err(|e| PopulateError::Validation(format!("invalid pdfTemplateDataUri: {}", e)))
    }
}

fn require_record(obj: &Map<String, Value>, field: &str) -> Result<RecordMap, PopulateError> {
    match obj.get(field) {
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(PopulateError::Validation(format!(
            "field '{}' must be a JSON object",
            field
        ))),
        None => Err(PopulateError::Validation(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

/// Result of one population call
#[derive(Debug, Clone, Serialize)]
pub struct PopulateResult {
    /// Flat key-value data ready for form filling, exactly as the provider
    /// returned it
    #[serde(rename = "extractedData")]
    pub extracted: RecordMap,

    /// The input template reference, echoed unchanged when configured
    ///
    /// No field filling has been performed on it.
    #[serde(rename = "populatedPdfDataUri", skip_serializing_if = "Option::is_none")]
    pub populated_template: Option<TemplateRef>,

    /// Information about the provider run
    pub metadata: PopulateMetadata,
}

/// Metadata about a population call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateMetadata {
    /// Correlation id for this invocation
    pub request_id: Uuid,

    /// Name of the model used
    pub model_name: String,

    /// Number of fields in the extracted map
    pub fields_extracted: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}
