//! Prompt engineering for form-data extraction

use crate::types::PopulateRequest;
use permitdesk_domain::TemplateRef;
use serde_json::Value;

/// JSON schema the provider's structured output is constrained to
///
/// The extracted fields arrive nested under `extractedData` as a flat
/// object of scalars.
pub const OUTPUT_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "extractedData": {
      "type": "object",
      "additionalProperties": { "type": ["string", "number", "boolean"] }
    }
  },
  "required": ["extractedData"]
}"#;

/// Builds the extraction prompt for one request
pub struct PromptBuilder<'a> {
    request: &'a PopulateRequest,
    template: &'a TemplateRef,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder over a validated request
    pub fn new(request: &'a PopulateRequest, template: &'a TemplateRef) -> Self {
        Self { request, template }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and task
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\nAnalyze the following data:\n");

        // 2. The four record bundles, serialized as JSON
        push_section(&mut prompt, "Customer Data", &self.request.customer);
        push_section(&mut prompt, "Contractor Data", &self.request.contractor);
        push_section(&mut prompt, "Property Data", &self.request.property);
        push_section(&mut prompt, "Permit Data", &self.request.permit);

        // 3. Template context (the binary itself is not sent)
        prompt.push_str(&format!(
            "\nTarget form: {} document, {} bytes decoded.\n\n",
            self.template.mime(),
            self.template.decoded_len()
        ));

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

fn push_section(prompt: &mut String, label: &str, record: &serde_json::Map<String, Value>) {
    prompt.push_str(&format!(
        "- {}: {}\n",
        label,
        Value::Object(record.clone())
    ));
}

const EXTRACTION_INSTRUCTIONS: &str = "You are an expert data processor for a construction \
permit company. Your task is to extract and structure data from the provided JSON records to \
prepare it for filling a PDF form.";

const OUTPUT_FORMAT_REMINDER: &str = r#"Extract the key information and structure it into a single flat key-value JSON object under an "extractedData" key. Use clear and simple keys, for example: "customerName", "contractorLicenseNumber", "propertyAddress", "permitId". Combine address parts into a single string. Do not use nested objects or arrays as values.

Return ONLY the JSON object - no markdown code blocks, no explanations."#;
