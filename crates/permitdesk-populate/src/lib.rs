//! PermitDesk Population Flow
//!
//! Turns a permit package's record bundles into form-ready data using a
//! generative-text provider.
//!
//! # Overview
//!
//! The package detail view hands this crate four free-form records
//! (customer, contractor, property, permit) and a PDF template reference.
//! The flow validates the request, builds one structured prompt, makes one
//! provider call, and returns the provider's flat key-value map for form
//! filling. When configured it also echoes the template reference back as
//! the "populated" document; no PDF bytes are ever modified here.
//!
//! # Architecture
//!
//! ```text
//! Records + TemplateRef → validate → PromptBuilder → TextProvider → parse → PopulateResult
//! ```
//!
//! # Key Properties
//!
//! - **Validation before network**: malformed requests fail without any
//!   provider call
//! - **Single attempt**: one provider round trip, timeout-bound, no retries
//! - **All-or-nothing**: a result always carries extracted fields; an empty
//!   or unparsable provider response is a hard error
//!
//! # Example Usage
//!
//! ```no_run
//! use permitdesk_populate::{PdfPopulator, PopulateConfig, PopulateRequest};
//! use permitdesk_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"extractedData": {"permitId": "PKG-2024-001"}}"#);
//! let populator = PdfPopulator::new(provider, PopulateConfig::default());
//!
//! let request = PopulateRequest::from_json(&serde_json::json!({
//!     "customerData": {"name": "John Doe"},
//!     "contractorData": {"name": "BuildRight Inc."},
//!     "propertyData": {"address": "123 Main St"},
//!     "permitData": {"permitNumber": "PKG-2024-001"},
//!     "pdfTemplateDataUri": "data:application/pdf;base64,AAAA"
//! }))?;
//!
//! let result = populator.populate(request).await?;
//! println!("extracted {} fields", result.extracted.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod populator;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use config::PopulateConfig;
pub use error::PopulateError;
pub use populator::PdfPopulator;
pub use types::{PopulateMetadata, PopulateRequest, PopulateResult, RecordMap};
