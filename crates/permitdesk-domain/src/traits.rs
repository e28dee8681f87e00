//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

/// Trait for generative-text provider operations
///
/// Implemented by the infrastructure layer (permitdesk-llm). The population
/// flow is generic over this trait, so any provider that accepts structured
/// input plus instructions and returns schema-conformant structured output
/// is substitutable.
pub trait TextProvider {
    /// Error type for provider operations
    type Error;

    /// Generate a text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate output constrained to a JSON schema (where supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}
