//! Command implementations.

use crate::cli::{PopulateArgs, ValidateArgs};
use crate::error::{CliError, Result};
use crate::templates;
use permitdesk_domain::checklist::progress;
use permitdesk_domain::{to_record, PermitPackage};
use permitdesk_llm::{GeminiProvider, MockProvider};
use permitdesk_populate::{PdfPopulator, PopulateConfig, PopulateRequest, PopulateResult};
use serde_json::Value;
use std::fs;
use std::time::Duration;
use tracing::{info, warn};

/// Canned provider response for `--offline` smoke runs.
const OFFLINE_RESPONSE: &str = r#"{"extractedData": {
    "customerName": "John Doe",
    "contractorName": "BuildRight Inc.",
    "contractorLicenseNumber": "CGC123456",
    "propertyAddress": "123 Main St, Miami, FL 33101",
    "permitId": "PKG-2024-001",
    "county": "Miami-Dade"
}}"#;

/// Execute the populate command.
pub async fn execute_populate(args: PopulateArgs) -> Result<()> {
    let request = load_request(&args)?;

    let mut config = PopulateConfig::default();
    config.request_timeout_secs = args.timeout_secs;
    config.echo_template = !args.no_echo;
    config.validate().map_err(CliError::InvalidInput)?;

    let result = if args.offline {
        let provider = MockProvider::new(OFFLINE_RESPONSE);
        let populator = PdfPopulator::new(provider, config).with_model_name("offline-mock");
        populator.populate(request).await?
    } else {
        let api_key = std::env::var(&args.api_key_env)
            .map_err(|_| CliError::MissingApiKey(args.api_key_env.clone()))?;
        let provider = GeminiProvider::with_timeout(
            args.endpoint.as_str(),
            args.model.as_str(),
            api_key,
            Duration::from_secs(args.timeout_secs),
        );
        let populator = PdfPopulator::new(provider, config).with_model_name(args.model.as_str());
        populator.populate(request).await?
    };

    print_result(&result, args.json)
}

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.request)?;
    let value: Value = serde_json::from_str(&raw)?;

    let request = PopulateRequest::from_json(&value)?;
    let template = request.validate()?;

    println!(
        "ok: request is valid ({}, {} bytes decoded)",
        template.mime(),
        template.decoded_len()
    );
    Ok(())
}

/// Execute the templates command.
pub fn execute_templates() -> Result<()> {
    println!("{:<10} {:<40} {:>8}  DESCRIPTION", "ID", "NAME", "BYTES");
    for template in templates::builtin() {
        let reference = template.template_ref().map_err(CliError::InvalidInput)?;
        println!(
            "{:<10} {:<40} {:>8}  {}",
            template.id,
            template.name,
            reference.decoded_len(),
            template.description
        );
    }
    Ok(())
}

/// Assemble a request from either a wire-form request file or a permit
/// package file plus a library template.
fn load_request(args: &PopulateArgs) -> Result<PopulateRequest> {
    if let Some(path) = &args.request {
        let raw = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)?;
        return Ok(PopulateRequest::from_json(&value)?);
    }

    let (Some(path), Some(template_id)) = (&args.package, &args.template_id) else {
        return Err(CliError::InvalidInput(
            "must pass either --request, or --package with --template-id".to_string(),
        ));
    };

    let raw = fs::read_to_string(path)?;
    let package: PermitPackage = serde_json::from_str(&raw)?;

    let template = templates::find(template_id).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown template '{}'; run 'permitdesk templates'",
            template_id
        ))
    })?;

    let (standard_done, standard_total) = progress(&package.standard_checklist);
    let (county_done, county_total) = progress(&package.county_checklist);
    info!(
        "package {} ({}): checklist {}/{} complete",
        package.id,
        package.status,
        standard_done + county_done,
        standard_total + county_total
    );
    if package.status.is_terminal() {
        warn!(
            "package {} is already {}; generating forms anyway",
            package.id, package.status
        );
    }

    let customer = to_record(&package.customer).map_err(CliError::InvalidInput)?;
    let contractor = to_record(&package.contractor).map_err(CliError::InvalidInput)?;
    let property = to_record(&package.property).map_err(CliError::InvalidInput)?;
    let permit = package.permit_record();

    Ok(PopulateRequest::new(
        customer,
        contractor,
        property,
        permit,
        template.data_uri,
    ))
}

fn print_result(result: &PopulateResult, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!(
        "Extracted {} fields with {} in {}ms:",
        result.metadata.fields_extracted,
        result.metadata.model_name,
        result.metadata.processing_time_ms
    );
    for (key, value) in &result.extracted {
        println!("  {:<28} {}", key, value);
    }
    if let Some(template) = &result.populated_template {
        println!(
            "Populated document: {} ({} bytes, unmodified template)",
            template.mime(),
            template.decoded_len()
        );
    }
    Ok(())
}
