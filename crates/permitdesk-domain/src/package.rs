//! Permit package - the central record of the system

use crate::checklist::ChecklistItem;
use crate::party::{Contractor, Customer};
use crate::property::Property;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a permit package, in the office's `PKG-<year>-<seq>` format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Format a new identifier from a year and a sequence number
    ///
    /// # Examples
    ///
    /// ```
    /// use permitdesk_domain::PackageId;
    ///
    /// let id = PackageId::new(2024, 1);
    /// assert_eq!(id.as_str(), "PKG-2024-001");
    /// ```
    pub fn new(year: u16, seq: u32) -> Self {
        Self(format!("PKG-{}-{:03}", year, seq))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bundled construction permit request
///
/// Groups the customer, the contractors doing the work, the property, the
/// document checklists, and the application details tracked for the county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitPackage {
    /// Package identifier
    pub id: PackageId,

    /// Display name (e.g. "Doe Residence - New Build")
    pub package_name: String,

    /// Current workflow status
    pub status: Status,

    /// County the package will be filed in
    pub county: String,

    /// The property owner
    pub customer: Customer,

    /// The primary contractor
    pub contractor: Contractor,

    /// Subcontractors for individual trades
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcontractors: Vec<Contractor>,

    /// The parcel the work applies to
    pub property: Property,

    /// Checklist applied to every package
    #[serde(default)]
    pub standard_checklist: Vec<ChecklistItem>,

    /// County-specific checklist
    #[serde(default)]
    pub county_checklist: Vec<ChecklistItem>,

    /// Creation timestamp, RFC 3339
    pub created_at: String,

    /// Scope of work as written on the application
    pub description_of_work: String,

    /// Building use classification (e.g. "Single Family Residential")
    pub building_use: String,

    /// Estimated construction cost in dollars
    pub construction_cost: f64,

    /// Air-conditioning tonnage, for mechanical permits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_tons: Option<f64>,

    /// Heat strip rating in kilowatts, for mechanical permits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_kw: Option<f64>,

    /// Septic permit number or sewer company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub septic_permit_or_sewer_company: Option<String>,

    /// Electrical service size in amps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrical_service_amps: Option<u32>,

    /// Water service source (well, municipal, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_service_source: Option<String>,
}

impl PermitPackage {
    /// The permit record the population flow embeds in its prompt
    ///
    /// This is the projection the package detail view sends alongside the
    /// full customer, contractor, and property records.
    pub fn permit_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            "permitNumber".to_string(),
            Value::String(self.id.as_str().to_string()),
        );
        record.insert("county".to_string(), Value::String(self.county.clone()));
        record.insert(
            "status".to_string(),
            Value::String(self.status.to_string()),
        );
        record
    }
}

/// Project any serializable entity into a free-form record map
///
/// The population flow consumes entities in this form. Fails if the value
/// does not serialize to a JSON object.
pub fn to_record<T: Serialize>(value: &T) -> Result<Map<String, Value>, String> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        )),
        Err(e) => Err(format!("serialization failed: {}", e)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
