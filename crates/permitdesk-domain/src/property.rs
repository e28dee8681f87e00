//! Property records

use crate::party::Address;
use serde::{Deserialize, Serialize};

/// The parcel a permit package applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Record identifier
    pub id: String,

    /// County parcel identifier (e.g. "01-2345-000-0000")
    pub parcel_id: String,

    /// Site address
    pub address: Address,

    /// Unit number for multi-unit properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Building designation for multi-building properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}
