//! Customer and contractor records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address, split the way permit application forms split it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line
    pub street: String,

    /// City
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// ZIP code
    pub zip: String,
}

impl Address {
    /// Render the address as a single line, the form most PDF forms expect
    pub fn single_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.single_line())
    }
}

/// The property owner requesting the permit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Record identifier
    pub id: String,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Mailing address
    pub address: Address,
}

/// A licensed contractor attached to a permit package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    /// Record identifier
    pub id: String,

    /// Business name
    pub name: String,

    /// State license number (e.g. "CGC123456")
    pub license_number: String,

    /// Trade ("General Contractor", "Plumbing", ...)
    pub trade: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Fax number, still required on some county forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    /// Business address
    pub address: Address,
}
