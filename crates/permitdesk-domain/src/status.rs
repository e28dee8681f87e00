//! Status module - the workflow state of a permit package

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a permit package
///
/// Packages start in `Draft`, move through `InProgress` while documents are
/// collected, are `Submitted` to the county, and end `Approved` or
/// `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Package is being assembled and has not been worked on yet
    Draft,

    /// Documents and checklist items are being collected
    #[serde(rename = "In Progress")]
    InProgress,

    /// Package has been submitted to the county
    Submitted,

    /// County approved the permit
    Approved,

    /// County rejected the permit
    Rejected,
}

impl Status {
    /// Whether this status is an end state of the workflow
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Approved | Status::Rejected)
    }

    /// The human-readable label, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::InProgress => "In Progress",
            Status::Submitted => "Submitted",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Draft
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Status::InProgress.to_string(), "In Progress");
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In Progress\""
        );
    }

    #[test]
    fn test_deserialize_from_label() {
        let status: Status = serde_json::from_str("\"Submitted\"").unwrap();
        assert_eq!(status, Status::Submitted);
    }

    #[test]
    fn test_terminal_states() {
        assert!(Status::Approved.is_terminal());
        assert!(Status::Rejected.is_terminal());
        assert!(!Status::Draft.is_terminal());
        assert!(!Status::InProgress.is_terminal());
        assert!(!Status::Submitted.is_terminal());
    }
}
