//! Checklist items attached to a permit package

use serde::{Deserialize, Serialize};

/// A single document or task on a permit checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Record identifier
    pub id: String,

    /// Item description (e.g. "Notice of Commencement")
    pub text: String,

    /// Whether the item has been satisfied
    pub completed: bool,
}

/// Count completed items out of the total
pub fn progress(items: &[ChecklistItem]) -> (usize, usize) {
    let done = items.iter().filter(|item| item.completed).count();
    (done, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, completed: bool) -> ChecklistItem {
        ChecklistItem {
            id: id.to_string(),
            text: "Site Plan".to_string(),
            completed,
        }
    }

    #[test]
    fn test_progress() {
        let items = vec![item("chk_01", true), item("chk_02", false), item("chk_03", true)];
        assert_eq!(progress(&items), (2, 3));
    }

    #[test]
    fn test_progress_empty() {
        assert_eq!(progress(&[]), (0, 0));
    }
}
