//! Daily-wins journal note model.

use serde::{Deserialize, Serialize};

/// One day's journal entry. Both fields default to empty so a partially
/// filled server record still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNote {
    #[serde(default)]
    pub wins: String,
    #[serde(default)]
    pub learnings: String,
}

impl DailyNote {
    pub fn is_empty(&self) -> bool {
        self.wins.trim().is_empty() && self.learnings.trim().is_empty()
    }
}
