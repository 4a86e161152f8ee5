//! Helpers the registration UI uses on top of a conflict list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::conflict::{ConflictKind, ConflictResult};

/// Registration IDs of every classroom involved in at least one conflict.
pub fn conflicting_reg_ids(conflicts: &[ConflictResult]) -> BTreeSet<String> {
    conflicts
        .iter()
        .flat_map(|c| {
            let (a, b) = c.reg_ids();
            [a.to_string(), b.to_string()]
        })
        .collect()
}

/// Registration can only be completed with a conflict-free selection.
pub fn can_complete_registration(conflicts: &[ConflictResult]) -> bool {
    conflicts.is_empty()
}

/// Conflicts that involve the classroom `reg_id`, on either side.
pub fn conflicts_for<'a>(reg_id: &str, conflicts: &'a [ConflictResult]) -> Vec<&'a ConflictResult> {
    conflicts.iter().filter(|c| c.involves(reg_id)).collect()
}

/// Per-kind counts of a conflict list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictSummary {
    pub total: usize,
    pub regular_regular: usize,
    pub makeup_regular: usize,
    pub makeup_makeup: usize,
    pub conflicting_reg_ids: BTreeSet<String>,
}

impl ConflictSummary {
    pub fn from_conflicts(conflicts: &[ConflictResult]) -> Self {
        let count = |kind: ConflictKind| conflicts.iter().filter(|c| c.kind() == kind).count();
        Self {
            total: conflicts.len(),
            regular_regular: count(ConflictKind::RegularRegular),
            makeup_regular: count(ConflictKind::MakeupRegular),
            makeup_makeup: count(ConflictKind::MakeupMakeup),
            conflicting_reg_ids: conflicting_reg_ids(conflicts),
        }
    }

    pub fn can_complete_registration(&self) -> bool {
        self.total == 0
    }
}
