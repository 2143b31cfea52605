// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign_domain::{PlanId, ProcedureId, UserId};

/// The difference between the current and desired assignee sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentDelta {
    /// Users to assign.
    pub to_add: BTreeSet<UserId>,
    /// Users to unassign.
    pub to_remove: BTreeSet<UserId>,
    /// Users already assigned that stay assigned.
    pub retained: BTreeSet<UserId>,
}

impl AssignmentDelta {
    /// Returns true when applying this delta changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Returns the assignee set after this delta is applied.
    #[must_use]
    pub fn resulting_set(&self) -> BTreeSet<UserId> {
        self.retained.union(&self.to_add).copied().collect()
    }
}

/// The outcome of applying an assignment command to a loaded plan.
///
/// Nothing here has been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentChange {
    /// The plan that owns the procedure.
    pub plan_id: PlanId,
    /// The procedure whose assignees change.
    pub procedure_id: ProcedureId,
    /// The full assignee set after the change.
    pub desired: BTreeSet<UserId>,
    /// The delta against the assignees observed at load time.
    pub delta: AssignmentDelta,
    /// Requested users that do not exist.
    pub unresolved: BTreeSet<UserId>,
}

impl AssignmentChange {
    /// Returns true when only some of the requested users were found.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.unresolved.is_empty()
    }
}
