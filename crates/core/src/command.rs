// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign_domain::{
    DomainError, PlanId, ProcedureId, UserId, validate_plan_id, validate_procedure_id,
    validate_user_ids,
};

/// A validated request to replace the assignees of a plan procedure.
///
/// Commands represent caller intent as data only. Constructing one performs
/// every input check that needs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCommand {
    /// The plan that owns the procedure.
    pub plan_id: PlanId,
    /// The procedure whose assignees are replaced.
    pub procedure_id: ProcedureId,
    /// Distinct, positive user identifiers to look up.
    pub user_ids: BTreeSet<UserId>,
    /// The identifiers exactly as the caller sent them.
    pub requested_user_ids: Vec<i64>,
}

impl AssignmentCommand {
    /// Builds a command from raw request values.
    ///
    /// Checks run in a fixed order: plan, then procedure, then users. The
    /// first failing check is reported.
    ///
    /// # Arguments
    ///
    /// * `plan_id` - Raw plan identifier
    /// * `procedure_id` - Raw procedure identifier
    /// * `user_ids` - Raw user identifiers, if supplied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `plan_id` is less than 1
    /// - `procedure_id` is less than 1
    /// - `user_ids` is absent or empty
    pub fn new(
        plan_id: i64,
        procedure_id: i64,
        user_ids: Option<&[i64]>,
    ) -> Result<Self, DomainError> {
        let plan_id: PlanId = validate_plan_id(plan_id)?;
        let procedure_id: ProcedureId = validate_procedure_id(procedure_id)?;
        let distinct_user_ids: BTreeSet<UserId> = validate_user_ids(user_ids)?;

        Ok(Self {
            plan_id,
            procedure_id,
            user_ids: distinct_user_ids,
            requested_user_ids: user_ids.map(<[i64]>::to_vec).unwrap_or_default(),
        })
    }
}
