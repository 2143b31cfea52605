// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign_domain::{DomainError, Plan, PlanProcedure, User, UserId};

use crate::command::AssignmentCommand;
use crate::error::CoreError;
use crate::reconcile::reconcile;
use crate::state::{AssignmentChange, AssignmentDelta};

/// Applies an assignment command to a loaded plan aggregate.
///
/// The resulting assignee set is exactly the resolved users, regardless of
/// who was assigned before. Requested users that were not resolved are
/// reported in `AssignmentChange::unresolved` but do not fail the command
/// as long as at least one user resolved.
///
/// # Arguments
///
/// * `plan` - The plan with its procedures and current assignees
/// * `command` - The validated command
/// * `resolved_users` - Users returned by the lookup of `command.user_ids`
///
/// # Returns
///
/// * `Ok(AssignmentChange)` describing the replacement
/// * `Err(CoreError)` if the command cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - The loaded plan is not the plan named by the command
/// - The procedure is not part of the plan
/// - None of the requested users resolved
pub fn apply_assignment(
    plan: &Plan,
    command: &AssignmentCommand,
    resolved_users: &[User],
) -> Result<AssignmentChange, CoreError> {
    if plan.plan_id != command.plan_id {
        return Err(CoreError::Internal(format!(
            "loaded plan {} does not match requested plan {}",
            plan.plan_id, command.plan_id
        )));
    }

    let plan_procedure: &PlanProcedure = plan
        .find_procedure(command.procedure_id)
        .ok_or(DomainError::ProcedureNotFound {
            plan_id: command.plan_id.value(),
            procedure_id: command.procedure_id.value(),
        })?;

    // Lookups may return rows outside the requested set; only requested ids count.
    let desired: BTreeSet<UserId> = resolved_users
        .iter()
        .map(|user| user.user_id)
        .filter(|user_id| command.user_ids.contains(user_id))
        .collect();

    if desired.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::UsersNotFound(
            command.requested_user_ids.clone(),
        )));
    }

    let delta: AssignmentDelta = reconcile(&plan_procedure.assigned_user_ids, &desired);
    let unresolved: BTreeSet<UserId> = command.user_ids.difference(&desired).copied().collect();

    Ok(AssignmentChange {
        plan_id: command.plan_id,
        procedure_id: command.procedure_id,
        desired,
        delta,
        unresolved,
    })
}
