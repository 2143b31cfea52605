// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment replacement.

use std::collections::BTreeSet;

use diesel::SqliteConnection;
use diesel::prelude::*;
use plan_assign::{AssignmentChange, AssignmentDelta, reconcile};
use plan_assign_domain::{UserAssignment, UserId};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::diesel_schema::plan_procedure_users;
use crate::error::PersistenceError;
use crate::queries::current_assignees;

/// Replaces the assignees of a plan procedure in one immediate transaction.
///
/// The current assignees are re-read inside the transaction and reconciled
/// against `change.desired`, so the committed set is exactly the desired set
/// even if another writer changed it after the plan was loaded. Retained
/// rows are left untouched.
///
/// `cancel` is checked after the removals and again after the insertions.
/// A cancelled call rolls the whole transaction back.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `change` - The change produced by `apply_assignment`
/// * `cancel` - Cancellation signal for the surrounding request
///
/// # Returns
///
/// The delta that was committed.
///
/// # Errors
///
/// Returns an error if:
/// - `cancel` fired before commit (`PersistenceError::Cancelled`)
/// - A row violates a constraint (unknown user or plan procedure)
/// - The database cannot be written
pub fn commit_assignment_replacement(
    conn: &mut SqliteConnection,
    change: &AssignmentChange,
    cancel: &CancellationToken,
) -> Result<AssignmentDelta, PersistenceError> {
    let plan_id: i64 = change.plan_id.value();
    let procedure_id: i64 = change.procedure_id.value();

    let delta: AssignmentDelta = conn.immediate_transaction(|conn| {
        let current: BTreeSet<UserId> =
            current_assignees(conn, change.plan_id, change.procedure_id)?;
        let delta: AssignmentDelta = reconcile(&current, &change.desired);

        if delta != change.delta {
            debug!(plan_id, procedure_id, "Assignees changed since load, using fresh delta");
        }

        if !delta.to_remove.is_empty() {
            let removed: Vec<i64> = delta.to_remove.iter().map(UserId::value).collect();
            let deleted: usize = diesel::delete(
                plan_procedure_users::table
                    .filter(plan_procedure_users::plan_id.eq(plan_id))
                    .filter(plan_procedure_users::procedure_id.eq(procedure_id))
                    .filter(plan_procedure_users::user_id.eq_any(&removed)),
            )
            .execute(conn)?;
            debug!(plan_id, procedure_id, deleted, "Removed assignments");
        }

        if cancel.is_cancelled() {
            return Err(PersistenceError::Cancelled);
        }

        let additions: Vec<UserAssignment> = delta
            .to_add
            .iter()
            .map(|user_id| UserAssignment::new(change.plan_id, change.procedure_id, *user_id))
            .collect();
        for assignment in &additions {
            diesel::insert_into(plan_procedure_users::table)
                .values((
                    plan_procedure_users::plan_id.eq(assignment.plan_id.value()),
                    plan_procedure_users::procedure_id.eq(assignment.procedure_id.value()),
                    plan_procedure_users::user_id.eq(assignment.user_id.value()),
                ))
                .execute(conn)?;
        }

        if cancel.is_cancelled() {
            return Err(PersistenceError::Cancelled);
        }

        Ok(delta)
    })?;

    info!(
        plan_id,
        procedure_id,
        added = delta.to_add.len(),
        removed = delta.to_remove.len(),
        retained = delta.retained.len(),
        "Committed assignment replacement"
    );

    Ok(delta)
}
