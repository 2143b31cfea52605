// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plan aggregate queries.

use std::collections::BTreeSet;

use diesel::SqliteConnection;
use diesel::prelude::*;
use plan_assign_domain::{Plan, PlanId, PlanProcedure, ProcedureId, User, UserId};
use tracing::debug;

use crate::data_models::UserRow;
use crate::diesel_schema::{plan_procedure_users, plan_procedures, plans, users};
use crate::error::PersistenceError;

/// Checks whether a plan exists.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn plan_exists(conn: &mut SqliteConnection, plan_id: PlanId) -> Result<bool, PersistenceError> {
    let found: Option<i64> = plans::table
        .filter(plans::plan_id.eq(plan_id.value()))
        .select(plans::plan_id)
        .first::<i64>(conn)
        .optional()?;
    Ok(found.is_some())
}

/// Loads a plan with its procedures and each procedure's assignees.
///
/// The plan row, its procedures and every assignment row for the plan are
/// read inside one transaction, so the aggregate is a consistent snapshot.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `plan_id` - The plan to load
///
/// # Returns
///
/// * `Ok(None)` if no plan has this identifier
/// * `Ok(Some(Plan))` with procedures ordered by procedure id
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// identifier is invalid.
pub fn find_plan_with_procedures_and_assignments(
    conn: &mut SqliteConnection,
    plan_id: PlanId,
) -> Result<Option<Plan>, PersistenceError> {
    conn.transaction(|conn| load_plan_aggregate(conn, plan_id))
}

fn load_plan_aggregate(
    conn: &mut SqliteConnection,
    plan_id: PlanId,
) -> Result<Option<Plan>, PersistenceError> {
    if !plan_exists(conn, plan_id)? {
        debug!(plan_id = plan_id.value(), "Plan not found");
        return Ok(None);
    }

    let procedure_ids: Vec<i64> = plan_procedures::table
        .filter(plan_procedures::plan_id.eq(plan_id.value()))
        .order(plan_procedures::procedure_id.asc())
        .select(plan_procedures::procedure_id)
        .load::<i64>(conn)?;

    let assignment_rows: Vec<(i64, i64)> = plan_procedure_users::table
        .filter(plan_procedure_users::plan_id.eq(plan_id.value()))
        .select((
            plan_procedure_users::procedure_id,
            plan_procedure_users::user_id,
        ))
        .load::<(i64, i64)>(conn)?;

    let mut plan: Plan = Plan::new(plan_id);
    for procedure_id in procedure_ids {
        plan.procedures
            .push(PlanProcedure::new(plan_id, ProcedureId::new(procedure_id)?));
    }

    for (procedure_id, user_id) in assignment_rows {
        let procedure_id: ProcedureId = ProcedureId::new(procedure_id)?;
        let user_id: UserId = UserId::new(user_id)?;
        // The composite foreign key guarantees the owning procedure was loaded above.
        if let Some(plan_procedure) = plan
            .procedures
            .iter_mut()
            .find(|p| p.procedure_id == procedure_id)
        {
            plan_procedure.assigned_user_ids.insert(user_id);
        }
    }

    debug!(
        plan_id = plan_id.value(),
        procedures = plan.procedures.len(),
        "Loaded plan aggregate"
    );

    Ok(Some(plan))
}

/// Returns the users currently assigned to a plan procedure.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn current_assignees(
    conn: &mut SqliteConnection,
    plan_id: PlanId,
    procedure_id: ProcedureId,
) -> Result<BTreeSet<UserId>, PersistenceError> {
    let rows: Vec<i64> = plan_procedure_users::table
        .filter(plan_procedure_users::plan_id.eq(plan_id.value()))
        .filter(plan_procedure_users::procedure_id.eq(procedure_id.value()))
        .select(plan_procedure_users::user_id)
        .load::<i64>(conn)?;

    let mut assignees: BTreeSet<UserId> = BTreeSet::new();
    for user_id in rows {
        assignees.insert(UserId::new(user_id)?);
    }
    Ok(assignees)
}

/// Lists the users assigned to a plan procedure, ordered by user id.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_plan_procedure_users(
    conn: &mut SqliteConnection,
    plan_id: PlanId,
    procedure_id: ProcedureId,
) -> Result<Vec<User>, PersistenceError> {
    let rows: Vec<UserRow> = plan_procedure_users::table
        .inner_join(users::table)
        .filter(plan_procedure_users::plan_id.eq(plan_id.value()))
        .filter(plan_procedure_users::procedure_id.eq(procedure_id.value()))
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?;

    rows.into_iter().map(UserRow::into_domain).collect()
}
