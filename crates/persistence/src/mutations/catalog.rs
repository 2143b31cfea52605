// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plans, procedures, users and plan membership.
//!
//! Identifiers are assigned by `SQLite` and read back with
//! `last_insert_rowid()`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use plan_assign_domain::{PlanId, ProcedureId, UserId};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{plan_procedures, plans, procedures, users};
use crate::error::PersistenceError;

/// Creates an empty plan.
///
/// # Errors
///
/// Returns an error if the plan cannot be inserted.
pub fn create_plan(conn: &mut SqliteConnection) -> Result<PlanId, PersistenceError> {
    diesel::insert_into(plans::table)
        .default_values()
        .execute(conn)?;

    let plan_id: PlanId = PlanId::new(get_last_insert_rowid(conn)?)?;
    info!(plan_id = plan_id.value(), "Created plan");
    Ok(plan_id)
}

/// Adds a procedure to the catalog.
///
/// # Errors
///
/// Returns an error if the procedure cannot be inserted.
pub fn create_procedure(
    conn: &mut SqliteConnection,
    title: &str,
) -> Result<ProcedureId, PersistenceError> {
    diesel::insert_into(procedures::table)
        .values(procedures::title.eq(title))
        .execute(conn)?;

    let procedure_id: ProcedureId = ProcedureId::new(get_last_insert_rowid(conn)?)?;
    info!(procedure_id = procedure_id.value(), title, "Created procedure");
    Ok(procedure_id)
}

/// Creates a user.
///
/// # Errors
///
/// Returns an error if the user cannot be inserted.
pub fn create_user(conn: &mut SqliteConnection, name: &str) -> Result<UserId, PersistenceError> {
    diesel::insert_into(users::table)
        .values(users::name.eq(name))
        .execute(conn)?;

    let user_id: UserId = UserId::new(get_last_insert_rowid(conn)?)?;
    info!(user_id = user_id.value(), name, "Created user");
    Ok(user_id)
}

/// Attaches a catalog procedure to a plan.
///
/// # Errors
///
/// Returns an error if the plan or procedure does not exist, or the
/// procedure is already part of the plan.
pub fn add_procedure_to_plan(
    conn: &mut SqliteConnection,
    plan_id: PlanId,
    procedure_id: ProcedureId,
) -> Result<(), PersistenceError> {
    diesel::insert_into(plan_procedures::table)
        .values((
            plan_procedures::plan_id.eq(plan_id.value()),
            plan_procedures::procedure_id.eq(procedure_id.value()),
        ))
        .execute(conn)?;

    info!(
        plan_id = plan_id.value(),
        procedure_id = procedure_id.value(),
        "Added procedure to plan"
    );
    Ok(())
}
