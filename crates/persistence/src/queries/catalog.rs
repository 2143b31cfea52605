// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Procedure catalog queries and row counts.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use plan_assign_domain::{Procedure, ProcedureId};

use crate::data_models::ProcedureRow;
use crate::diesel_schema::{procedures, users};
use crate::error::PersistenceError;

/// Checks whether a procedure exists in the catalog.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn procedure_exists(
    conn: &mut SqliteConnection,
    procedure_id: ProcedureId,
) -> Result<bool, PersistenceError> {
    let found: Option<i64> = procedures::table
        .filter(procedures::procedure_id.eq(procedure_id.value()))
        .select(procedures::procedure_id)
        .first::<i64>(conn)
        .optional()?;
    Ok(found.is_some())
}

/// Lists the procedure catalog ordered by id.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_procedures(conn: &mut SqliteConnection) -> Result<Vec<Procedure>, PersistenceError> {
    let rows: Vec<ProcedureRow> = procedures::table
        .order(procedures::procedure_id.asc())
        .select(ProcedureRow::as_select())
        .load::<ProcedureRow>(conn)?;

    rows.into_iter().map(ProcedureRow::into_domain).collect()
}

/// Counts catalog procedures.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count conversion fails.
pub fn count_procedures(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = procedures::table.count().get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts users.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count conversion fails.
pub fn count_users(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = users::table.count().get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}
