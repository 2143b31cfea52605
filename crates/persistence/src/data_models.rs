// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use plan_assign_domain::{Procedure, ProcedureId, User, UserId};

use crate::diesel_schema::{procedures, users};
use crate::error::PersistenceError;

/// Row representation of a user.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: i64,
    pub name: String,
}

impl UserRow {
    /// Converts the row into a domain user.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored identifier is not a valid user id.
    pub fn into_domain(self) -> Result<User, PersistenceError> {
        let user_id: UserId = UserId::new(self.user_id)?;
        Ok(User {
            user_id,
            name: self.name,
        })
    }
}

/// Row representation of a catalog procedure.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = procedures)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProcedureRow {
    pub procedure_id: i64,
    pub title: String,
}

impl ProcedureRow {
    /// Converts the row into a domain procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored identifier is not a valid procedure id.
    pub fn into_domain(self) -> Result<Procedure, PersistenceError> {
        let procedure_id: ProcedureId = ProcedureId::new(self.procedure_id)?;
        Ok(Procedure {
            procedure_id,
            title: self.title,
        })
    }
}

