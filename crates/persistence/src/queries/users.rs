// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use diesel::SqliteConnection;
use diesel::prelude::*;
use plan_assign_domain::{User, UserId};
use tracing::debug;

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Loads every user whose identifier is in `user_ids`, ordered by id.
///
/// Identifiers without a matching row are skipped silently.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn find_users_by_ids(
    conn: &mut SqliteConnection,
    user_ids: &BTreeSet<UserId>,
) -> Result<Vec<User>, PersistenceError> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let raw_ids: Vec<i64> = user_ids.iter().map(UserId::value).collect();
    let rows: Vec<UserRow> = users::table
        .filter(users::user_id.eq_any(&raw_ids))
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?;

    debug!(
        requested = raw_ids.len(),
        found = rows.len(),
        "Resolved users by id"
    );

    rows.into_iter().map(UserRow::into_domain).collect()
}
