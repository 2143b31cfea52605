// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data loading.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::error::PersistenceError;
use crate::mutations::catalog::{create_procedure, create_user};
use crate::queries::{count_procedures, count_users};

/// Procedure titles loaded into an empty catalog.
pub const REFERENCE_PROCEDURES: [&str; 6] = [
    "Initial Assessment",
    "Blood Panel",
    "Chest X-Ray",
    "Physical Therapy Evaluation",
    "Medication Review",
    "Discharge Planning",
];

/// User names loaded into an empty user table.
pub const REFERENCE_USERS: [&str; 4] = [
    "Nick Morrison",
    "Scott Cooper",
    "Tony Bidner",
    "Patryk Skwarko",
];

/// Rows inserted by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    /// Procedures inserted.
    pub procedures: usize,
    /// Users inserted.
    pub users: usize,
}

/// Loads reference procedures and users into empty tables.
///
/// Each table is seeded only when it has no rows, so running this against
/// an existing database is a no-op.
///
/// # Errors
///
/// Returns an error if the tables cannot be read or written. Nothing is
/// inserted on failure.
pub fn seed_reference_data(conn: &mut SqliteConnection) -> Result<SeedSummary, PersistenceError> {
    let summary: SeedSummary = conn.transaction(|conn| {
        let mut summary: SeedSummary = SeedSummary::default();

        if count_procedures(conn)? == 0 {
            for title in REFERENCE_PROCEDURES {
                create_procedure(conn, title)?;
                summary.procedures += 1;
            }
        }

        if count_users(conn)? == 0 {
            for name in REFERENCE_USERS {
                create_user(conn, name)?;
                summary.users += 1;
            }
        }

        Ok::<SeedSummary, PersistenceError>(summary)
    })?;

    info!(
        procedures = summary.procedures,
        users = summary.users,
        "Seeded reference data"
    );
    Ok(summary)
}
