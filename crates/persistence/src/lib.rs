// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for plan procedure assignments.
//!
//! This crate stores plans, the procedure catalog, users, plan membership
//! and user assignments. It is built on Diesel with the `SQLite` backend.
//!
//! ## Storage
//!
//! - In-memory databases use a shared cache with a unique name per instance,
//!   so tests never observe each other's rows.
//! - File databases run in WAL mode.
//! - Foreign key enforcement is switched on and verified at startup.
//!
//! ## Atomicity
//!
//! Assignment replacement runs inside one `BEGIN IMMEDIATE` transaction.
//! Either every added and removed row is committed or none is.
//!
//! ## Testing Philosophy
//!
//! - Tests run against in-memory `SQLite`
//! - Constraint and rollback behavior is exercised against the real schema

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use plan_assign::{AssignmentChange, AssignmentDelta};
use plan_assign_domain::{Plan, PlanId, Procedure, ProcedureId, User, UserId};
use tokio_util::sync::CancellationToken;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::SeedSummary;
pub use mutations::seed::{REFERENCE_PROCEDURES, REFERENCE_USERS};

/// Persistence adapter over a single `SQLite` connection.
///
/// The connection is owned exclusively; callers that share an adapter across
/// tasks wrap it in a mutex.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_plan_assign_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection =
            backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Plans & Catalog
    // ========================================================================

    /// Creates an empty plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan cannot be inserted.
    pub fn create_plan(&mut self) -> Result<PlanId, PersistenceError> {
        mutations::create_plan(&mut self.conn)
    }

    /// Adds a procedure to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the procedure cannot be inserted.
    pub fn create_procedure(&mut self, title: &str) -> Result<ProcedureId, PersistenceError> {
        mutations::create_procedure(&mut self.conn, title)
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user cannot be inserted.
    pub fn create_user(&mut self, name: &str) -> Result<UserId, PersistenceError> {
        mutations::create_user(&mut self.conn, name)
    }

    /// Attaches a catalog procedure to a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if either side does not exist or the pair already exists.
    pub fn add_procedure_to_plan(
        &mut self,
        plan_id: PlanId,
        procedure_id: ProcedureId,
    ) -> Result<(), PersistenceError> {
        mutations::add_procedure_to_plan(&mut self.conn, plan_id, procedure_id)
    }

    /// Loads reference procedures and users into empty tables.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding fails. Nothing is inserted on failure.
    pub fn seed_reference_data(&mut self) -> Result<SeedSummary, PersistenceError> {
        mutations::seed_reference_data(&mut self.conn)
    }

    /// Checks whether a procedure exists in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn procedure_exists(
        &mut self,
        procedure_id: ProcedureId,
    ) -> Result<bool, PersistenceError> {
        queries::procedure_exists(&mut self.conn, procedure_id)
    }

    /// Lists the procedure catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_procedures(&mut self) -> Result<Vec<Procedure>, PersistenceError> {
        queries::list_procedures(&mut self.conn)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Loads a plan with its procedures and their current assignees.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_plan(&mut self, plan_id: PlanId) -> Result<Option<Plan>, PersistenceError> {
        queries::find_plan_with_procedures_and_assignments(&mut self.conn, plan_id)
    }

    /// Loads every user whose identifier is in `user_ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_users(
        &mut self,
        user_ids: &BTreeSet<UserId>,
    ) -> Result<Vec<User>, PersistenceError> {
        queries::find_users_by_ids(&mut self.conn, user_ids)
    }

    /// Lists the users assigned to a plan procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_plan_procedure_users(
        &mut self,
        plan_id: PlanId,
        procedure_id: ProcedureId,
    ) -> Result<Vec<User>, PersistenceError> {
        queries::list_plan_procedure_users(&mut self.conn, plan_id, procedure_id)
    }

    /// Atomically replaces the assignees of a plan procedure.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is cancelled or rejected. Nothing
    /// is committed in either case.
    pub fn replace_assignments(
        &mut self,
        change: &AssignmentChange,
        cancel: &CancellationToken,
    ) -> Result<AssignmentDelta, PersistenceError> {
        mutations::commit_assignment_replacement(&mut self.conn, change, cancel)
    }
}
