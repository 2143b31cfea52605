// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `plans`: Plan aggregate and plan procedure queries
//! - `users`: User lookups
//! - `catalog`: Procedure catalog and row counts

pub mod catalog;
pub mod plans;
pub mod users;

pub use catalog::{count_procedures, count_users, list_procedures, procedure_exists};
pub use plans::{
    current_assignees, find_plan_with_procedures_and_assignments, list_plan_procedure_users,
    plan_exists,
};
pub use users::find_users_by_ids;
