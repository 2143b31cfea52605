// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The storage boundary consumed by the assignment operation.

use std::collections::BTreeSet;

use plan_assign_domain::{Plan, PlanId, User, UserId};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::state::{AssignmentChange, AssignmentDelta};

/// Errors reported by an [`AssignmentRepository`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The operation was cancelled and nothing was committed.
    #[error("Operation cancelled before commit")]
    Cancelled,

    /// The backing store failed.
    #[error("{0}")]
    Backend(String),
}

/// Narrow repository over the plan aggregate.
///
/// Implementations must make `commit_assignment_replacement` atomic: either
/// every row change in the delta is committed or none is.
pub trait AssignmentRepository {
    /// Loads a plan with its procedures and each procedure's current assignees.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_plan_with_procedures_and_assignments(
        &mut self,
        plan_id: PlanId,
    ) -> Result<Option<Plan>, RepositoryError>;

    /// Loads every user whose identifier is in `user_ids`.
    ///
    /// Identifiers with no matching user are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_users_by_ids(
        &mut self,
        user_ids: &BTreeSet<UserId>,
    ) -> Result<Vec<User>, RepositoryError>;

    /// Replaces the assignees of `change.procedure_id` with `change.desired`.
    ///
    /// Returns the delta that was actually applied, which can differ from
    /// `change.delta` if the assignees moved since the plan was loaded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Cancelled` if `cancel` fired before commit,
    /// or `RepositoryError::Backend` if the store rejected the change. In
    /// both cases nothing is committed.
    fn commit_assignment_replacement(
        &mut self,
        change: &AssignmentChange,
        cancel: &CancellationToken,
    ) -> Result<AssignmentDelta, RepositoryError>;
}
