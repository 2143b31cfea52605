// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod reconcile;
mod repository;
mod state;

#[cfg(test)]
mod tests;

use plan_assign_domain::{DomainError, Plan, ProcedureId};

// Re-export public types and functions
pub use apply::apply_assignment;
pub use command::AssignmentCommand;
pub use error::CoreError;
pub use reconcile::reconcile;
pub use repository::{AssignmentRepository, RepositoryError};
pub use state::{AssignmentChange, AssignmentDelta};

/// Validates that a procedure can be attached to a plan.
///
/// This is a read-only check against the loaded plan aggregate.
///
/// # Arguments
///
/// * `plan` - The plan the procedure would be attached to
/// * `procedure_id` - The procedure to attach
///
/// # Errors
///
/// Returns `DomainError::DuplicatePlanProcedure` if the procedure is already
/// part of the plan.
pub fn validate_procedure_not_in_plan(
    plan: &Plan,
    procedure_id: ProcedureId,
) -> Result<(), DomainError> {
    if plan.find_procedure(procedure_id).is_some() {
        return Err(DomainError::DuplicatePlanProcedure {
            plan_id: plan.plan_id.value(),
            procedure_id: procedure_id.value(),
        });
    }
    Ok(())
}
