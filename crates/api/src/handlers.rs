// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use plan_assign::{
    AssignmentChange, AssignmentCommand, AssignmentDelta, AssignmentRepository, apply_assignment,
    validate_procedure_not_in_plan,
};
use plan_assign_domain::{
    DomainError, Plan, PlanId, PlanProcedure, ProcedureId, User, UserId, validate_plan_id,
    validate_procedure_id,
};
use plan_assign_persistence::Persistence;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_repository_error,
};
use crate::request_response::{
    AddProcedureToPlanRequest, AddProcedureToPlanResponse, AssignUsersToPlanProcedureRequest,
    CreatePlanResponse, ListProceduresResponse, PlanProcedureUsersResponse, ProcedureInfo,
    UserInfo,
};

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<(), ApiError> {
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    Ok(())
}

/// Replaces the users assigned to a plan procedure.
///
/// This function:
/// - Validates the request without touching the repository
/// - Loads the plan aggregate and locates the procedure inside it
/// - Resolves the requested users, tolerating unknown identifiers as long
///   as at least one user exists
/// - Reconciles the current assignees against the resolved users
/// - Commits the additions and removals atomically
///
/// After success the procedure's assignees are exactly the resolved users.
///
/// # Arguments
///
/// * `repository` - The plan aggregate repository
/// * `request` - The API request
/// * `cancel` - Cancellation signal for the surrounding request
///
/// # Errors
///
/// Returns an error if:
/// - Any identifier is invalid or the user list is absent or empty
///   (`ApiError::InvalidInput`)
/// - The plan, the procedure within the plan, or every requested user is
///   missing (`ApiError::ResourceNotFound`)
/// - `cancel` fired before commit (`ApiError::Cancelled`)
/// - The repository failed (`ApiError::Internal`)
pub fn assign_users_to_plan_procedure<R: AssignmentRepository>(
    repository: &mut R,
    request: &AssignUsersToPlanProcedureRequest,
    cancel: &CancellationToken,
) -> Result<(), ApiError> {
    let command: AssignmentCommand = AssignmentCommand::new(
        request.plan_id,
        request.procedure_id,
        request.user_ids.as_deref(),
    )
    .map_err(translate_domain_error)?;

    ensure_not_cancelled(cancel)?;

    let plan: Plan = repository
        .find_plan_with_procedures_and_assignments(command.plan_id)
        .map_err(translate_repository_error)?
        .ok_or_else(|| translate_domain_error(DomainError::PlanNotFound(request.plan_id)))?;

    if plan.find_procedure(command.procedure_id).is_none() {
        return Err(translate_domain_error(DomainError::ProcedureNotFound {
            plan_id: request.plan_id,
            procedure_id: request.procedure_id,
        }));
    }

    // Identifiers below 1 were dropped during validation and cannot match.
    let resolved_users: Vec<User> = if command.user_ids.is_empty() {
        Vec::new()
    } else {
        repository
            .find_users_by_ids(&command.user_ids)
            .map_err(translate_repository_error)?
    };
    debug!(
        requested = command.user_ids.len(),
        resolved = resolved_users.len(),
        "Resolved users"
    );

    ensure_not_cancelled(cancel)?;

    let change: AssignmentChange =
        apply_assignment(&plan, &command, &resolved_users).map_err(translate_core_error)?;

    if change.is_partial() {
        let unresolved: Vec<i64> = change.unresolved.iter().map(UserId::value).collect();
        warn!(
            plan_id = request.plan_id,
            procedure_id = request.procedure_id,
            unresolved = %DomainError::join_user_ids(&unresolved),
            "Some requested users were not found, assigning the rest"
        );
    }

    let delta: AssignmentDelta = repository
        .commit_assignment_replacement(&change, cancel)
        .map_err(translate_repository_error)?;

    info!(
        plan_id = request.plan_id,
        procedure_id = request.procedure_id,
        added = delta.to_add.len(),
        removed = delta.to_remove.len(),
        retained = delta.retained.len(),
        "Assigned users to plan procedure"
    );

    Ok(())
}

/// Creates an empty plan.
///
/// # Errors
///
/// Returns an error if the plan cannot be stored.
pub fn create_plan(persistence: &mut Persistence) -> Result<CreatePlanResponse, ApiError> {
    let plan_id: PlanId = persistence.create_plan().map_err(translate_persistence_error)?;

    Ok(CreatePlanResponse {
        plan_id: plan_id.value(),
        message: format!("Created plan {plan_id}"),
    })
}

/// Attaches a catalog procedure to a plan.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `plan_id` - Raw plan identifier
/// * `request` - The API request
///
/// # Errors
///
/// Returns an error if:
/// - Either identifier is invalid
/// - The plan or the catalog procedure does not exist
/// - The procedure is already part of the plan
/// - The database operation fails
pub fn add_procedure_to_plan(
    persistence: &mut Persistence,
    plan_id: i64,
    request: &AddProcedureToPlanRequest,
) -> Result<AddProcedureToPlanResponse, ApiError> {
    let plan_id: PlanId = validate_plan_id(plan_id).map_err(translate_domain_error)?;
    let procedure_id: ProcedureId =
        validate_procedure_id(request.procedure_id).map_err(translate_domain_error)?;

    let plan: Plan = persistence
        .find_plan(plan_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_domain_error(DomainError::PlanNotFound(plan_id.value())))?;

    if !persistence
        .procedure_exists(procedure_id)
        .map_err(translate_persistence_error)?
    {
        return Err(translate_domain_error(DomainError::ProcedureNotInCatalog(
            procedure_id.value(),
        )));
    }

    validate_procedure_not_in_plan(&plan, procedure_id).map_err(translate_domain_error)?;

    persistence
        .add_procedure_to_plan(plan_id, procedure_id)
        .map_err(translate_persistence_error)?;

    Ok(AddProcedureToPlanResponse {
        plan_id: plan_id.value(),
        procedure_id: procedure_id.value(),
        message: format!("Added procedure {procedure_id} to plan {plan_id}"),
    })
}

/// Lists the procedure catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn list_procedures(persistence: &mut Persistence) -> Result<ListProceduresResponse, ApiError> {
    let procedures: Vec<ProcedureInfo> = persistence
        .list_procedures()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|procedure| ProcedureInfo {
            procedure_id: procedure.procedure_id.value(),
            title: procedure.title,
        })
        .collect();

    Ok(ListProceduresResponse { procedures })
}

/// Lists the users currently assigned to a plan procedure.
///
/// # Errors
///
/// Returns an error if either identifier is invalid, the plan does not
/// exist, or the procedure is not part of the plan.
pub fn get_plan_procedure_users(
    persistence: &mut Persistence,
    plan_id: i64,
    procedure_id: i64,
) -> Result<PlanProcedureUsersResponse, ApiError> {
    let plan_id: PlanId = validate_plan_id(plan_id).map_err(translate_domain_error)?;
    let procedure_id: ProcedureId =
        validate_procedure_id(procedure_id).map_err(translate_domain_error)?;

    let plan: Plan = persistence
        .find_plan(plan_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| translate_domain_error(DomainError::PlanNotFound(plan_id.value())))?;

    let plan_procedure: &PlanProcedure = plan.find_procedure(procedure_id).ok_or_else(|| {
        translate_domain_error(DomainError::ProcedureNotFound {
            plan_id: plan_id.value(),
            procedure_id: procedure_id.value(),
        })
    })?;

    let users: Vec<UserInfo> = persistence
        .list_plan_procedure_users(plan_procedure.plan_id, plan_procedure.procedure_id)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|user| UserInfo {
            user_id: user.user_id.value(),
            name: user.name,
        })
        .collect();

    Ok(PlanProcedureUsersResponse {
        plan_id: plan_id.value(),
        procedure_id: procedure_id.value(),
        users,
    })
}
