// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Plan identifier is not a positive integer.
    InvalidPlanId(i64),
    /// Procedure identifier is not a positive integer.
    InvalidProcedureId(i64),
    /// User identifier is not a positive integer.
    InvalidUserId(i64),
    /// The requested user set is absent or empty.
    EmptyUserIds,
    /// Plan does not exist.
    PlanNotFound(i64),
    /// Procedure is not part of the plan.
    ProcedureNotFound {
        /// The plan that was searched.
        plan_id: i64,
        /// The procedure identifier that was not found.
        procedure_id: i64,
    },
    /// Procedure does not exist in the catalog.
    ProcedureNotInCatalog(i64),
    /// None of the requested users exist.
    UsersNotFound(Vec<i64>),
    /// Procedure is already attached to the plan.
    DuplicatePlanProcedure {
        /// The plan identifier.
        plan_id: i64,
        /// The procedure identifier.
        procedure_id: i64,
    },
}

impl DomainError {
    /// Renders a list of user ids the way error messages present them.
    #[must_use]
    pub fn join_user_ids(user_ids: &[i64]) -> String {
        user_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlanId(id) => write!(f, "Invalid PlanId: {id}"),
            Self::InvalidProcedureId(id) => write!(f, "Invalid ProcedureId: {id}"),
            Self::InvalidUserId(id) => write!(f, "Invalid UserId: {id}"),
            Self::EmptyUserIds => write!(f, "Invalid UserIds: at least one user is required"),
            Self::PlanNotFound(id) => write!(f, "PlanId: {id} not found"),
            Self::ProcedureNotFound {
                plan_id,
                procedure_id,
            } => {
                write!(
                    f,
                    "ProcedureId: {procedure_id} not found in PlanId: {plan_id}"
                )
            }
            Self::ProcedureNotInCatalog(id) => write!(f, "ProcedureId: {id} not found"),
            Self::UsersNotFound(ids) => {
                write!(f, "UserIds: {} not found", Self::join_user_ids(ids))
            }
            Self::DuplicatePlanProcedure {
                plan_id,
                procedure_id,
            } => {
                write!(
                    f,
                    "ProcedureId: {procedure_id} is already part of PlanId: {plan_id}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
