// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use plan_assign::{CoreError, RepositoryError};
use plan_assign_domain::DomainError;
use plan_assign_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// The caller cancelled the operation before it committed.
    Cancelled,
}

impl ApiError {
    /// Returns the message intended for the caller, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::DomainRuleViolation { message, .. }
            | Self::Internal { message } => message.clone(),
            Self::Cancelled => String::from("Operation cancelled"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPlanId(_) => ApiError::InvalidInput {
            field: String::from("PlanId"),
            message: String::from("Invalid PlanId"),
        },
        DomainError::InvalidProcedureId(_) => ApiError::InvalidInput {
            field: String::from("ProcedureId"),
            message: String::from("Invalid ProcedureId"),
        },
        DomainError::InvalidUserId(_) | DomainError::EmptyUserIds => ApiError::InvalidInput {
            field: String::from("UserIds"),
            message: String::from("Invalid UserIds"),
        },
        DomainError::PlanNotFound(plan_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Plan"),
            message: format!("PlanId: {plan_id} not found"),
        },
        DomainError::ProcedureNotFound { procedure_id, .. }
        | DomainError::ProcedureNotInCatalog(procedure_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Procedure"),
            message: format!("ProcedureId: {procedure_id} not found"),
        },
        err @ DomainError::UsersNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Users"),
            message: err.to_string(),
        },
        err @ DomainError::DuplicatePlanProcedure { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_plan_procedure"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

/// Translates a repository error into an API error.
///
/// Backend detail is carried through unchanged.
#[must_use]
pub fn translate_repository_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::Cancelled => ApiError::Cancelled,
        RepositoryError::Backend(message) => ApiError::Internal { message },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Cancelled => ApiError::Cancelled,
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
