// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{PlanId, ProcedureId, UserId};
use std::collections::BTreeSet;

/// Validates a raw plan identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidPlanId` if the identifier is less than 1.
pub const fn validate_plan_id(plan_id: i64) -> Result<PlanId, DomainError> {
    PlanId::new(plan_id)
}

/// Validates a raw procedure identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidProcedureId` if the identifier is less than 1.
pub const fn validate_procedure_id(procedure_id: i64) -> Result<ProcedureId, DomainError> {
    ProcedureId::new(procedure_id)
}

/// Validates the requested user identifiers and collapses them into a set.
///
/// Duplicates collapse to a single entry and ordering is discarded.
/// Identifiers below 1 can never match a stored user and are dropped here
/// rather than rejected, so the returned set may be empty even when the
/// request was not.
///
/// # Arguments
///
/// * `user_ids` - The identifiers as supplied by the caller, if any
///
/// # Errors
///
/// Returns `DomainError::EmptyUserIds` if `user_ids` is absent or empty.
pub fn validate_user_ids(user_ids: Option<&[i64]>) -> Result<BTreeSet<UserId>, DomainError> {
    let user_ids: &[i64] = match user_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => return Err(DomainError::EmptyUserIds),
    };

    Ok(user_ids
        .iter()
        .filter_map(|id| UserId::new(*id).ok())
        .collect())
}
