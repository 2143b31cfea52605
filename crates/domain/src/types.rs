// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a plan.
///
/// Always a positive integer. Construction through [`PlanId::new`] is the
/// only way to obtain one from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PlanId(i64);

impl PlanId {
    /// Creates a new plan identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlanId` if `value` is less than 1.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::InvalidPlanId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier of a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ProcedureId(i64);

impl ProcedureId {
    /// Creates a new procedure identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProcedureId` if `value` is less than 1.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::InvalidProcedureId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

/// Identifier of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Creates a new user identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUserId` if `value` is less than 1.
    pub const fn new(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::InvalidUserId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

macro_rules! id_conversions {
    ($($id:ident),+) => {
        $(
            impl TryFrom<i64> for $id {
                type Error = DomainError;

                fn try_from(value: i64) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$id> for i64 {
                fn from(id: $id) -> Self {
                    id.0
                }
            }

            impl std::fmt::Display for $id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )+
    };
}

id_conversions!(PlanId, ProcedureId, UserId);

/// A user that may be assigned to plan procedures.
///
/// Users are created and owned elsewhere; this system only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's identifier.
    pub user_id: UserId,
    /// The user's display name.
    pub name: String,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(user_id: UserId, name: &str) -> Self {
        Self {
            user_id,
            name: name.to_string(),
        }
    }
}

/// A catalog procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    /// The procedure's identifier.
    pub procedure_id: ProcedureId,
    /// Human-readable title.
    pub title: String,
}

/// A procedure as it is scheduled within one plan.
///
/// Owns the set of users currently assigned to it. The set type guarantees
/// that a user is never assigned twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProcedure {
    /// The owning plan.
    pub plan_id: PlanId,
    /// The procedure.
    pub procedure_id: ProcedureId,
    /// Users currently assigned to this plan procedure.
    pub assigned_user_ids: BTreeSet<UserId>,
}

impl PlanProcedure {
    /// Creates a plan procedure with no assignees.
    #[must_use]
    pub const fn new(plan_id: PlanId, procedure_id: ProcedureId) -> Self {
        Self {
            plan_id,
            procedure_id,
            assigned_user_ids: BTreeSet::new(),
        }
    }
}

/// A plan together with its procedures and their current assignees.
///
/// This is the aggregate loaded and persisted as one consistency boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// The plan's identifier.
    pub plan_id: PlanId,
    /// Procedures scheduled in this plan.
    pub procedures: Vec<PlanProcedure>,
}

impl Plan {
    /// Creates a plan with no procedures.
    #[must_use]
    pub const fn new(plan_id: PlanId) -> Self {
        Self {
            plan_id,
            procedures: Vec::new(),
        }
    }

    /// Finds the procedure with the given identifier within this plan.
    #[must_use]
    pub fn find_procedure(&self, procedure_id: ProcedureId) -> Option<&PlanProcedure> {
        self.procedures
            .iter()
            .find(|procedure| procedure.procedure_id == procedure_id)
    }
}

/// Relation record linking one user to one plan procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserAssignment {
    /// The plan.
    pub plan_id: PlanId,
    /// The procedure within the plan.
    pub procedure_id: ProcedureId,
    /// The assigned user.
    pub user_id: UserId,
}

impl UserAssignment {
    /// Creates the relation record for one assignee.
    #[must_use]
    pub const fn new(plan_id: PlanId, procedure_id: ProcedureId, user_id: UserId) -> Self {
        Self {
            plan_id,
            procedure_id,
            user_id,
        }
    }
}
