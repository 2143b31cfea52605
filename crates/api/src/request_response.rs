// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// API request to replace the users assigned to a plan procedure.
///
/// Missing fields deserialize to values that fail validation, so a
/// malformed body is reported as invalid input rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignUsersToPlanProcedureRequest {
    /// The plan that owns the procedure.
    pub plan_id: i64,
    /// The procedure whose assignees are replaced.
    pub procedure_id: i64,
    /// The users that should be assigned afterwards. Duplicates are ignored.
    pub user_ids: Option<Vec<i64>>,
}

/// API response for a successful assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignUsersToPlanProcedureResponse {
    /// Always true.
    pub success: bool,
    /// A success message.
    pub message: String,
}

/// API response for a successful plan creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanResponse {
    /// The identifier of the new plan.
    pub plan_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to attach a catalog procedure to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddProcedureToPlanRequest {
    /// The catalog procedure to attach.
    pub procedure_id: i64,
}

/// API response for a successful procedure attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProcedureToPlanResponse {
    pub plan_id: i64,
    pub procedure_id: i64,
    /// A success message.
    pub message: String,
}

/// A user as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub name: String,
}

/// API response listing the users assigned to a plan procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProcedureUsersResponse {
    pub plan_id: i64,
    pub procedure_id: i64,
    /// Assigned users ordered by user id.
    pub users: Vec<UserInfo>,
}

/// A catalog procedure as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureInfo {
    pub procedure_id: i64,
    pub title: String,
}

/// API response listing the procedure catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProceduresResponse {
    /// Catalog procedures ordered by procedure id.
    pub procedures: Vec<ProcedureInfo>,
}
