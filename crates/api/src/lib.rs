// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for plan procedure assignments.
//!
//! Handlers accept request DTOs, validate them, drive the core and
//! persistence layers, and translate every lower-layer error into an
//! [`ApiError`]. Nothing here knows about HTTP.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_repository_error,
};
pub use handlers::{
    add_procedure_to_plan, assign_users_to_plan_procedure, create_plan, get_plan_procedure_users,
    list_procedures,
};
pub use request_response::{
    AddProcedureToPlanRequest, AddProcedureToPlanResponse, AssignUsersToPlanProcedureRequest,
    AssignUsersToPlanProcedureResponse, CreatePlanResponse, ListProceduresResponse,
    PlanProcedureUsersResponse, ProcedureInfo, UserInfo,
};
