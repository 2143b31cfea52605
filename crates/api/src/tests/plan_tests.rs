// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plan management and read handler tests.

use crate::{
    AddProcedureToPlanRequest, ApiError, CreatePlanResponse, ListProceduresResponse,
    PlanProcedureUsersResponse, add_procedure_to_plan, create_plan, get_plan_procedure_users,
    list_procedures,
};

use super::helpers::{PersistenceFixture, create_persistence_fixture};

#[test]
fn test_create_plan_returns_new_identifier() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();

    let response: CreatePlanResponse = create_plan(&mut fixture.persistence).unwrap();

    assert!(response.plan_id > fixture.plan_id);
    assert!(response.message.contains(&response.plan_id.to_string()));
}

#[test]
fn test_add_procedure_to_plan() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();
    let request = AddProcedureToPlanRequest {
        procedure_id: fixture.detached_procedure_id,
    };

    let response =
        add_procedure_to_plan(&mut fixture.persistence, fixture.plan_id, &request).unwrap();

    assert_eq!(response.plan_id, fixture.plan_id);
    assert_eq!(response.procedure_id, fixture.detached_procedure_id);

    let users: PlanProcedureUsersResponse = get_plan_procedure_users(
        &mut fixture.persistence,
        fixture.plan_id,
        fixture.detached_procedure_id,
    )
    .unwrap();
    assert!(users.users.is_empty());
}

#[test]
fn test_add_procedure_twice_is_rule_violation() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();
    let request = AddProcedureToPlanRequest {
        procedure_id: fixture.procedure_id,
    };

    let result = add_procedure_to_plan(&mut fixture.persistence, fixture.plan_id, &request);

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_add_unknown_catalog_procedure_is_not_found() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();
    let request = AddProcedureToPlanRequest { procedure_id: 777 };

    let result = add_procedure_to_plan(&mut fixture.persistence, fixture.plan_id, &request);

    assert_eq!(
        result,
        Err(ApiError::ResourceNotFound {
            resource_type: String::from("Procedure"),
            message: String::from("ProcedureId: 777 not found"),
        })
    );
}

#[test]
fn test_add_procedure_to_unknown_plan_is_not_found() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();
    let request = AddProcedureToPlanRequest {
        procedure_id: fixture.procedure_id,
    };

    let result = add_procedure_to_plan(&mut fixture.persistence, 555, &request);

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Plan"
    ));
}

#[test]
fn test_add_procedure_rejects_invalid_ids() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();

    let bad_plan = add_procedure_to_plan(
        &mut fixture.persistence,
        0,
        &AddProcedureToPlanRequest { procedure_id: 1 },
    );
    let bad_procedure = add_procedure_to_plan(
        &mut fixture.persistence,
        fixture.plan_id,
        &AddProcedureToPlanRequest::default(),
    );

    assert!(matches!(
        bad_plan,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "PlanId"
    ));
    assert!(matches!(
        bad_procedure,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "ProcedureId"
    ));
}

#[test]
fn test_get_users_for_procedure_outside_plan() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();

    let result = get_plan_procedure_users(
        &mut fixture.persistence,
        fixture.plan_id,
        fixture.detached_procedure_id,
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Procedure"
    ));
}

#[test]
fn test_list_procedures_includes_detached_procedures() {
    let mut fixture: PersistenceFixture = create_persistence_fixture();

    let response: ListProceduresResponse = list_procedures(&mut fixture.persistence).unwrap();

    let ids: Vec<i64> = response
        .procedures
        .iter()
        .map(|procedure| procedure.procedure_id)
        .collect();
    assert_eq!(
        ids,
        vec![fixture.procedure_id, fixture.detached_procedure_id]
    );
    assert_eq!(response.procedures[0].title, "Blood Panel");
}
