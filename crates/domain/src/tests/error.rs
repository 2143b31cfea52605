// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidPlanId(0);
    assert_eq!(format!("{err}"), "Invalid PlanId: 0");

    let err: DomainError = DomainError::InvalidProcedureId(-4);
    assert_eq!(format!("{err}"), "Invalid ProcedureId: -4");

    let err: DomainError = DomainError::EmptyUserIds;
    assert_eq!(
        format!("{err}"),
        "Invalid UserIds: at least one user is required"
    );

    let err: DomainError = DomainError::PlanNotFound(7);
    assert_eq!(format!("{err}"), "PlanId: 7 not found");

    let err: DomainError = DomainError::ProcedureNotFound {
        plan_id: 7,
        procedure_id: 3,
    };
    assert_eq!(format!("{err}"), "ProcedureId: 3 not found in PlanId: 7");

    let err: DomainError = DomainError::DuplicatePlanProcedure {
        plan_id: 7,
        procedure_id: 3,
    };
    assert_eq!(
        format!("{err}"),
        "ProcedureId: 3 is already part of PlanId: 7"
    );
}

#[test]
fn test_users_not_found_lists_ids_in_request_order() {
    let err: DomainError = DomainError::UsersNotFound(vec![42, 7, 42]);
    assert_eq!(format!("{err}"), "UserIds: 42, 7, 42 not found");
}

#[test]
fn test_join_user_ids_empty() {
    assert_eq!(DomainError::join_user_ids(&[]), "");
}
