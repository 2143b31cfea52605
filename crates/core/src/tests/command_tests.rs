// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use plan_assign_domain::DomainError;

use crate::AssignmentCommand;
use crate::tests::helpers::user_set;

#[test]
fn test_command_from_valid_input() {
    let command: AssignmentCommand = AssignmentCommand::new(1, 2, Some(&[3, 3, 4])).unwrap();

    assert_eq!(command.plan_id.value(), 1);
    assert_eq!(command.procedure_id.value(), 2);
    assert_eq!(command.user_ids, user_set(&[3, 4]));
    assert_eq!(command.requested_user_ids, vec![3, 3, 4]);
}

#[test]
fn test_command_rejects_invalid_plan_first() {
    let result: Result<AssignmentCommand, DomainError> = AssignmentCommand::new(0, 0, None);
    assert_eq!(result, Err(DomainError::InvalidPlanId(0)));
}

#[test]
fn test_command_rejects_invalid_procedure_before_users() {
    let result: Result<AssignmentCommand, DomainError> = AssignmentCommand::new(1, -2, None);
    assert_eq!(result, Err(DomainError::InvalidProcedureId(-2)));
}

#[test]
fn test_command_rejects_missing_users() {
    assert_eq!(
        AssignmentCommand::new(1, 2, None),
        Err(DomainError::EmptyUserIds)
    );
    assert_eq!(
        AssignmentCommand::new(1, 2, Some(&[])),
        Err(DomainError::EmptyUserIds)
    );
}
