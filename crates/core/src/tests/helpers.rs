// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign_domain::{Plan, PlanId, PlanProcedure, ProcedureId, User, UserId};

pub fn user_id(value: i64) -> UserId {
    UserId::new(value).expect("Valid user id")
}

pub fn user_set(values: &[i64]) -> BTreeSet<UserId> {
    values.iter().map(|value| user_id(*value)).collect()
}

pub fn users(values: &[i64]) -> Vec<User> {
    values
        .iter()
        .map(|value| User::new(user_id(*value), &format!("User {value}")))
        .collect()
}

/// Creates plan 1 with procedure 10 assigned to `assigned` and an empty procedure 20.
pub fn create_test_plan(assigned: &[i64]) -> Plan {
    let plan_id: PlanId = PlanId::new(1).expect("Valid plan id");
    let mut first: PlanProcedure =
        PlanProcedure::new(plan_id, ProcedureId::new(10).expect("Valid procedure id"));
    first.assigned_user_ids = user_set(assigned);
    let second: PlanProcedure =
        PlanProcedure::new(plan_id, ProcedureId::new(20).expect("Valid procedure id"));

    let mut plan: Plan = Plan::new(plan_id);
    plan.procedures.push(first);
    plan.procedures.push(second);
    plan
}
