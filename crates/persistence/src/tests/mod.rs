// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod initialization_tests;

use std::collections::BTreeSet;

use plan_assign::{AssignmentChange, reconcile};
use plan_assign_domain::{PlanId, ProcedureId, UserId};

use crate::Persistence;

/// A plan with one procedure attached and four users in the table.
pub struct Fixture {
    pub persistence: Persistence,
    pub plan_id: PlanId,
    pub procedure_id: ProcedureId,
    /// A catalog procedure that is not part of the plan.
    pub detached_procedure_id: ProcedureId,
    pub user_ids: Vec<UserId>,
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let plan_id: PlanId = persistence.create_plan().unwrap();
    let procedure_id: ProcedureId = persistence.create_procedure("Blood Panel").unwrap();
    let detached_procedure_id: ProcedureId =
        persistence.create_procedure("Chest X-Ray").unwrap();
    persistence
        .add_procedure_to_plan(plan_id, procedure_id)
        .unwrap();

    let user_ids: Vec<UserId> = ["Ada", "Grace", "Edsger", "Barbara"]
        .iter()
        .map(|name| persistence.create_user(name).unwrap())
        .collect();

    Fixture {
        persistence,
        plan_id,
        procedure_id,
        detached_procedure_id,
        user_ids,
    }
}

pub fn user_set(ids: &[UserId]) -> BTreeSet<UserId> {
    ids.iter().copied().collect()
}

/// Builds a change that replaces the assignees currently stored for the
/// fixture's procedure with `desired`.
pub fn change_for(fixture: &mut Fixture, desired: BTreeSet<UserId>) -> AssignmentChange {
    let current: BTreeSet<UserId> = fixture
        .persistence
        .find_plan(fixture.plan_id)
        .unwrap()
        .unwrap()
        .find_procedure(fixture.procedure_id)
        .unwrap()
        .assigned_user_ids
        .clone();

    AssignmentChange {
        plan_id: fixture.plan_id,
        procedure_id: fixture.procedure_id,
        delta: reconcile(&current, &desired),
        desired,
        unresolved: BTreeSet::new(),
    }
}

pub fn assigned_ids(fixture: &mut Fixture) -> BTreeSet<UserId> {
    fixture
        .persistence
        .list_plan_procedure_users(fixture.plan_id, fixture.procedure_id)
        .unwrap()
        .into_iter()
        .map(|user| user.user_id)
        .collect()
}
