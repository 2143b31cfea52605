// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::BTreeSet;

use plan_assign::{
    AssignmentChange, AssignmentDelta, AssignmentRepository, RepositoryError, reconcile,
};
use plan_assign_domain::{Plan, PlanId, PlanProcedure, ProcedureId, User, UserId};
use plan_assign_persistence::Persistence;
use tokio_util::sync::CancellationToken;

use crate::AssignUsersToPlanProcedureRequest;

pub fn create_request(
    plan_id: i64,
    procedure_id: i64,
    user_ids: &[i64],
) -> AssignUsersToPlanProcedureRequest {
    AssignUsersToPlanProcedureRequest {
        plan_id,
        procedure_id,
        user_ids: Some(user_ids.to_vec()),
    }
}

/// Repository calls observed by [`RecordingRepository`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryCall {
    FindPlan,
    FindUsers,
    Commit,
}

/// In-memory repository that records every call it receives.
///
/// Holds plan 1 with procedures 10 and 20, and users 1 through 4.
pub struct RecordingRepository {
    pub plan: Plan,
    pub users: Vec<User>,
    pub calls: Vec<RepositoryCall>,
    /// Returned from the next plan load.
    pub load_failure: Option<RepositoryError>,
    /// Returned from the next user lookup.
    pub users_failure: Option<RepositoryError>,
    /// Returned from the next commit instead of applying the change.
    pub commit_failure: Option<RepositoryError>,
    /// Cancelled once the plan has been loaded.
    pub cancel_after_load: Option<CancellationToken>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        let plan_id: PlanId = PlanId::new(1).unwrap();
        let mut plan: Plan = Plan::new(plan_id);
        plan.procedures
            .push(PlanProcedure::new(plan_id, ProcedureId::new(10).unwrap()));
        plan.procedures
            .push(PlanProcedure::new(plan_id, ProcedureId::new(20).unwrap()));

        let users: Vec<User> = (1..=4)
            .map(|id| User::new(UserId::new(id).unwrap(), &format!("User {id}")))
            .collect();

        Self {
            plan,
            users,
            calls: Vec::new(),
            load_failure: None,
            users_failure: None,
            commit_failure: None,
            cancel_after_load: None,
        }
    }

    pub fn with_assignees(mut self, procedure_id: i64, user_ids: &[i64]) -> Self {
        let procedure_id: ProcedureId = ProcedureId::new(procedure_id).unwrap();
        if let Some(plan_procedure) = self
            .plan
            .procedures
            .iter_mut()
            .find(|p| p.procedure_id == procedure_id)
        {
            plan_procedure.assigned_user_ids = user_ids
                .iter()
                .map(|id| UserId::new(*id).unwrap())
                .collect();
        }
        self
    }

    pub fn assignees(&self, procedure_id: i64) -> Vec<i64> {
        self.plan
            .find_procedure(ProcedureId::new(procedure_id).unwrap())
            .unwrap()
            .assigned_user_ids
            .iter()
            .map(UserId::value)
            .collect()
    }
}

impl AssignmentRepository for RecordingRepository {
    fn find_plan_with_procedures_and_assignments(
        &mut self,
        plan_id: PlanId,
    ) -> Result<Option<Plan>, RepositoryError> {
        self.calls.push(RepositoryCall::FindPlan);
        if let Some(err) = self.load_failure.take() {
            return Err(err);
        }
        if let Some(cancel) = &self.cancel_after_load {
            cancel.cancel();
        }
        Ok((self.plan.plan_id == plan_id).then(|| self.plan.clone()))
    }

    fn find_users_by_ids(
        &mut self,
        user_ids: &BTreeSet<UserId>,
    ) -> Result<Vec<User>, RepositoryError> {
        self.calls.push(RepositoryCall::FindUsers);
        if let Some(err) = self.users_failure.take() {
            return Err(err);
        }
        Ok(self
            .users
            .iter()
            .filter(|user| user_ids.contains(&user.user_id))
            .cloned()
            .collect())
    }

    fn commit_assignment_replacement(
        &mut self,
        change: &AssignmentChange,
        cancel: &CancellationToken,
    ) -> Result<AssignmentDelta, RepositoryError> {
        self.calls.push(RepositoryCall::Commit);
        if let Some(err) = self.commit_failure.take() {
            return Err(err);
        }
        if cancel.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }

        let plan_procedure: &mut PlanProcedure = self
            .plan
            .procedures
            .iter_mut()
            .find(|p| p.procedure_id == change.procedure_id)
            .ok_or_else(|| RepositoryError::Backend(String::from("no such plan procedure")))?;
        let delta: AssignmentDelta = reconcile(&plan_procedure.assigned_user_ids, &change.desired);
        plan_procedure.assigned_user_ids = change.desired.clone();
        Ok(delta)
    }
}

/// In-memory persistence with one plan, two catalog procedures (only the
/// first attached to the plan) and four users.
pub struct PersistenceFixture {
    pub persistence: Persistence,
    pub plan_id: i64,
    pub procedure_id: i64,
    pub detached_procedure_id: i64,
    pub user_ids: Vec<i64>,
}

pub fn create_persistence_fixture() -> PersistenceFixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let plan_id: PlanId = persistence.create_plan().unwrap();
    let procedure_id: ProcedureId = persistence.create_procedure("Blood Panel").unwrap();
    let detached_procedure_id: ProcedureId =
        persistence.create_procedure("Chest X-Ray").unwrap();
    persistence
        .add_procedure_to_plan(plan_id, procedure_id)
        .unwrap();

    let user_ids: Vec<i64> = ["Ada", "Grace", "Edsger", "Barbara"]
        .iter()
        .map(|name| persistence.create_user(name).unwrap().value())
        .collect();

    PersistenceFixture {
        persistence,
        plan_id: plan_id.value(),
        procedure_id: procedure_id.value(),
        detached_procedure_id: detached_procedure_id.value(),
        user_ids,
    }
}
