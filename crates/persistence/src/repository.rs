// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign::{AssignmentChange, AssignmentDelta, AssignmentRepository, RepositoryError};
use plan_assign_domain::{Plan, PlanId, User, UserId};
use tokio_util::sync::CancellationToken;

use crate::Persistence;

impl AssignmentRepository for Persistence {
    fn find_plan_with_procedures_and_assignments(
        &mut self,
        plan_id: PlanId,
    ) -> Result<Option<Plan>, RepositoryError> {
        Ok(self.find_plan(plan_id)?)
    }

    fn find_users_by_ids(
        &mut self,
        user_ids: &BTreeSet<UserId>,
    ) -> Result<Vec<User>, RepositoryError> {
        Ok(self.find_users(user_ids)?)
    }

    fn commit_assignment_replacement(
        &mut self,
        change: &AssignmentChange,
        cancel: &CancellationToken,
    ) -> Result<AssignmentDelta, RepositoryError> {
        Ok(self.replace_assignments(change, cancel)?)
    }
}
