// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use plan_assign_domain::UserId;

use crate::state::AssignmentDelta;

/// Computes the delta that turns `current` into `desired`.
///
/// Users present in both sets are retained untouched, so applying the delta
/// never deletes and reinserts an unchanged assignment.
#[must_use]
pub fn reconcile(current: &BTreeSet<UserId>, desired: &BTreeSet<UserId>) -> AssignmentDelta {
    AssignmentDelta {
        to_add: desired.difference(current).copied().collect(),
        to_remove: current.difference(desired).copied().collect(),
        retained: current.intersection(desired).copied().collect(),
    }
}
