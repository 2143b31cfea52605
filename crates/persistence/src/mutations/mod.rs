// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `assignments`: Atomic replacement of plan procedure assignees
//! - `catalog`: Plans, procedures, users and plan membership
//! - `seed`: Reference data loading

pub mod assignments;
pub mod catalog;
pub mod seed;

pub use assignments::commit_assignment_replacement;
pub use catalog::{add_procedure_to_plan, create_plan, create_procedure, create_user};
pub use seed::{SeedSummary, seed_reference_data};
