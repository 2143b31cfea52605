// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use crate::queries::count_users;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, crate::error::PersistenceError> =
        Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.create_user("Ada").unwrap();

    assert_eq!(count_users(&mut db1.conn).unwrap(), 1, "db1 should have 1 user");
    assert_eq!(count_users(&mut db2.conn).unwrap(), 0, "db2 should be isolated");
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let verified = crate::backend::sqlite::verify_foreign_key_enforcement(&mut persistence.conn);
    assert!(verified.is_ok());
}

#[test]
fn test_file_database_persists_between_connections() {
    let path = std::env::temp_dir().join(format!(
        "plan_assign_init_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_user("Ada").unwrap();
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(count_users(&mut reopened.conn).unwrap(), 1);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

#[test]
fn test_plan_procedure_requires_existing_plan() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let procedure_id = persistence.create_procedure("Blood Panel").unwrap();
    let missing_plan = plan_assign_domain::PlanId::new(999).unwrap();

    let result = persistence.add_procedure_to_plan(missing_plan, procedure_id);

    assert!(result.is_err(), "foreign key must reject unknown plan");
}

#[test]
fn test_duplicate_plan_procedure_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let plan_id = persistence.create_plan().unwrap();
    let procedure_id = persistence.create_procedure("Blood Panel").unwrap();

    persistence
        .add_procedure_to_plan(plan_id, procedure_id)
        .unwrap();
    let result = persistence.add_procedure_to_plan(plan_id, procedure_id);

    assert!(result.is_err(), "primary key must reject duplicate pair");
}
