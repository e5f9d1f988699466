// Integration tests for the schema bootstrap

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = roster_store::migrations::apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    // sqlite_sequence comes from AUTOINCREMENT
    assert_eq!(
        get_table_names(&conn),
        vec![
            "department",
            "employee",
            "employee_role",
            "schema_version",
            "sqlite_sequence"
        ]
    );
}

#[test]
fn test_reapplying_keeps_existing_rows() {
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute("INSERT INTO department (department_name) VALUES ('Legal')", [])
        .unwrap();

    roster_store::migrations::apply_migrations(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM department", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_checksum_mismatch_is_detected() {
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'tampered' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = roster_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert_eq!(
        err.kind(),
        roster_core::errors::ExErrorKind::ConstraintViolation
    );
    assert_eq!(err.op(), Some("migration_checksum"));
}

#[test]
fn test_schema_rejects_blank_department_name() {
    let mut conn = setup_test_db();
    roster_store::migrations::apply_migrations(&mut conn).unwrap();

    let result = conn.execute("INSERT INTO department (department_name) VALUES ('  ')", []);
    assert!(result.is_err());
}
