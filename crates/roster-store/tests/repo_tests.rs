// Integration tests for the write paths of the data store gateway

use roster_core::errors::ExErrorKind;
use roster_core::model::{NewDepartment, NewEmployee, NewRole};
use roster_store::repo::listing;
use roster_store::{db, migrations, SqliteRepo};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let mut conn = db::open(temp_dir.path().join("roster.db")).unwrap();
    db::configure(&conn).unwrap();
    migrations::apply_migrations(&mut conn).unwrap();
    (temp_dir, conn)
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn new_role(title: &str, salary: f64, department_id: i64) -> NewRole {
    NewRole {
        title: title.to_string(),
        salary,
        department_id,
    }
}

fn new_employee(first: &str, last: &str, role_id: i64, manager_id: Option<i64>) -> NewEmployee {
    NewEmployee {
        first_name: first.to_string(),
        last_name: last.to_string(),
        role_id,
        manager_id,
    }
}

#[test]
fn test_insert_department_persists_exactly_one_row() {
    let (_tmp, conn) = setup_db();

    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();

    assert_eq!(count(&conn, "department"), 1);
    assert_eq!(count(&conn, "employee_role"), 0);
    assert_eq!(count(&conn, "employee"), 0);
    let stored: String = conn
        .query_row(
            "SELECT department_name FROM department WHERE id = ?1",
            [dept.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "Engineering");
}

#[test]
fn test_insert_department_rejects_blank_name() {
    let (_tmp, conn) = setup_db();

    let err = SqliteRepo::insert_department(&conn, &NewDepartment::new("   ")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(count(&conn, "department"), 0);
}

#[test]
fn test_insert_role_requires_existing_department() {
    let (_tmp, conn) = setup_db();

    let err = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, 42)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("42"));
    assert_eq!(count(&conn, "employee_role"), 0);
}

#[test]
fn test_insert_role_stores_salary_and_department() {
    let (_tmp, conn) = setup_db();
    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();

    let role = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, dept.id)).unwrap();

    let stored = SqliteRepo::get_role(&conn, role.id).unwrap().unwrap();
    assert_eq!(stored.title, "Engineer");
    assert_eq!(stored.salary, 80000.0);
    assert_eq!(stored.department_id, dept.id);
}

#[test]
fn test_insert_employee_validates_role_and_manager() {
    let (_tmp, conn) = setup_db();
    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();
    let role = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, dept.id)).unwrap();

    let missing_role =
        SqliteRepo::insert_employee(&conn, &new_employee("Ada", "Lovelace", 99, None)).unwrap_err();
    assert_eq!(missing_role.kind(), ExErrorKind::NotFound);

    let missing_manager =
        SqliteRepo::insert_employee(&conn, &new_employee("Ada", "Lovelace", role.id, Some(7)))
            .unwrap_err();
    assert_eq!(missing_manager.kind(), ExErrorKind::NotFound);
    assert!(missing_manager.message().contains("Manager"));

    let blank =
        SqliteRepo::insert_employee(&conn, &new_employee("Ada", "", role.id, None)).unwrap_err();
    assert_eq!(blank.kind(), ExErrorKind::InvalidInput);

    assert_eq!(count(&conn, "employee"), 0);
}

#[test]
fn test_insert_employee_with_manager() {
    let (_tmp, conn) = setup_db();
    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();
    let role = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, dept.id)).unwrap();

    let boss =
        SqliteRepo::insert_employee(&conn, &new_employee("Grace", "Hopper", role.id, None)).unwrap();
    let report = SqliteRepo::insert_employee(
        &conn,
        &new_employee("Ada", "Lovelace", role.id, Some(boss.id)),
    )
    .unwrap();

    let stored = SqliteRepo::get_employee(&conn, report.id).unwrap().unwrap();
    assert_eq!(stored.manager_id, Some(boss.id));
    assert_eq!(stored.full_name(), "Ada Lovelace");
}

#[test]
fn test_update_employee_role_touches_only_target() {
    let (_tmp, conn) = setup_db();
    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();
    let engineer = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, dept.id)).unwrap();
    let lead =
        SqliteRepo::insert_role(&conn, &new_role("Lead Engineer", 120000.0, dept.id)).unwrap();
    let ada =
        SqliteRepo::insert_employee(&conn, &new_employee("Ada", "Lovelace", engineer.id, None))
            .unwrap();
    let alan =
        SqliteRepo::insert_employee(&conn, &new_employee("Alan", "Turing", engineer.id, None))
            .unwrap();

    SqliteRepo::update_employee_role(&conn, ada.id, lead.id).unwrap();

    assert_eq!(
        SqliteRepo::get_employee(&conn, ada.id).unwrap().unwrap().role_id,
        lead.id
    );
    assert_eq!(
        SqliteRepo::get_employee(&conn, alan.id).unwrap().unwrap(),
        alan
    );
    assert_eq!(listing::list_roles(&conn).unwrap().len(), 2);
}

#[test]
fn test_update_employee_role_reports_missing_rows() {
    let (_tmp, conn) = setup_db();
    let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Engineering")).unwrap();
    let role = SqliteRepo::insert_role(&conn, &new_role("Engineer", 80000.0, dept.id)).unwrap();

    let no_employee = SqliteRepo::update_employee_role(&conn, 5, role.id).unwrap_err();
    assert_eq!(no_employee.kind(), ExErrorKind::NotFound);
    assert!(no_employee.message().contains("Employee"));

    let no_role = SqliteRepo::update_employee_role(&conn, 5, 77).unwrap_err();
    assert!(no_role.message().contains("Role"));
}

#[test]
fn test_foreign_keys_enforced_for_raw_inserts() {
    let (_tmp, conn) = setup_db();

    let result = conn.execute(
        "INSERT INTO employee_role (title, salary, department_id) VALUES ('Ghost', 1, 404)",
        [],
    );
    let err = roster_store::errors::from_rusqlite(result.unwrap_err());
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}
