//! CLI integration tests
//!
//! Drive the `crm` binary end to end with piped stdin against a temporary
//! store file.

use rusqlite::Connection;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_crm(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_crm"))
        .current_dir(dir)
        .env_remove("CRM_DB")
        .env_remove("CRM_EXPORT_DIR")
        .env_remove("CRM_LOG_FORMAT")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("crm.db")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_init_creates_all_tables() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_crm(temp_dir.path(), &["init"], "");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout_of(&output).contains("Store ready at"));

    // Default store file lands in the working directory
    let conn = Connection::open(db_path(&temp_dir)).unwrap();
    for table in ["user", "customer", "product", "support", "ticket"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table {} missing", table);
    }
}

#[test]
fn test_bootstrap_then_menu_session() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let db_arg = db.to_str().unwrap();

    let output = run_crm(temp_dir.path(), &["--db", db_arg, "bootstrap-user", "admin"], "hunter2\n");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("User added successfully."));

    let session = "admin\nhunter2\n\
                   1\n2\naudit\n2024-05-01\n5\n\
                   2\n2\n\
                   3\n2\n\
                   4\n";
    let output = run_crm(temp_dir.path(), &["--db", db_arg, "menu"], session);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Welcome, admin."));
    assert!(stdout.contains("Product added successfully."));
    assert!(stdout.contains("project_id: 1, project_type: audit, project_date: 2024-05-01, project_rating: 5"));
    assert!(stdout.contains("Product data successfully exported to"));

    let csv = std::fs::read_to_string(temp_dir.path().join("product_data.csv")).unwrap();
    assert_eq!(
        csv,
        "project_id,project_type,project_date,project_rating\n1,audit,2024-05-01,5\n"
    );
}

#[test]
fn test_bootstrap_refused_once_a_user_exists() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let db_arg = db.to_str().unwrap();

    let first = run_crm(temp_dir.path(), &["--db", db_arg, "bootstrap-user", "admin"], "pw\n");
    assert!(first.status.success());

    let second = run_crm(temp_dir.path(), &["--db", db_arg, "bootstrap-user", "intruder"], "pw\n");
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("ERR_UNAUTHORISED"));

    let conn = Connection::open(&db).unwrap();
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM user", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn test_wrong_password_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let db_arg = db.to_str().unwrap();

    run_crm(temp_dir.path(), &["--db", db_arg, "bootstrap-user", "admin"], "right\n");

    // Menu is the default subcommand
    let output = run_crm(temp_dir.path(), &["--db", db_arg], "admin\nwrong\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("1. Add information"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid username or password"));
}

#[test]
fn test_non_database_store_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    std::fs::write(&db, b"this is definitely not a sqlite database file, just text").unwrap();

    let output = run_crm(temp_dir.path(), &["--db", db.to_str().unwrap(), "init"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
