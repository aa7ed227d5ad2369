//! Engine operation tests: behaviour plus boundary logging

use crm_core::logging_facility::test_capture::init_test_capture;
use crm_core::model::{Customer, NewCustomer, NewProduct, NewTicket, NewUser, Product, Support, Table};
use crm_core::ExErrorKind;
use crm_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use crm_core_types::Sensitive;
use crm_engine::commands::{auth, export, records, store};
use crm_engine::{ExportOutcome, Listing};
use crm_store::CrmRepo;
use tempfile::TempDir;

fn setup_repo() -> CrmRepo {
    let mut repo = CrmRepo::open_in_memory().unwrap();
    store::ensure_schema(&mut repo).unwrap();
    repo
}

#[test]
fn test_open_store_creates_file_and_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("crm.db");

    let repo = store::open_store(&path).unwrap();

    assert!(path.exists());
    assert_eq!(repo.count(Table::Customer).unwrap(), 0);
}

#[test]
fn test_open_store_unreachable_path_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("crm.db");

    let err = store::open_store(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConnectionFailure);
    assert!(err.kind().is_fatal());
}

#[test]
fn test_bootstrap_only_on_empty_store() {
    let mut repo = setup_repo();

    auth::bootstrap_user(&mut repo, &NewUser::new("admin", "pw")).unwrap();
    let err = auth::bootstrap_user(&mut repo, &NewUser::new("mallory", "pw")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Unauthorised);
    assert_eq!(repo.count(Table::User).unwrap(), 1);
    assert!(!auth::login(&repo, "mallory", &Sensitive::new("pw".to_string())).unwrap());
}

#[test]
fn test_login_after_add_user() {
    let mut repo = setup_repo();
    auth::add_user(&mut repo, &NewUser::new("alice", "secret123")).unwrap();

    assert!(auth::login(&repo, "alice", &Sensitive::new("secret123".to_string())).unwrap());
    assert!(!auth::login(&repo, "alice", &Sensitive::new("wrong".to_string())).unwrap());
}

#[test]
fn test_list_empty_is_none_found() {
    let repo = setup_repo();
    let listing = records::list::<Support>(&repo).unwrap();
    assert_eq!(listing, Listing::NoneFound);
    assert!(listing.rows().is_empty());
}

#[test]
fn test_list_customers_after_add() {
    let mut repo = setup_repo();
    records::add_customer(&mut repo, &NewCustomer::new("555-0100", "0", "0", "credit")).unwrap();

    match records::list::<Customer>(&repo).unwrap() {
        Listing::Found(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].contact_no, "555-0100");
            assert_eq!(rows[0].payment_type, "credit");
        }
        Listing::NoneFound => panic!("expected one customer"),
    }
}

#[test]
fn test_customers_by_payment_type_none_found() {
    let mut repo = setup_repo();
    records::add_customer(&mut repo, &NewCustomer::new("1", "", "", "cash")).unwrap();

    let listing = records::customers_by_payment_type(&repo, "credit").unwrap();
    assert_eq!(listing, Listing::NoneFound);
}

#[test]
fn test_export_empty_and_populated() {
    let mut repo = setup_repo();
    let dir = TempDir::new().unwrap();

    assert_eq!(
        export::export::<Product>(&repo, dir.path()).unwrap(),
        ExportOutcome::NoData
    );

    records::add_product(&mut repo, &NewProduct::new("audit", "2024-05-01", "4")).unwrap();
    let outcome = export::export::<Product>(&repo, dir.path()).unwrap();
    assert!(matches!(outcome, ExportOutcome::Written { rows: 1, .. }));
}

#[test]
fn test_add_ticket_emits_single_start_and_end() {
    let capture = init_test_capture();
    let mut repo = setup_repo();
    let reason = "unique reason for logging test";

    let before_start = capture.count("add_ticket", EVENT_START);
    let before_end = capture.count("add_ticket", EVENT_END);

    records::add_ticket(&mut repo, &NewTicket::new("2024-01-01", "open", reason)).unwrap();

    let after_start = capture.count("add_ticket", EVENT_START);
    let after_end = capture.count("add_ticket", EVENT_END);
    assert_eq!(after_start - before_start, 1);
    assert_eq!(after_end - before_end, 1);
}

#[test]
fn test_duplicate_user_logs_end_error_with_code() {
    let capture = init_test_capture();
    let mut repo = setup_repo();
    auth::add_user(&mut repo, &NewUser::new("dup_logging_user", "a")).unwrap();

    let err = auth::add_user(&mut repo, &NewUser::new("dup_logging_user", "b")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let errors = capture.count_matching(|e| {
        e.is("add_user", EVENT_END_ERROR) && e.field("err_code") == Some("ERR_CONSTRAINT_VIOLATION")
    });
    assert!(errors >= 1);
}

#[test]
fn test_password_never_logged() {
    let capture = init_test_capture();
    let mut repo = setup_repo();
    let secret = "pw-that-must-not-leak-7731";

    auth::add_user(&mut repo, &NewUser::new("leakcheck", secret)).unwrap();
    auth::login(&repo, "leakcheck", &Sensitive::new(secret.to_string())).unwrap();

    assert!(!capture.any_field_contains(secret));
}
