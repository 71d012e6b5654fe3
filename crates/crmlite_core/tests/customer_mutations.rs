use crmlite_core::db::open_db_in_memory;
use crmlite_core::{
    CustomerService, MutationError, NewCustomer, SqliteCustomerRepository, ValidationError,
};
use rusqlite::Connection;

fn new_customer(first_name: &str, email: &str, phone: Option<&str>) -> NewCustomer {
    NewCustomer {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
    }
}

fn customer_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM customers;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn create_customer_persists_and_returns_success_message() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let created = service
        .create_customer(&new_customer("Alice", "alice@example.com", Some("+1 555-123-4567")))
        .unwrap();

    assert_eq!(created.message, "Customer created successfully");
    assert_eq!(created.customer.email, "alice@example.com");
    assert_eq!(created.customer.phone, "+1 555-123-4567");
    assert_eq!(customer_count(&conn), 1);
}

#[test]
fn create_customer_defaults_missing_phone_to_empty_string() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let created = service
        .create_customer(&new_customer("Bob", "bob@example.com", None))
        .unwrap();

    assert_eq!(created.customer.phone, "");

    let stored_phone: String = conn
        .query_row(
            "SELECT phone FROM customers WHERE customer_id = ?1;",
            [created.customer.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored_phone, "");
}

#[test]
fn create_customer_rejects_invalid_phone_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let err = service
        .create_customer(&new_customer("Carol", "carol@example.com", Some("not-a-phone")))
        .unwrap_err();

    assert!(matches!(
        err,
        MutationError::Validation(ValidationError::InvalidPhoneFormat)
    ));
    assert_eq!(customer_count(&conn), 0);
}

#[test]
fn create_customer_rejects_duplicate_email_regardless_of_call_order() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    service
        .create_customer(&new_customer("Dana", "shared@example.com", None))
        .unwrap();

    let err = service
        .create_customer(&new_customer("Eve", "shared@example.com", None))
        .unwrap_err();

    assert!(matches!(
        err,
        MutationError::Validation(ValidationError::DuplicateEmail)
    ));
    assert_eq!(err.to_string(), "A user with a similar email already exists");
    assert_eq!(customer_count(&conn), 1);
}

#[test]
fn phone_check_runs_before_email_uniqueness() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    service
        .create_customer(&new_customer("Frank", "frank@example.com", None))
        .unwrap();

    // Same email AND bad phone: the phone failure must win.
    let err = service
        .create_customer(&new_customer("Frank2", "frank@example.com", Some("xx")))
        .unwrap_err();

    assert!(matches!(
        err,
        MutationError::Validation(ValidationError::InvalidPhoneFormat)
    ));
}

#[test]
fn bulk_create_all_valid_persists_every_customer() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let created = service
        .bulk_create_customers(&[
            new_customer("Gail", "gail@example.com", Some("5551234567")),
            new_customer("Hugo", "hugo@example.com", None),
        ])
        .unwrap();

    assert_eq!(created.customers.len(), 2);
    assert!(created.errors.is_empty());
    assert_eq!(customer_count(&conn), 2);
}

#[test]
fn bulk_create_with_any_failure_rolls_back_the_whole_batch() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let err = service
        .bulk_create_customers(&[
            new_customer("Iris", "iris@example.com", None),
            new_customer("Jack", "jack@example.com", Some("bogus")),
            new_customer("Kim", "kim@example.com", None),
        ])
        .unwrap_err();

    let errors = match err {
        MutationError::Bulk(errors) => errors,
        other => panic!("expected bulk error, got {other}"),
    };
    assert_eq!(errors, vec!["Invalid Phone Number Format for Jack: bogus".to_string()]);

    // Iris and Kim were created inside the transaction and must be gone.
    assert_eq!(customer_count(&conn), 0);
}

#[test]
fn bulk_create_collects_one_error_per_failing_item() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    service
        .create_customer(&new_customer("Liam", "liam@example.com", None))
        .unwrap();

    let err = service
        .bulk_create_customers(&[
            new_customer("Mona", "liam@example.com", None),
            new_customer("Nina", "nina@example.com", Some("12")),
            new_customer("Omar", "omar@example.com", None),
        ])
        .unwrap_err();

    let errors = match err {
        MutationError::Bulk(errors) => errors,
        other => panic!("expected bulk error, got {other}"),
    };
    assert_eq!(
        errors,
        vec![
            "Email already exists: liam@example.com".to_string(),
            "Invalid Phone Number Format for Nina: 12".to_string(),
        ]
    );

    // Only the pre-existing customer remains.
    assert_eq!(customer_count(&conn), 1);
}

#[test]
fn bulk_create_rejects_duplicate_emails_within_one_batch() {
    let conn = open_db_in_memory().unwrap();
    let mut service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let err = service
        .bulk_create_customers(&[
            new_customer("Pia", "dup@example.com", None),
            new_customer("Quin", "dup@example.com", None),
        ])
        .unwrap_err();

    let errors = match err {
        MutationError::Bulk(errors) => errors,
        other => panic!("expected bulk error, got {other}"),
    };
    assert_eq!(errors, vec!["Email already exists: dup@example.com".to_string()]);
    assert_eq!(customer_count(&conn), 0);
}
