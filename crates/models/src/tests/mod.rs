use anyhow::Result;
use chrono::NaiveDate;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;
use crate::student::StudentRecord;



/// Migrated database for a test: `TEST_DATABASE_URL` when set, otherwise a private
/// in-memory SQLite. `None` when `SKIP_DB_TESTS` is set.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => DatabaseConfig { url, max_connections: 5, min_connections: 1, ..DatabaseConfig::default() },
        // one connection: every sqlite memory connection is its own database
        Err(_) => DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..DatabaseConfig::default()
        },
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

pub(crate) fn record(first: &str, last: &str, email: &str, phone: &str, dob: (i32, u32, u32), address: &str) -> StudentRecord {
    StudentRecord {
        id_student: None,
        first_name: first.into(),
        last_name: last.into(),
        email: email.into(),
        phone: phone.into(),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).expect("valid date"),
        address: address.into(),
    }
}

pub(crate) fn alice() -> StudentRecord {
    record("Alice", "Wonder", "alice.wonder@example.com", "+1111111111", (1998, 3, 15), "123 Wonderland")
}

pub(crate) fn bob() -> StudentRecord {
    record("Bob", "Builder", "bob.builder@example.com", "+2222222222", (1997, 6, 20), "456 Construction Ave")
}

#[test]
fn record_json_uses_camel_case_and_iso_dates() {
    let json = serde_json::to_value(alice()).unwrap();
    assert_eq!(json["firstName"], "Alice");
    assert_eq!(json["dateOfBirth"], "1998-03-15");
    assert!(json["idStudent"].is_null());

    let parsed: StudentRecord = serde_json::from_value(serde_json::json!({
        "firstName": "Bob",
        "lastName": "Johnson",
        "email": "bob.johnson@example.com",
        "phone": "+1555123456",
        "dateOfBirth": "2001-08-10",
        "address": "789 Pine Street"
    }))
    .unwrap();
    assert_eq!(parsed.id_student, None);
    assert_eq!(parsed.date_of_birth, NaiveDate::from_ymd_opt(2001, 8, 10).unwrap());
}

#[test]
fn record_missing_field_is_rejected() {
    let res = serde_json::from_value::<StudentRecord>(serde_json::json!({
        "firstName": "Bob",
        "lastName": "Johnson"
    }));
    assert!(res.is_err());
}
