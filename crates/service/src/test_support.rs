#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Migrated connection for one test. Uses `TEST_DATABASE_URL` when provided, otherwise
/// a private in-memory SQLite database. `None` when `SKIP_DB_TESTS` is set.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let mut cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => DatabaseConfig { url, ..DatabaseConfig::default() },
        Err(_) => DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 1, ..DatabaseConfig::default() },
    };
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

pub fn record(first: &str, email: &str) -> models::student::StudentRecord {
    models::student::StudentRecord {
        id_student: None,
        first_name: first.into(),
        last_name: "Doe".into(),
        email: email.into(),
        phone: "+1234567890".into(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(2000, 1, 15).expect("valid date"),
        address: "123 Main St".into(),
    }
}
