use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;

use models::student::{self, Student, StudentRecord};

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn save(&self, record: StudentRecord) -> Result<Student, ServiceError> {
        // committed only on success; dropping the transaction rolls it back
        let txn = self.db.begin().await?;
        let saved = match record.id_student {
            None => student::insert(&txn, record).await?,
            Some(id) => match student::replace(&txn, id, record.clone()).await? {
                Some(updated) => updated,
                None => {
                    warn!(id_student = id, "save for unknown id, inserting as new student");
                    student::insert(&txn, record).await?
                }
            },
        };
        txn.commit().await?;
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        Ok(student::find(&self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(student::list(&self.db).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let removed = student::delete(&self.db, id).await?;
        if removed == 0 {
            warn!(id_student = id, "delete for unknown id ignored");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, record};

    #[tokio::test]
    async fn save_inserts_then_updates() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmStudentRepository::new(db);

        let created = repo.save(record("Alice", "alice@example.com")).await?;
        assert!(created.id_student > 0);

        let mut changed = StudentRecord::from(created.clone());
        changed.first_name = "Alice Updated".into();
        changed.email = "alice.updated@example.com".into();
        let updated = repo.save(changed).await?;
        assert_eq!(updated.id_student, created.id_student);
        assert_eq!(updated.first_name, "Alice Updated");

        let found = repo.find_by_id(created.id_student).await?.unwrap();
        assert_eq!(found, updated);

        repo.delete_by_id(created.id_student).await?;
        Ok(())
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_new_row() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmStudentRepository::new(db);

        let mut rec = record("Ghost", "ghost@example.com");
        rec.id_student = Some(i32::MAX);
        let saved = repo.save(rec).await?;
        assert_ne!(saved.id_student, i32::MAX);
        assert!(repo.find_by_id(i32::MAX).await?.is_none());
        assert_eq!(repo.find_by_id(saved.id_student).await?.map(|s| s.first_name), Some("Ghost".to_string()));

        repo.delete_by_id(saved.id_student).await?;
        Ok(())
    }

    #[tokio::test]
    async fn find_all_and_delete() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmStudentRepository::new(db);

        let a = repo.save(record("Alice", "alice@example.com")).await?;
        let b = repo.save(record("Bob", "bob@example.com")).await?;
        let ids: Vec<i32> = repo.find_all().await?.iter().map(|s| s.id_student).collect();
        assert!(ids.contains(&a.id_student));
        assert!(ids.contains(&b.id_student));

        repo.delete_by_id(a.id_student).await?;
        assert!(repo.find_by_id(a.id_student).await?.is_none());
        // second delete of the same id is a no-op
        repo.delete_by_id(a.id_student).await?;

        repo.delete_by_id(b.id_student).await?;
        Ok(())
    }

    #[tokio::test]
    async fn find_all_on_private_database_has_exactly_saved_rows() -> Result<(), anyhow::Error> {
        // a shared TEST_DATABASE_URL may hold rows from other tests
        if std::env::var("TEST_DATABASE_URL").is_ok() {
            return Ok(());
        }
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmStudentRepository::new(db);

        let mut saved = Vec::new();
        for (first, email) in [("Ann", "ann@example.com"), ("Ben", "ben@example.com"), ("Cid", "cid@example.com")] {
            saved.push(repo.save(record(first, email)).await?.id_student);
        }
        saved.sort();

        let mut ids: Vec<i32> = repo.find_all().await?.iter().map(|s| s.id_student).collect();
        ids.sort();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids, saved);
        Ok(())
    }
}
