use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::student::{Student, StudentRecord};

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// Application service for student records. Absence is reported as `None`, not as an error.
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_students(&self) -> Result<Vec<Student>, ServiceError> {
        let list = self.repo.find_all().await?;
        debug!(count = list.len(), "listed students");
        Ok(list)
    }

    #[instrument(skip(self))]
    pub async fn get_student_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        let found = self.repo.find_by_id(id).await?;
        if found.is_none() {
            debug!(id_student = id, "student not found");
        }
        Ok(found)
    }

    /// Create when `record.id_student` is empty, update otherwise.
    #[instrument(skip(self, record), fields(id_student = ?record.id_student))]
    pub async fn save_student(&self, record: StudentRecord) -> Result<Student, ServiceError> {
        let created = record.id_student.is_none();
        let saved = self.repo.save(record).await?;
        info!(id_student = saved.id_student, created, "saved student");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id_student = id, "deleted student");
        Ok(())
    }
}
