use async_trait::async_trait;
use models::student::{Student, StudentRecord};

use crate::errors::ServiceError;

/// Persistence contract for student records, keyed by `id_student`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert when `record.id_student` is `None`, otherwise update that row.
    /// Returns the stored row with its id populated.
    async fn save(&self, record: StudentRecord) -> Result<Student, ServiceError>;
    /// Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError>;
    /// Deleting an unknown id succeeds.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and local wiring. Records every call it receives.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Save(Option<i32>),
        FindById(i32),
        FindAll,
        DeleteById(i32),
    }

    #[derive(Default)]
    pub struct MockStudentRepository {
        rows: Mutex<BTreeMap<i32, Student>>, // key: id_student
        next_id: AtomicI32,
        calls: Mutex<Vec<Call>>,
        fail_with: Mutex<Option<String>>,
    }

    fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, ServiceError> {
        m.lock().map_err(|_| ServiceError::Db("mock repository lock poisoned".into()))
    }

    impl MockStudentRepository {
        pub fn new() -> Self { Self::default() }

        /// Calls received so far, oldest first.
        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        /// Make every later call fail with a database error carrying `msg`.
        pub fn fail_with(&self, msg: &str) {
            if let Ok(mut f) = self.fail_with.lock() {
                *f = Some(msg.to_string());
            }
        }

        fn record(&self, call: Call) -> Result<(), ServiceError> {
            lock(&self.calls)?.push(call);
            match lock(&self.fail_with)?.as_ref() {
                Some(msg) => Err(ServiceError::Db(msg.clone())),
                None => Ok(()),
            }
        }

        fn assign_id(&self) -> i32 {
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1
        }
    }

    fn to_row(id: i32, r: StudentRecord) -> Student {
        Student {
            id_student: id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            date_of_birth: r.date_of_birth,
            address: r.address,
        }
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn save(&self, record: StudentRecord) -> Result<Student, ServiceError> {
            self.record(Call::Save(record.id_student))?;
            let mut rows = lock(&self.rows)?;
            // unknown ids are inserted under a fresh id, like the SeaORM repository
            let id = match record.id_student {
                Some(id) if rows.contains_key(&id) => id,
                _ => self.assign_id(),
            };
            let row = to_row(id, record);
            rows.insert(id, row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
            self.record(Call::FindById(id))?;
            Ok(lock(&self.rows)?.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
            self.record(Call::FindAll)?;
            Ok(lock(&self.rows)?.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.record(Call::DeleteById(id))?;
            lock(&self.rows)?.remove(&id);
            Ok(())
        }
    }
}
