//! Service layer for student records.
//! - `student::repository` defines the persistence contract and its implementations.
//! - `student::service` is what the HTTP layer calls.

pub mod errors;
pub mod student;
#[cfg(test)]
pub mod test_support;
