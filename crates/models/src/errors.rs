use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
}

pub(crate) fn db_err(e: sea_orm::DbErr) -> ModelError {
    ModelError::Db(e.to_string())
}
