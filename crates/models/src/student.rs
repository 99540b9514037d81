//! The `student` entity and its row-level data functions.
//!
//! `Model` is a persisted row; `StudentRecord` is what clients send, with the id optional.

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{db_err, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_student: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Date,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Student = Model;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[serde(default)]
    pub id_student: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Date,
    pub address: String,
}

impl StudentRecord {
    pub fn without_id(mut self) -> Self {
        self.id_student = None;
        self
    }

    fn apply_to(self, am: &mut ActiveModel) {
        am.first_name = Set(self.first_name);
        am.last_name = Set(self.last_name);
        am.email = Set(self.email);
        am.phone = Set(self.phone);
        am.date_of_birth = Set(self.date_of_birth);
        am.address = Set(self.address);
    }
}

impl From<Model> for StudentRecord {
    fn from(m: Model) -> Self {
        Self {
            id_student: Some(m.id_student),
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            date_of_birth: m.date_of_birth,
            address: m.address,
        }
    }
}

/// Insert a new row; any id on the record is ignored and the database assigns one.
pub async fn insert<C: ConnectionTrait>(db: &C, record: StudentRecord) -> Result<Model, ModelError> {
    let mut am = ActiveModel::new();
    am.id_student = NotSet;
    record.apply_to(&mut am);
    am.insert(db).await.map_err(db_err)
}

/// Overwrite every column of row `id`. `None` when the row does not exist.
pub async fn replace<C: ConnectionTrait>(db: &C, id: i32, record: StudentRecord) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(db_err)? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    record.apply_to(&mut am);
    am.update(db).await.map(Some).map_err(db_err)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(db_err)
}

/// All rows, ordered by id.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::IdStudent).all(db).await.map_err(db_err)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    Ok(res.rows_affected)
}
