//! Create `student` table.
//!
//! `id_student` is generated by the database; no uniqueness on email or phone.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::IdStudent)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Student::FirstName, 255))
                    .col(string_len(Student::LastName, 255))
                    .col(string_len(Student::Email, 255))
                    .col(string_len(Student::Phone, 64))
                    .col(date(Student::DateOfBirth))
                    .col(string_len(Student::Address, 512))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student { Table, IdStudent, FirstName, LastName, Email, Phone, DateOfBirth, Address }
