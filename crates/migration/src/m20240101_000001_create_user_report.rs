//! Create `user_reports` table.
//! One row per citizen incident report; rows are inserted and deleted, never updated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserReports::Table)
                    .if_not_exists()
                    .col(pk_auto(UserReports::Id))
                    .col(string_len(UserReports::Tipo, 64).not_null())
                    .col(text(UserReports::Descripcion).not_null())
                    .col(double(UserReports::Lat).not_null())
                    .col(double(UserReports::Lon).not_null())
                    .col(string_len_null(UserReports::Alcaldia, 128))
                    .col(string_len_null(UserReports::Colonia, 128))
                    .col(timestamp_with_time_zone(UserReports::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserReports::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserReports {
    Table,
    Id,
    Tipo,
    Descripcion,
    Lat,
    Lon,
    Alcaldia,
    Colonia,
    CreatedAt,
}
