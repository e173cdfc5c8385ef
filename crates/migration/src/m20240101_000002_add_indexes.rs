use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing sorts on created_at
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_reports_created_at")
                    .table(UserReports::Table)
                    .col(UserReports::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Equality filters
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_reports_tipo")
                    .table(UserReports::Table)
                    .col(UserReports::Tipo)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_reports_alcaldia_colonia")
                    .table(UserReports::Table)
                    .col(UserReports::Alcaldia)
                    .col(UserReports::Colonia)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_reports_created_at").table(UserReports::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_reports_tipo").table(UserReports::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_reports_alcaldia_colonia").table(UserReports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserReports { Table, Tipo, Alcaldia, Colonia, CreatedAt }
