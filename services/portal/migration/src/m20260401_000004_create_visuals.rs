use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visuals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visuals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Visuals::Title).string().not_null())
                    .col(ColumnDef::new(Visuals::Description).text().null())
                    .col(ColumnDef::new(Visuals::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Visuals::ThumbnailUrl).string().null())
                    .col(
                        ColumnDef::new(Visuals::Tags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Visuals::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Visuals::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Visuals::ShotDate).date().null())
                    .col(
                        ColumnDef::new(Visuals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Visuals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visuals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Visuals {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    ThumbnailUrl,
    Tags,
    Featured,
    Published,
    ShotDate,
    CreatedAt,
    UpdatedAt,
}
