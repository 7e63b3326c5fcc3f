use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(
                        ColumnDef::new(Projects::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::ShortDescription)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::FullDescription).text().not_null())
                    .col(ColumnDef::new(Projects::ProblemGoal).text().not_null())
                    .col(ColumnDef::new(Projects::WhatBuilt).text().not_null())
                    .col(
                        ColumnDef::new(Projects::ToolsStack)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::Challenges).text().not_null())
                    .col(ColumnDef::new(Projects::Learnings).text().not_null())
                    .col(ColumnDef::new(Projects::GithubUrl).string().null())
                    .col(ColumnDef::new(Projects::LiveUrl).string().null())
                    .col(ColumnDef::new(Projects::CoverImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Projects::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
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
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    ShortDescription,
    FullDescription,
    ProblemGoal,
    WhatBuilt,
    ToolsStack,
    Challenges,
    Learnings,
    GithubUrl,
    LiveUrl,
    CoverImageUrl,
    Published,
    Featured,
    CreatedAt,
    UpdatedAt,
}
