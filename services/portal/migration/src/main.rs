use sea_orm_migration::prelude::*;

mod m20260401_000001_create_profiles;
mod m20260401_000002_create_projects;
mod m20260401_000003_create_project_images;
mod m20260401_000004_create_visuals;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_profiles::Migration),
            Box::new(m20260401_000002_create_projects::Migration),
            Box::new(m20260401_000003_create_project_images::Migration),
            Box::new(m20260401_000004_create_visuals::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
