use sea_orm::entity::prelude::*;

/// Portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub short_description: String,
    pub full_description: String,
    pub problem_goal: String,
    pub what_built: String,
    pub tools_stack: Vec<String>,
    pub challenges: String,
    pub learnings: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub cover_image_url: String,
    pub published: bool,
    pub featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_images::Entity")]
    ProjectImages,
}

impl Related<super::project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
