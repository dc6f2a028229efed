use sea_orm::entity::prelude::*;

/// A meal on the school menu. Every descriptive column is free text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub meal_id: i32,
    pub name: String,
    pub description: String,
    pub calories: String,
    pub allergies: String,
    pub extra: String,
    pub ingredients: String,
    pub day: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
