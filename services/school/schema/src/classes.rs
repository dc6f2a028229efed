use sea_orm::entity::prelude::*;

/// A school class, e.g. room 101, "A", year "2024".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub class_id: i32,
    pub room_number: i32,
    pub letter: String,
    pub year: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::students::Entity")]
    Students,
    #[sea_orm(has_many = "super::roles::Entity")]
    Roles,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles::Relation::Class.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
