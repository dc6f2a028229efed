use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub teacher_id: i32,
    pub name: String,
    pub lastname: String,
    #[sea_orm(unique)]
    pub user_login_data_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_login_data::Entity",
        from = "Column::UserLoginDataId",
        to = "super::user_login_data::Column::UserLoginDataId"
    )]
    UserLoginData,
    #[sea_orm(has_many = "super::roles::Entity")]
    Roles,
}

impl Related<super::user_login_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLoginData.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

/// Teachers reach their classes through the `roles` join table.
impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles::Relation::Class.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
