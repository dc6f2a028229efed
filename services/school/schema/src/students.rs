use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub student_id: i32,
    pub name: String,
    pub lastname: String,
    pub class_id: i32,
    #[sea_orm(unique)]
    pub user_login_data_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::ClassId"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::user_login_data::Entity",
        from = "Column::UserLoginDataId",
        to = "super::user_login_data::Column::UserLoginDataId"
    )]
    UserLoginData,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::user_login_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLoginData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
