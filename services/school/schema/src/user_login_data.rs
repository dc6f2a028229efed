use sea_orm::entity::prelude::*;

/// Login credentials shared by admins, teachers and students.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_login_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_login_data_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    /// 0 = Admin, 1 = Teacher, 2 = Student.
    pub role: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::admins::Entity")]
    Admin,
    #[sea_orm(has_one = "super::teachers::Entity")]
    Teacher,
    #[sea_orm(has_one = "super::students::Entity")]
    Student,
}

impl Related<super::admins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admin.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
