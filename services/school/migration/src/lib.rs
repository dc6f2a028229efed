pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_user_login_data;
mod m20241001_000002_create_classes;
mod m20241001_000003_create_admins;
mod m20241001_000004_create_teachers;
mod m20241001_000005_create_students;
mod m20241001_000006_create_roles;
mod m20241001_000007_create_meals;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_user_login_data::Migration),
            Box::new(m20241001_000002_create_classes::Migration),
            Box::new(m20241001_000003_create_admins::Migration),
            Box::new(m20241001_000004_create_teachers::Migration),
            Box::new(m20241001_000005_create_students::Migration),
            Box::new(m20241001_000006_create_roles::Migration),
            Box::new(m20241001_000007_create_meals::Migration),
        ]
    }
}
