use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::AdminId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(ColumnDef::new(Admins::Lastname).string().not_null())
                    .col(
                        ColumnDef::new(Admins::UserLoginDataId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Admins::Table, Admins::UserLoginDataId)
                            .to(UserLoginData::Table, UserLoginData::UserLoginDataId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Admins {
    Table,
    AdminId,
    Name,
    Lastname,
    UserLoginDataId,
}

#[derive(Iden)]
enum UserLoginData {
    Table,
    UserLoginDataId,
}
