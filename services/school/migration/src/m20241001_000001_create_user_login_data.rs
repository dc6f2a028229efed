use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLoginData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLoginData::UserLoginDataId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserLoginData::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserLoginData::Password).string().not_null())
                    .col(ColumnDef::new(UserLoginData::Role).small_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLoginData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserLoginData {
    Table,
    UserLoginDataId,
    Email,
    Password,
    Role,
}
