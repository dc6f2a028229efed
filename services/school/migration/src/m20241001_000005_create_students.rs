use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Lastname).string().not_null())
                    .col(ColumnDef::new(Students::ClassId).integer().not_null())
                    .col(
                        ColumnDef::new(Students::UserLoginDataId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::ClassId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::UserLoginDataId)
                            .to(UserLoginData::Table, UserLoginData::UserLoginDataId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Students::Table)
                    .col(Students::ClassId)
                    .name("idx_students_class_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Students {
    Table,
    StudentId,
    Name,
    Lastname,
    ClassId,
    UserLoginDataId,
}

#[derive(Iden)]
enum Classes {
    Table,
    ClassId,
}

#[derive(Iden)]
enum UserLoginData {
    Table,
    UserLoginDataId,
}
