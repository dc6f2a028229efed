use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::TeacherId).integer().not_null())
                    .col(ColumnDef::new(Roles::ClassId).integer().not_null())
                    .primary_key(Index::create().col(Roles::TeacherId).col(Roles::ClassId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Roles::Table, Roles::TeacherId)
                            .to(Teachers::Table, Teachers::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Roles::Table, Roles::ClassId)
                            .to(Classes::Table, Classes::ClassId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Roles::Table)
                    .col(Roles::ClassId)
                    .name("idx_roles_class_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    TeacherId,
    ClassId,
}

#[derive(Iden)]
enum Teachers {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum Classes {
    Table,
    ClassId,
}
