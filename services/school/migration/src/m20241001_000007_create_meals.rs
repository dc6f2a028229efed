use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meals::MealId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Meals::Name).string().not_null())
                    .col(ColumnDef::new(Meals::Description).text().not_null())
                    .col(ColumnDef::new(Meals::Calories).string().not_null())
                    .col(ColumnDef::new(Meals::Allergies).text().not_null())
                    .col(ColumnDef::new(Meals::Extra).text().not_null())
                    .col(ColumnDef::new(Meals::Ingredients).text().not_null())
                    .col(ColumnDef::new(Meals::Day).string().not_null())
                    .col(
                        ColumnDef::new(Meals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Meals::Table)
                    .col(Meals::Day)
                    .name("idx_meals_day")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Meals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Meals {
    Table,
    MealId,
    Name,
    Description,
    Calories,
    Allergies,
    Extra,
    Ingredients,
    Day,
    CreatedAt,
}
