use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Shared updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;
                "#,
            )
            .await?;

        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Topics::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Topics::Description).text().not_null())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing is oldest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_created_at
                ON topics (created_at);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_topics_updated_at ON topics;
                DROP INDEX IF EXISTS idx_topics_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    CreatedBy,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}
