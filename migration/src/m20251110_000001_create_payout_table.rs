use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payout::Table)
                    .if_not_exists()
                    .col(pk_auto(Payout::Id))
                    .col(string(Payout::RecipientName))
                    .col(string(Payout::Amount))
                    .col(string(Payout::TransactionId))
                    .col(string_null(Payout::TransactionLink))
                    .col(text_null(Payout::Notes))
                    .col(
                        timestamp(Payout::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // History is read newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_payout_created_at")
                    .table(Payout::Table)
                    .col(Payout::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Not unique, the same transaction may be announced twice
        manager
            .create_index(
                Index::create()
                    .name("idx_payout_transaction_id")
                    .table(Payout::Table)
                    .col(Payout::TransactionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_payout_transaction_id")
                    .table(Payout::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_payout_created_at")
                    .table(Payout::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payout {
    Table,
    Id,
    RecipientName,
    Amount,
    TransactionId,
    TransactionLink,
    Notes,
    CreatedAt,
}
