use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User,
    m20260810_000005_create_auction_item_table::AuctionItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(pk_auto(Bid::Id))
                    .col(integer(Bid::ItemId))
                    .col(integer(Bid::UserId))
                    .col(big_integer(Bid::Amount))
                    .col(boolean(Bid::Anonymous).default(false))
                    .col(
                        timestamp(Bid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_item_id")
                            .from(Bid::Table, Bid::ItemId)
                            .to(AuctionItem::Table, AuctionItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_user_id")
                            .from(Bid::Table, Bid::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bid_item_created_at")
                    .table(Bid::Table)
                    .col(Bid::ItemId)
                    .col(Bid::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bid {
    Table,
    Id,
    ItemId,
    UserId,
    Amount,
    Anonymous,
    CreatedAt,
}
