use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_auction_table::Auction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionItem::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionItem::Id))
                    .col(integer(AuctionItem::AuctionId))
                    .col(integer(AuctionItem::CreatorId))
                    .col(string(AuctionItem::Name))
                    .col(text_null(AuctionItem::Description))
                    .col(string_null(AuctionItem::ImageUrl))
                    .col(string(AuctionItem::Currency))
                    .col(big_integer(AuctionItem::StartingBid))
                    .col(big_integer(AuctionItem::MinIncrement))
                    .col(timestamp_null(AuctionItem::EndsAt))
                    .col(integer_null(AuctionItem::AntiSnipeWindow))
                    .col(big_integer_null(AuctionItem::CurrentBid))
                    .col(integer_null(AuctionItem::CurrentBidderId))
                    .col(integer(AuctionItem::BidCount).default(0))
                    .col(timestamp_null(AuctionItem::ClosedAt))
                    .col(
                        timestamp(AuctionItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_item_auction_id")
                            .from(AuctionItem::Table, AuctionItem::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_item_creator_id")
                            .from(AuctionItem::Table, AuctionItem::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionItem {
    Table,
    Id,
    AuctionId,
    CreatorId,
    Name,
    Description,
    ImageUrl,
    Currency,
    StartingBid,
    MinIncrement,
    EndsAt,
    AntiSnipeWindow,
    CurrentBid,
    CurrentBidderId,
    BidCount,
    ClosedAt,
    CreatedAt,
}
