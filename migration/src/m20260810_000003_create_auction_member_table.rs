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
                    .table(AuctionMember::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionMember::Id))
                    .col(integer(AuctionMember::AuctionId))
                    .col(integer(AuctionMember::UserId))
                    .col(string(AuctionMember::Role))
                    .col(
                        timestamp(AuctionMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_member_auction_id")
                            .from(AuctionMember::Table, AuctionMember::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_member_user_id")
                            .from(AuctionMember::Table, AuctionMember::UserId)
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
                    .name("idx_auction_member_auction_user")
                    .table(AuctionMember::Table)
                    .col(AuctionMember::AuctionId)
                    .col(AuctionMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionMember {
    Table,
    Id,
    AuctionId,
    UserId,
    Role,
    JoinedAt,
}
