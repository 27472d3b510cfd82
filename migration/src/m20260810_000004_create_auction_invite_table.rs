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
                    .table(AuctionInvite::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionInvite::Id))
                    .col(integer(AuctionInvite::AuctionId))
                    .col(string(AuctionInvite::Email))
                    .col(string(AuctionInvite::Role))
                    .col(string_uniq(AuctionInvite::Token))
                    .col(integer(AuctionInvite::InvitedBy))
                    .col(
                        timestamp(AuctionInvite::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(AuctionInvite::AcceptedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_invite_auction_id")
                            .from(AuctionInvite::Table, AuctionInvite::AuctionId)
                            .to(Auction::Table, Auction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_invite_invited_by")
                            .from(AuctionInvite::Table, AuctionInvite::InvitedBy)
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
            .drop_table(Table::drop().table(AuctionInvite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionInvite {
    Table,
    Id,
    AuctionId,
    Email,
    Role,
    Token,
    InvitedBy,
    CreatedAt,
    AcceptedAt,
}
