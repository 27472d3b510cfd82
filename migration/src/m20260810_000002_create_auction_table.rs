use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(pk_auto(Auction::Id))
                    .col(integer(Auction::OwnerId))
                    .col(string(Auction::Name))
                    .col(text_null(Auction::Description))
                    .col(string(Auction::JoinMode))
                    .col(string_uniq(Auction::LinkToken))
                    .col(
                        timestamp(Auction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_owner_id")
                            .from(Auction::Table, Auction::OwnerId)
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
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Auction {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    JoinMode,
    LinkToken,
    CreatedAt,
}
