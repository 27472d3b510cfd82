use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// One of "invite", "link", "open".
    pub join_mode: String,
    /// Token for link-mode joins; rotated never, deleted with the auction.
    #[sea_orm(unique)]
    pub link_token: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::auction_member::Entity")]
    AuctionMember,
    #[sea_orm(has_many = "super::auction_invite::Entity")]
    AuctionInvite,
    #[sea_orm(has_many = "super::auction_item::Entity")]
    AuctionItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::auction_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionMember.def()
    }
}

impl Related<super::auction_invite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionInvite.def()
    }
}

impl Related<super::auction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
