use sea_orm::entity::prelude::*;

/// A biddable listing. Money columns are integer minor units; `current_bid`
/// and `current_bidder_id` are denormalized from the bid table and updated
/// atomically by the bid transition.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub auction_id: i32,
    pub creator_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// ISO 4217 currency code.
    pub currency: String,
    pub starting_bid: i64,
    pub min_increment: i64,
    pub ends_at: Option<DateTimeUtc>,
    /// Anti-snipe window in seconds; a bid inside the window pushes
    /// `ends_at` to now + window.
    pub anti_snipe_window: Option<i32>,
    pub current_bid: Option<i64>,
    pub current_bidder_id: Option<i32>,
    pub bid_count: i32,
    pub closed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auction::Entity",
        from = "Column::AuctionId",
        to = "super::auction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Auction,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(has_many = "super::bid::Entity")]
    Bid,
}

impl Related<super::auction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auction.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
