//! SeaORM entity models for the auction platform schema.

pub mod auction;
pub mod auction_invite;
pub mod auction_item;
pub mod auction_member;
pub mod bid;
pub mod prelude;
pub mod user;
