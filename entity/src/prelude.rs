pub use super::auction::Entity as Auction;
pub use super::auction_invite::Entity as AuctionInvite;
pub use super::auction_item::Entity as AuctionItem;
pub use super::auction_member::Entity as AuctionMember;
pub use super::bid::Entity as Bid;
pub use super::user::Entity as User;
