//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//!
//! // Create with all dependencies
//! let (owner, auction, item) = factory::helpers::create_item_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::auction_item::ItemFactory::new(&db, auction.id, owner.id)
//!     .starting_bid(5_000)
//!     .min_increment(500)
//!     .anti_snipe_window(120)
//!     .build()
//!     .await?;
//! ```

pub mod auction;
pub mod auction_invite;
pub mod auction_item;
pub mod auction_member;
pub mod bid;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use auction::create_auction;
pub use auction_invite::create_invite;
pub use auction_item::create_item;
pub use auction_member::create_member;
pub use bid::create_bid;
pub use user::create_user;
