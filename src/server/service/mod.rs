pub mod auction;
pub mod auth;
pub mod bid;
pub mod item;
pub mod mailer;
pub mod member;
pub mod user;
