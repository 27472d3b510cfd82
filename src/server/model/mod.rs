//! Domain models and operation-specific parameter types.

pub mod auction;
pub mod bid;
pub mod item;
pub mod member;
pub mod user;
