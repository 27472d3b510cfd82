//! Wire DTOs shared by the API surface.

pub mod api;
pub mod auction;
pub mod bid;
pub mod item;
pub mod member;
pub mod user;
