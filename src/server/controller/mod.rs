//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into
//! domain params and delegate to the service layer. They own the HTTP
//! concerns: status codes, pagination query parsing and OpenAPI annotations.

pub mod admin;
pub mod auction;
pub mod auth;
pub mod bid;
pub mod events;
pub mod item;
pub mod member;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
