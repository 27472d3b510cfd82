use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub admin: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetAdminDto {
    pub admin: bool,
}
