//! User-related domain models.

use serde::Deserialize;

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Userinfo payload returned by the identity provider.
///
/// Field aliases cover the common OIDC and social-provider spellings.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthUserInfo {
    #[serde(alias = "id")]
    pub sub: String,
    pub email: String,
    #[serde(alias = "username")]
    pub name: String,
    #[serde(default, alias = "avatar_url")]
    pub picture: Option<String>,
}

pub fn user_into_dto(user: entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email,
        name: user.name,
        avatar_url: user.avatar_url,
        admin: user.admin,
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<entity::user::Model>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(user_into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
