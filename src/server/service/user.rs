use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::PaginatedUsers,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated users for the platform-admin screen.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let repo = UserRepository::new(self.db);

        let (users, total) = repo.get_all_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Sets or clears the platform-admin flag. Admins cannot demote
    /// themselves, so the platform always keeps at least one admin.
    pub async fn set_admin(
        &self,
        caller_id: i32,
        user_id: i32,
        admin: bool,
    ) -> Result<entity::user::Model, AppError> {
        if caller_id == user_id && !admin {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin flag".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        let user = repo
            .set_admin(user_id, admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }
}
