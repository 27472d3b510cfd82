use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::user_into_dto,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List all users, paginated.
///
/// # Access Control
/// - Platform admins only
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = service.get_all_paginated(params.page, params.entries).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Grant or revoke the platform-admin flag.
///
/// Admins cannot revoke their own flag.
///
/// # Access Control
/// - Platform admins only
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/admin",
    tag = ADMIN_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Self-demotion rejected", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let user = service.set_admin(caller.id, user_id, payload.admin).await?;

    Ok((StatusCode::OK, Json(user_into_dto(user))))
}
