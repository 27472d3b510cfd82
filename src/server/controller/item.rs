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
        item::{CreateItemDto, ItemDto, PaginatedItemsDto, UpdateItemDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            item::{CreateItemParams, UpdateItemParams},
            member::MemberRole,
        },
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Whether the caller may see bidders behind anonymous bids.
fn reveal_bidders(role: MemberRole) -> bool {
    role >= MemberRole::Admin
}

/// List an auction's items.
///
/// Anonymous highest bidders are hidden from callers below admin.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/items",
    tag = ITEM_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated items", body = PaginatedItemsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = ItemService::new(&state.db, &state.broadcaster);

    let items = service
        .get_paginated(auction_id, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(items.into_dto(user.id, reveal_bidders(role))),
    ))
}

/// Get one item.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The item", body = ItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = ItemService::new(&state.db, &state.broadcaster);

    let item = service.get(auction_id, item_id).await?;

    Ok((
        StatusCode::OK,
        Json(item.into_dto(user.id, reveal_bidders(role))),
    ))
}

/// Create an item.
///
/// # Access Control
/// - `Creator` role or above in the auction
#[utoipa::path(
    post,
    path = "/api/auctions/{auction_id}/items",
    tag = ITEM_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Successfully created item", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Creator)
        .await?;

    let service = ItemService::new(&state.db, &state.broadcaster);

    let params = CreateItemParams::from_dto(auction_id, user.id, payload)?;
    let item = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(item.into_dto(user.id, reveal_bidders(role))),
    ))
}

/// Update an item.
///
/// Creators may edit their own items, admins and owners any item. Economic
/// fields freeze once the first bid lands.
///
/// # Access Control
/// - `Creator` role or above; ownership is checked against the item
#[utoipa::path(
    put,
    path = "/api/auctions/{auction_id}/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Successfully updated item", body = ItemDto),
        (status = 400, description = "Invalid item data or frozen fields changed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not manage this item", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Creator)
        .await?;

    let service = ItemService::new(&state.db, &state.broadcaster);

    let params = UpdateItemParams::from_dto(item_id, auction_id, payload)?;
    let item = service.update(params, user.id, role).await?;

    Ok((
        StatusCode::OK,
        Json(item.into_dto(user.id, reveal_bidders(role))),
    ))
}

/// Delete an item. Rejected once it has bids.
///
/// # Access Control
/// - `Creator` role or above; ownership is checked against the item
#[utoipa::path(
    delete,
    path = "/api/auctions/{auction_id}/items/{item_id}",
    tag = ITEM_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted item"),
        (status = 400, description = "Item already has bids", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not manage this item", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Creator)
        .await?;

    let service = ItemService::new(&state.db, &state.broadcaster);

    service.delete(auction_id, item_id, user.id, role).await?;

    Ok(StatusCode::NO_CONTENT)
}
