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
        auction::{AuctionDto, CreateAuctionDto, PaginatedAuctionsDto, UpdateAuctionDto},
        member::MemberDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auction::{CreateAuctionParams, UpdateAuctionParams},
            member::{Member, MemberRole},
        },
        service::auction::AuctionService,
        state::AppState,
    },
};

/// Tag for grouping auction endpoints in OpenAPI documentation
pub static AUCTION_TAG: &str = "auction";

/// Create a new auction.
///
/// The caller becomes the auction's owner and its first member.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/auctions",
    tag = AUCTION_TAG,
    request_body = CreateAuctionDto,
    responses(
        (status = 201, description = "Successfully created auction", body = AuctionDto),
        (status = 400, description = "Invalid auction data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_auction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let params = CreateAuctionParams::from_dto(payload)?;
    let auction = service.create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(auction.into_dto())))
}

/// Get the caller's auctions, paginated.
#[utoipa::path(
    get,
    path = "/api/auctions",
    tag = AUCTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated auctions the caller belongs to", body = PaginatedAuctionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auctions(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let auctions = service
        .get_for_user_paginated(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(auctions.into_dto())))
}

/// Get one auction.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "The auction", body = AuctionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let auction = service.get_for_member(auction_id, role).await?;

    Ok((StatusCode::OK, Json(auction.into_dto())))
}

/// Update an auction's name, description and join mode.
///
/// # Access Control
/// - `Admin` role or above in the auction
#[utoipa::path(
    put,
    path = "/api/auctions/{auction_id}",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    request_body = UpdateAuctionDto,
    responses(
        (status = 200, description = "Successfully updated auction", body = AuctionDto),
        (status = 400, description = "Invalid auction data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_auction(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
    Json(payload): Json<UpdateAuctionDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Admin)
        .await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let params = UpdateAuctionParams::from_dto(auction_id, payload)?;
    let auction = service.update(params, role).await?;

    Ok((StatusCode::OK, Json(auction.into_dto())))
}

/// Delete an auction and everything in it.
///
/// # Access Control
/// - `Owner` only
#[utoipa::path(
    delete,
    path = "/api/auctions/{auction_id}",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted auction"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_auction(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Owner)
        .await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    service.delete(auction_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join an open auction as bidder.
#[utoipa::path(
    post,
    path = "/api/auctions/{auction_id}/join",
    tag = AUCTION_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Joined the auction", body = MemberDto),
        (status = 400, description = "Auction is not open", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_auction(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let member = service.join_open(auction_id, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            Member {
                member,
                user: Some(user),
            }
            .into_dto(),
        ),
    ))
}

/// Join an auction through its link token.
#[utoipa::path(
    post,
    path = "/api/join/{token}",
    tag = AUCTION_TAG,
    params(
        ("token" = String, Path, description = "Link token")
    ),
    responses(
        (status = 200, description = "Joined the auction", body = MemberDto),
        (status = 400, description = "Auction is invite-only", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid join link", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_by_link(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = AuctionService::new(&state.db, &state.broadcaster);

    let member = service.join_by_link(&token, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            Member {
                member,
                user: Some(user),
            }
            .into_dto(),
        ),
    ))
}
