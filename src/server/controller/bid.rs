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
        bid::{BidDto, PaginatedBidsDto, PlaceBidDto},
        item::ItemDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            bid::{BidWithUser, PlaceBidOutcome, PlaceBidParams},
            item::ItemWithVisibility,
            member::MemberRole,
        },
        service::bid::BidService,
        state::AppState,
    },
};

/// Tag for grouping bid endpoints in OpenAPI documentation
pub static BID_TAG: &str = "bid";

fn reveal_bidders(role: MemberRole) -> bool {
    role >= MemberRole::Admin
}

/// Place a bid on an item.
///
/// The request carries the current bid the client last saw. When it no longer
/// matches the stored state, or another bid wins the race, the response is
/// 409 Conflict with the fresh item so the client can retry.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    post,
    path = "/api/auctions/{auction_id}/items/{item_id}/bids",
    tag = BID_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = PlaceBidDto,
    responses(
        (status = 201, description = "Bid placed", body = BidDto),
        (status = 400, description = "Bid rejected by validation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 409, description = "Bid lost a race or the item is closed, body is the fresh item", body = ItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_bid(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = BidService::new(&state.db, &state.broadcaster, &state.mailer);

    let outcome = service
        .place(
            auction_id,
            PlaceBidParams {
                item_id,
                bidder_id: user.id,
                amount: payload.amount,
                anonymous: payload.anonymous,
                last_seen_bid: payload.last_seen_bid,
            },
        )
        .await?;

    match outcome {
        PlaceBidOutcome::Placed { bid, .. } => {
            let dto = BidWithUser {
                bid,
                user: Some(user.clone()),
            }
            .into_dto(user.id, reveal_bidders(role));

            Ok((StatusCode::CREATED, Json(dto)).into_response())
        }
        PlaceBidOutcome::Conflict { item } => {
            let repo = crate::server::data::item::ItemRepository::new(&state.db);
            let highest_anonymous = repo
                .get_with_visibility(item.id)
                .await?
                .map(|r| r.highest_anonymous)
                .unwrap_or(false);

            let dto = ItemWithVisibility {
                item,
                highest_anonymous,
            }
            .into_dto(user.id, reveal_bidders(role));

            Ok((StatusCode::CONFLICT, Json(dto)).into_response())
        }
    }
}

/// Get an item's bid history, paginated and newest first.
///
/// Anonymous bids hide the bidder from everyone but the bidder themself and
/// auction admins.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/items/{item_id}/bids",
    tag = BID_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("item_id" = i32, Path, description = "Item ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated bid history", body = PaginatedBidsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bids(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, item_id)): Path<(i32, i32)>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (user, role) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = BidService::new(&state.db, &state.broadcaster, &state.mailer);

    let bids = service
        .get_paginated(auction_id, item_id, params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(bids.into_dto(user.id, reveal_bidders(role))),
    ))
}
