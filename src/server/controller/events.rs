use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, model::member::MemberRole, state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENTS_TAG: &str = "events";

/// Subscribe to an auction's event stream.
///
/// Server-sent events carrying bid, item and membership updates for one
/// auction. Clients that fall behind the channel capacity miss events and
/// should refetch on reconnect.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/events",
    tag = EVENTS_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "SSE stream of auction events"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    Ok(state.broadcaster.sse_response(auction_id))
}
