use axum::{
    routing::{get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, auction, bid, item, member, user},
    server::{controller, error::AppError, state::AppState},
};

/// Requests per second allowed on the bid endpoint, per client IP.
const BID_RATE_PER_SECOND: u64 = 1;
const BID_RATE_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::login,
        controller::auth::callback,
        controller::auth::logout,
        controller::auth::current_user,
        controller::auction::create_auction,
        controller::auction::get_auctions,
        controller::auction::get_auction,
        controller::auction::update_auction,
        controller::auction::delete_auction,
        controller::auction::join_auction,
        controller::auction::join_by_link,
        controller::member::get_members,
        controller::member::update_member_role,
        controller::member::remove_member,
        controller::member::create_invite,
        controller::member::get_invites,
        controller::member::accept_invite,
        controller::item::get_items,
        controller::item::get_item,
        controller::item::create_item,
        controller::item::update_item,
        controller::item::delete_item,
        controller::bid::place_bid,
        controller::bid::get_bids,
        controller::events::subscribe,
        controller::admin::get_users,
        controller::admin::set_admin,
    ),
    components(schemas(
        api::ErrorDto,
        auction::AuctionDto,
        auction::CreateAuctionDto,
        auction::UpdateAuctionDto,
        auction::PaginatedAuctionsDto,
        member::MemberDto,
        member::UpdateMemberRoleDto,
        member::InviteDto,
        member::CreateInviteDto,
        item::ItemDto,
        item::CreateItemDto,
        item::UpdateItemDto,
        item::PaginatedItemsDto,
        bid::BidDto,
        bid::PlaceBidDto,
        bid::PaginatedBidsDto,
        user::UserDto,
        user::PaginatedUsersDto,
        user::SetAdminDto,
    ))
)]
struct ApiDoc;

/// Builds the API router.
///
/// The bid endpoint carries an IP-keyed rate limit; everything else relies on
/// the session layer applied in `main`.
pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(BID_RATE_PER_SECOND)
        .burst_size(BID_RATE_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;

    let bid_routes = Router::new()
        .route(
            "/api/auctions/{auction_id}/items/{item_id}/bids",
            post(controller::bid::place_bid).get(controller::bid::get_bids),
        )
        .layer(GovernorLayer::new(governor_config));

    let router = Router::new()
        .route("/api/auth/login", get(controller::auth::login))
        .route("/api/auth/callback", get(controller::auth::callback))
        .route("/api/auth/logout", post(controller::auth::logout))
        .route("/api/auth/user", get(controller::auth::current_user))
        .route(
            "/api/auctions",
            post(controller::auction::create_auction).get(controller::auction::get_auctions),
        )
        .route(
            "/api/auctions/{auction_id}",
            get(controller::auction::get_auction)
                .put(controller::auction::update_auction)
                .delete(controller::auction::delete_auction),
        )
        .route(
            "/api/auctions/{auction_id}/join",
            post(controller::auction::join_auction),
        )
        .route("/api/join/{token}", post(controller::auction::join_by_link))
        .route(
            "/api/auctions/{auction_id}/members",
            get(controller::member::get_members),
        )
        .route(
            "/api/auctions/{auction_id}/members/{user_id}",
            put(controller::member::update_member_role).delete(controller::member::remove_member),
        )
        .route(
            "/api/auctions/{auction_id}/invites",
            post(controller::member::create_invite).get(controller::member::get_invites),
        )
        .route(
            "/api/invites/{token}/accept",
            post(controller::member::accept_invite),
        )
        .route(
            "/api/auctions/{auction_id}/items",
            post(controller::item::create_item).get(controller::item::get_items),
        )
        .route(
            "/api/auctions/{auction_id}/items/{item_id}",
            get(controller::item::get_item)
                .put(controller::item::update_item)
                .delete(controller::item::delete_item),
        )
        .route(
            "/api/auctions/{auction_id}/events",
            get(controller::events::subscribe),
        )
        .route("/api/admin/users", get(controller::admin::get_users))
        .route(
            "/api/admin/users/{user_id}/admin",
            put(controller::admin::set_admin),
        )
        .merge(bid_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    Ok(router)
}
