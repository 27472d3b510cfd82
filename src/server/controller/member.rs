use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateInviteDto, InviteDto, MemberDto, UpdateMemberRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::member::MemberRole,
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

fn invite_into_dto(invite: entity::auction_invite::Model) -> InviteDto {
    InviteDto {
        id: invite.id,
        email: invite.email,
        role: invite.role,
        created_at: invite.created_at,
    }
}

/// List members of an auction.
///
/// # Access Control
/// - Any member of the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/members",
    tag = MEMBER_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Members of the auction", body = Vec<MemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Bidder)
        .await?;

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    let members = service.list(auction_id).await?;

    Ok((
        StatusCode::OK,
        Json(members.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Change a member's role.
///
/// The owner role can be neither assigned nor taken away.
///
/// # Access Control
/// - `Admin` role or above in the auction
#[utoipa::path(
    put,
    path = "/api/auctions/{auction_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    request_body = UpdateMemberRoleDto,
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, description = "Invalid role or target is the owner", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_role(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Admin)
        .await?;

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    let role = MemberRole::parse_assignable(&payload.role)?;
    service.update_role(auction_id, user_id, role).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a member from an auction.
///
/// Members may always remove themselves (leave); removing anyone else takes
/// the admin role.
///
/// # Access Control
/// - `Admin` role or above in the auction, or the member themself
#[utoipa::path(
    delete,
    path = "/api/auctions/{auction_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "Target is the owner", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((auction_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let (caller, _) = guard.require_member(auction_id, MemberRole::Bidder).await?;

    if caller.id != user_id {
        guard.require_member(auction_id, MemberRole::Admin).await?;
    }

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    service.remove(auction_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Invite a user by email.
///
/// Creates the invite and mails the join link to the given address.
///
/// # Access Control
/// - `Admin` role or above in the auction
#[utoipa::path(
    post,
    path = "/api/auctions/{auction_id}/invites",
    tag = MEMBER_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    request_body = CreateInviteDto,
    responses(
        (status = 201, description = "Invite created", body = InviteDto),
        (status = 400, description = "Invalid email or role", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 409, description = "An invite to this address is already pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
    Json(payload): Json<CreateInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, _) = AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Admin)
        .await?;

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    let role = MemberRole::parse_assignable(&payload.role)?;
    let invite = service
        .invite(auction_id, payload.email, role, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(invite_into_dto(invite))))
}

/// List pending invites of an auction.
///
/// # Access Control
/// - `Admin` role or above in the auction
#[utoipa::path(
    get,
    path = "/api/auctions/{auction_id}/invites",
    tag = MEMBER_TAG,
    params(
        ("auction_id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Pending invites", body = Vec<InviteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invites(
    State(state): State<AppState>,
    session: Session,
    Path(auction_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require_member(auction_id, MemberRole::Admin)
        .await?;

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    let invites = service.list_invites(auction_id).await?;

    Ok((
        StatusCode::OK,
        Json(invites.into_iter().map(invite_into_dto).collect::<Vec<_>>()),
    ))
}

/// Accept an invite by token.
///
/// Joins the caller with the role the invite carries and consumes the token.
#[utoipa::path(
    post,
    path = "/api/invites/{token}/accept",
    tag = MEMBER_TAG,
    params(
        ("token" = String, Path, description = "Invite token")
    ),
    responses(
        (status = 200, description = "Invite accepted, returns the auction id", body = i32),
        (status = 400, description = "Invite already used", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MemberService::new(&state.db, &state.broadcaster, &state.mailer, &state.app_url);

    let auction_id = service.accept_invite(&token, user.id).await?;

    Ok((StatusCode::OK, Json(auction_id)))
}
