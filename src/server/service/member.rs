use rand::distr::{Alphanumeric, SampleString};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auction::AuctionRepository, invite::InviteRepository, member::MemberRepository},
    error::AppError,
    events::{self, broadcaster::EventBroadcaster, AuctionEvent},
    model::member::{Member, MemberRole},
    service::mailer::Mailer,
};

/// Length of generated invite tokens.
const INVITE_TOKEN_LEN: usize = 32;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
    broadcaster: &'a EventBroadcaster,
    mailer: &'a Mailer,
    /// Base URL for invite links in mails.
    app_url: &'a str,
}

impl<'a> MemberService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        broadcaster: &'a EventBroadcaster,
        mailer: &'a Mailer,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            broadcaster,
            mailer,
            app_url,
        }
    }

    /// Lists members of an auction with their user records.
    pub async fn list(&self, auction_id: i32) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.list_with_users(auction_id).await?)
    }

    /// Changes a member's role.
    ///
    /// The owner's role is immutable, and nobody can be promoted to owner;
    /// ownership only comes from creating the auction.
    pub async fn update_role(
        &self,
        auction_id: i32,
        user_id: i32,
        role: MemberRole,
    ) -> Result<entity::auction_member::Model, AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo
            .find(auction_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if MemberRole::parse(&member.role)? == MemberRole::Owner {
            return Err(AppError::BadRequest(
                "The owner's role cannot be changed".to_string(),
            ));
        }

        let updated = repo
            .update_role(auction_id, user_id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        Ok(updated)
    }

    /// Removes a member. The owner cannot be removed.
    pub async fn remove(&self, auction_id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = MemberRepository::new(self.db);

        let member = repo
            .find(auction_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        if MemberRole::parse(&member.role)? == MemberRole::Owner {
            return Err(AppError::BadRequest(
                "The owner cannot be removed".to_string(),
            ));
        }

        repo.remove(auction_id, user_id).await?;

        Ok(())
    }

    /// Creates an invite and mails the invite link.
    ///
    /// Rejected when an open invite to the same address already exists. Mail
    /// delivery failures are logged, not returned: the invite row exists and
    /// the token can be re-sent.
    pub async fn invite(
        &self,
        auction_id: i32,
        email: String,
        role: MemberRole,
        invited_by: i32,
    ) -> Result<entity::auction_invite::Model, AppError> {
        let auction_repo = AuctionRepository::new(self.db);
        let invite_repo = InviteRepository::new(self.db);

        let auction = auction_repo
            .get_by_id(auction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction not found".to_string()))?;

        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }

        if invite_repo.pending_exists(auction_id, &email).await? {
            return Err(AppError::Conflict(
                "An invite to this address is already pending".to_string(),
            ));
        }

        let token = Alphanumeric.sample_string(&mut rand::rng(), INVITE_TOKEN_LEN);
        let invite = invite_repo
            .create(auction_id, email.clone(), role, token, invited_by)
            .await?;

        let link = format!("{}/invites/{}", self.app_url, invite.token);
        self.mailer
            .send_logged(
                &email,
                &format!("You are invited to \"{}\"", auction.name),
                &format!(
                    "You have been invited to the auction \"{}\" as {}.\n\nJoin here: {}\n",
                    auction.name,
                    role.as_str(),
                    link
                ),
            )
            .await;

        Ok(invite)
    }

    /// Lists pending invites of an auction.
    pub async fn list_invites(
        &self,
        auction_id: i32,
    ) -> Result<Vec<entity::auction_invite::Model>, AppError> {
        let repo = InviteRepository::new(self.db);

        Ok(repo.list_pending(auction_id).await?)
    }

    /// Accepts an invite by token for the calling user.
    ///
    /// The invite carries the role to join with. Accepting while already a
    /// member marks the invite accepted without touching the existing role.
    /// Returns the auction id joined.
    pub async fn accept_invite(&self, token: &str, user_id: i32) -> Result<i32, AppError> {
        let invite_repo = InviteRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let invite = invite_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::NotFound("Invite not found".to_string()))?;

        if invite.accepted_at.is_some() {
            return Err(AppError::BadRequest(
                "This invite has already been used".to_string(),
            ));
        }

        let role = MemberRole::parse(&invite.role)?;
        let (_, inserted) = member_repo
            .add_if_absent(invite.auction_id, user_id, role)
            .await?;

        invite_repo.mark_accepted(invite.id).await?;

        if inserted {
            self.broadcaster.publish(AuctionEvent::new(
                invite.auction_id,
                events::MEMBER_JOINED,
                serde_json::json!({ "auction_id": invite.auction_id, "user_id": user_id }),
            )?);
        }

        Ok(invite.auction_id)
    }
}
