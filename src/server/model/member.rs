//! Membership roles and enriched member models.

use sea_orm::DbErr;

use crate::model::member::MemberDto;
use crate::server::error::AppError;

/// Role of a user within an auction.
///
/// Ordering reflects capability: every role includes the capabilities of the
/// roles below it, so guards compare with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemberRole {
    Bidder,
    Creator,
    Admin,
    Owner,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bidder => "bidder",
            Self::Creator => "creator",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// Parses a role from its storage representation.
    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "bidder" => Ok(Self::Bidder),
            "creator" => Ok(Self::Creator),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            other => Err(DbErr::Custom(format!("Unknown member role: {}", other))),
        }
    }

    /// Parses a role from client input. Owner cannot be assigned through the
    /// API; it is granted only at auction creation.
    pub fn parse_assignable(value: &str) -> Result<Self, AppError> {
        match value {
            "bidder" => Ok(Self::Bidder),
            "creator" => Ok(Self::Creator),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::BadRequest(format!(
                "Invalid member role: {}",
                other
            ))),
        }
    }
}

/// A membership row enriched with the member's user record.
#[derive(Debug, Clone)]
pub struct Member {
    pub member: entity::auction_member::Model,
    pub user: Option<entity::user::Model>,
}

impl Member {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            user_id: self.member.user_id,
            name: self
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| format!("Unknown User ({})", self.member.user_id)),
            avatar_url: self.user.and_then(|u| u.avatar_url),
            role: self.member.role.clone(),
            joined_at: self.member.joined_at,
        }
    }
}
