//! Membership factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a membership row with the given role string
/// ("bidder", "creator", "admin" or "owner").
pub async fn create_member(
    db: &DatabaseConnection,
    auction_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::auction_member::Model, DbErr> {
    entity::auction_member::ActiveModel {
        id: ActiveValue::NotSet,
        auction_id: ActiveValue::Set(auction_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
