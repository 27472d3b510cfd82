//! Settlement of expired items.
//!
//! A minutely job closes items whose deadline passed, announces the close to
//! the auction and mails the winner and the item's creator. Closing is a
//! conditional update, so overlapping runs settle each item exactly once.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{item::ItemRepository, user::UserRepository},
    error::AppError,
    events::{self, broadcaster::EventBroadcaster, AuctionEvent},
    service::mailer::Mailer,
};

/// Starts the item closing scheduler, running every minute.
pub async fn start_scheduler(
    db: DatabaseConnection,
    broadcaster: EventBroadcaster,
    mailer: Mailer,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let broadcaster = broadcaster.clone();
        let mailer = mailer.clone();

        Box::pin(async move {
            if let Err(e) = close_due_items(&db, &broadcaster, &mailer).await {
                tracing::error!("Error closing due items: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Item closing scheduler started");

    Ok(())
}

/// Closes every open item whose deadline has passed.
///
/// Each item is handled independently; a failure on one item is logged and
/// does not block the rest of the batch.
pub async fn close_due_items(
    db: &DatabaseConnection,
    broadcaster: &EventBroadcaster,
    mailer: &Mailer,
) -> Result<(), AppError> {
    let repo = ItemRepository::new(db);
    let now = Utc::now();

    for item in repo.find_due(now).await? {
        // Another run may have closed it in the meantime.
        if repo.close(item.id, now).await? == 0 {
            continue;
        }

        tracing::info!(
            "Closed item {} (\"{}\") at {:?}",
            item.id,
            item.name,
            item.current_bid
        );

        if let Err(e) = announce_close(db, broadcaster, mailer, &item).await {
            tracing::error!("Error announcing close of item {}: {}", item.id, e);
        }
    }

    Ok(())
}

async fn announce_close(
    db: &DatabaseConnection,
    broadcaster: &EventBroadcaster,
    mailer: &Mailer,
    item: &entity::auction_item::Model,
) -> Result<(), AppError> {
    broadcaster.publish(AuctionEvent::new(
        item.auction_id,
        events::ITEM_CLOSED,
        serde_json::json!({
            "auction_id": item.auction_id,
            "item_id": item.id,
            "winning_bid": item.current_bid,
            "bid_count": item.bid_count,
        }),
    )?);

    let user_repo = UserRepository::new(db);

    if let (Some(winner_id), Some(winning_bid)) = (item.current_bidder_id, item.current_bid) {
        if let Some(winner) = user_repo.find_by_id(winner_id).await? {
            mailer
                .send_logged(
                    &winner.email,
                    &format!("You won \"{}\"", item.name),
                    &format!(
                        "Your bid of {} {} won \"{}\". Congratulations!\n",
                        winning_bid, item.currency, item.name
                    ),
                )
                .await;
        }

        if let Some(creator) = user_repo.find_by_id(item.creator_id).await? {
            mailer
                .send_logged(
                    &creator.email,
                    &format!("\"{}\" has sold", item.name),
                    &format!(
                        "Bidding on \"{}\" has closed with a winning bid of {} {} after {} bids.\n",
                        item.name, winning_bid, item.currency, item.bid_count
                    ),
                )
                .await;
        }
    } else if let Some(creator) = user_repo.find_by_id(item.creator_id).await? {
        mailer
            .send_logged(
                &creator.email,
                &format!("\"{}\" closed without bids", item.name),
                &format!("Bidding on \"{}\" has closed without any bids.\n", item.name),
            )
            .await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory, factory::auction_item::ItemFactory};

    fn deps() -> (EventBroadcaster, Mailer) {
        (
            EventBroadcaster::new(8),
            Mailer::new(
                reqwest::Client::new(),
                None,
                None,
                "noreply@example.com".to_string(),
            ),
        )
    }

    #[tokio::test]
    async fn settles_only_expired_items() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (broadcaster, mailer) = deps();

        let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
        let expired = ItemFactory::new(db, auction.id, owner.id)
            .ends_at(Utc::now() - Duration::minutes(1))
            .build()
            .await?;
        let running = ItemFactory::new(db, auction.id, owner.id)
            .ends_at(Utc::now() + Duration::hours(1))
            .build()
            .await?;

        close_due_items(db, &broadcaster, &mailer).await?;

        let repo = ItemRepository::new(db);
        assert!(repo.get_by_id(expired.id).await?.unwrap().closed_at.is_some());
        assert!(repo.get_by_id(running.id).await?.unwrap().closed_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn repeated_runs_are_noops() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_auction_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (broadcaster, mailer) = deps();

        let (owner, auction) = factory::helpers::create_auction_with_owner(db).await?;
        let item = ItemFactory::new(db, auction.id, owner.id)
            .ends_at(Utc::now() - Duration::minutes(1))
            .build()
            .await?;

        close_due_items(db, &broadcaster, &mailer).await?;

        let repo = ItemRepository::new(db);
        let first_close = repo.get_by_id(item.id).await?.unwrap().closed_at;

        close_due_items(db, &broadcaster, &mailer).await?;

        assert_eq!(repo.get_by_id(item.id).await?.unwrap().closed_at, first_close);

        Ok(())
    }
}
