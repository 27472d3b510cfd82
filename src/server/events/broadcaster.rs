//! Broadcast channel behind the per-auction SSE streams.

use std::convert::Infallible;
use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use super::AuctionEvent;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);

/// Manages client subscriptions and event distribution.
///
/// Receivers that lag beyond the channel capacity miss events; that is the
/// broadcast contract and acceptable for UI refresh signals.
#[derive(Clone)]
pub struct EventBroadcaster {
    tx: broadcast::Sender<AuctionEvent>,
}

impl EventBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event, ignoring whether anyone is listening.
    pub fn publish(&self, event: AuctionEvent) {
        let receivers = self.tx.receiver_count();
        if let Ok(delivered) = self.tx.send(event) {
            tracing::debug!("broadcast event to {} of {} receivers", delivered, receivers);
        }
    }

    /// Current number of connected subscribers across all auctions.
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Creates an SSE event stream scoped to one auction.
    pub fn subscribe_stream(
        &self,
        auction_id: i32,
    ) -> impl Stream<Item = Result<Event, Infallible>> {
        let rx = self.tx.subscribe();

        BroadcastStream::new(rx).filter_map(move |result| async move {
            match result {
                Ok(event) if event.auction_id == auction_id => Event::default()
                    .event(event.name)
                    .json_data(&event.data)
                    .ok()
                    .map(Ok),
                Ok(_) => None,
                Err(e) => {
                    // Lagged receiver: skip the gap and keep streaming.
                    tracing::warn!("SSE subscriber error: {:?}", e);
                    None
                }
            }
        })
    }

    /// Builds the SSE response for a new subscriber.
    pub fn sse_response(
        &self,
        auction_id: i32,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        tracing::debug!(
            "new SSE subscriber for auction {}, total clients: {}",
            auction_id,
            self.client_count()
        );

        Sse::new(self.subscribe_stream(auction_id)).keep_alive(
            KeepAlive::new()
                .interval(KEEP_ALIVE_INTERVAL)
                .text("keep-alive"),
        )
    }
}
