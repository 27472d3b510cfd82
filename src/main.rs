mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    events::broadcaster::EventBroadcaster,
    router,
    scheduler::item_closing,
    service::mailer::Mailer,
    startup,
    state::AppState,
};

/// Capacity of the event broadcast channel. Receivers that fall this many
/// events behind start missing events.
const EVENT_CHANNEL_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::session_layer(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let broadcaster = EventBroadcaster::new(EVENT_CHANNEL_CAPACITY);
    let mailer = Mailer::new(
        http_client.clone(),
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );

    item_closing::start_scheduler(db.clone(), broadcaster.clone(), mailer.clone()).await?;

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        config.oauth_userinfo_url.clone(),
        broadcaster,
        mailer,
        config.app_url.clone(),
        config.admin_emails.clone(),
    );

    let app = router::router()?.with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
