mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, logger, router, scheduler::status_report, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    logger::init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    startup::check_for_admin(&db, &config).await?;

    let state = AppState::new(db.clone(), config);

    // Keep the scheduler alive for the lifetime of the server.
    let _scheduler = status_report::start_scheduler(db, state.windows()).await?;

    let bind_address = state.config.bind_address.clone();
    let app = router::router(state).layer(session);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
