mod app;
mod handler;

use command_use_case::{change_seats::HasChangeSeats, organize_webinar::HasOrganizeWebinar};
use query_use_case::get_webinar::HasGetWebinar;
use tower_http::trace::TraceLayer;

pub use self::app::App;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bind")]
    Bind(#[source] std::io::Error),
    #[error("serve")]
    Serve(#[source] std::io::Error),
}

pub fn router<
    T: Clone + HasChangeSeats + HasGetWebinar + HasOrganizeWebinar + Send + Sync + 'static,
>(
    app: T,
) -> axum::Router {
    handler::router()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

pub async fn run<
    T: Clone + HasChangeSeats + HasGetWebinar + HasOrganizeWebinar + Send + Sync + 'static,
>(
    app: T,
    bind_address: &str,
) -> Result<(), Error> {
    let tcp_listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(Error::Bind)?;
    tracing::info!(bind_address, "listening");
    axum::serve(tcp_listener, router(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => tracing::error!(error = ?e, "failed to listen for shutdown signal"),
    }
}
