use anyhow::Result;
use portfolio::{AppState, Config};
use portfolio_contact::{Composer, SubmissionHandler};
use portfolio_notification::EmailService;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
    dry_run: bool,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let composer = Composer::new(
        config.email.from_address.to_owned(),
        config.email.contact_address.to_owned(),
    );
    let handler = if dry_run {
        SubmissionHandler::new(EmailService::new_mock(&config.email), composer)
    } else {
        SubmissionHandler::new(EmailService::new(&config.email)?, composer)
    };

    let app = portfolio::router(AppState { handler })
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
