use std::process::ExitCode;

use api_template::{build_app, Settings, DOCS_PATH};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("api_template={level},tower_http={level}"))
            }),
        )
        .init();

    let app = build_app(&settings);

    let listener = match tokio::net::TcpListener::bind(settings.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", settings.listen_addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "{} ({}) listening on {}",
        settings.project_name,
        settings.environment,
        settings.listen_addr
    );
    tracing::info!("Swagger UI at http://{}{}", settings.listen_addr, DOCS_PATH);
    tracing::info!(
        "OpenAPI document at http://{}{}",
        settings.listen_addr,
        settings.openapi_url()
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("Shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
