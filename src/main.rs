use todo_service::{config::TodoConfig, observability::init_tracing, startup::Application};

#[tokio::main]
async fn main() -> Result<(), todo_service::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = TodoConfig::load()?;

    init_tracing("info");

    tracing::info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Starting todo service"
    );

    let app = Application::build(config).await?;

    tracing::info!(port = app.port(), "Listening");

    app.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
