use football_api::{router, telemetry, AppState, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing/logging
    telemetry::init_tracing(&config);

    tracing::info!("Starting football api...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Docs: {}", if config.enable_docs { "enabled" } else { "disabled" });

    if !config.database_path.exists() {
        tracing::warn!(
            "Database {} not found; health checks will report unavailable",
            config.database_path.display()
        );
    } else {
        tracing::info!("Using database {}", config.database_path.display());
    }

    let addr = config.bind_addr();
    let app = router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
