use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use portfolio_content_api::{
    constants::START_TIME,
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    shared_repos::SharedRepositories,
    utils::media::MediaConfig,
    web::{cors::build_cors, telemetry::init_tracing},
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Failed to load configuration")?;
    init_tracing(&config);
    once_cell::sync::Lazy::force(&START_TIME);

    tracing::info!("Loaded configuration: {:?}", config);

    let pool = create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let media = MediaConfig::new(&config.media_url, config.public_base_url.as_deref())
        .context("Invalid public_base_url")?;

    let app_state = web::Data::new(AppState::new(SharedRepositories::postgres(pool), media));

    app_state.hero_handler
        .initialize()
        .await
        .context("Failed to initialise hero section")?;

    let server_addr = config.server_addr();
    let cors_origins = config.cors_origins();

    tracing::info!(
        "🚀 Starting {} v{} on {} ({})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.env
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::select! {
        res = server => res.context("HTTP server error")?,
        _ = shutdown_signal() => {}
    }

    tracing::info!("Server stopped");
    Ok(())
}
