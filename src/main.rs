use anyhow::Result;
use article_service::application::{
    ports::{time::Clock, util::IdGenerator},
    services::{ApplicationServices, ArticleUsecase},
};
use article_service::config::AppConfig;
use article_service::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_service::infrastructure::{
    database, repositories::SqliteArticleRepository, time::SystemClock, util::UuidIdGenerator,
};
use article_service::presentation::http::{
    routes::{RouterOptions, build_router},
    server::serve_until,
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = repo;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);

    let usecase: Arc<dyn ArticleUsecase> = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        clock,
        ids,
    ));

    let app = build_router(HttpState { usecase }, RouterOptions::from(&config));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    serve_until(listener, app, shutdown_signal(), config.shutdown_grace()).await?;

    pool.close().await;
    tracing::info!("shut down gracefully");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
