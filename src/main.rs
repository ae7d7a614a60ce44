use anyhow::Result;
use catalog_core::application::{
    ports::{access::AccessGate, storage::ImageStorage},
    services::ApplicationServices,
};
use catalog_core::config::{AdminSecret, AppConfig};
use catalog_core::domain::{category::CategoryRepository, product::ProductRepository};
use catalog_core::infrastructure::{
    database,
    repositories::{PostgresCategoryRepository, PostgresProductRepository},
    security::Argon2AccessGate,
    storage::LocalImageStorage,
};
use catalog_core::presentation::http::{
    routes::{RouterOptions, build_router},
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool));

    let access_gate: Arc<dyn AccessGate> = Arc::new(build_access_gate(&config).await?);

    let storage = LocalImageStorage::new(config.upload_dir().clone());
    storage.ensure_root().await?;
    let image_storage: Arc<dyn ImageStorage> = Arc::new(storage);

    let services =
        ApplicationServices::new(category_repo, product_repo, access_gate, image_storage);
    let state = HttpState::new(services);

    let options = RouterOptions {
        upload_dir: config.upload_dir().clone(),
        max_upload_bytes: config.max_upload_bytes(),
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_access_gate(config: &AppConfig) -> Result<Argon2AccessGate> {
    let gate = match config.admin_secret() {
        AdminSecret::Hash(hash) => Argon2AccessGate::from_hash(hash)?,
        AdminSecret::Plain(password) => Argon2AccessGate::from_password(password).await?,
        AdminSecret::None => {
            tracing::warn!("no admin password configured; category changes are unrestricted");
            Argon2AccessGate::open()
        }
    };
    Ok(gate)
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
