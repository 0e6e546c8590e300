use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xerago_api::{app, AppState};
use xerago_core::{ContentRepository, RandomSource, SeededRandom, ThreadRandom};
use xerago_store::{apply_seed, Config, DbClient, MemoryRepository, PostgresRepository, RepositoryBackend, SeedFile, SeedTarget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xerago_api=debug,xerago_coupons=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Xerago API on port {}", config.server.port);

    let (repo, seeder): (Arc<dyn ContentRepository>, Arc<dyn SeedTarget>) = match config.repository.backend {
        RepositoryBackend::Memory => {
            tracing::info!("Using in-memory content repository");
            let memory = Arc::new(MemoryRepository::new());
            let repo: Arc<dyn ContentRepository> = memory.clone();
            let seeder: Arc<dyn SeedTarget> = memory;
            (repo, seeder)
        }
        RepositoryBackend::Postgres => {
            let url = config
                .repository
                .database_url
                .as_deref()
                .context("repository.database_url is required for the postgres backend")?;
            let db = DbClient::new(url).await.context("Failed to connect to Postgres")?;
            db.migrate().await?;

            let postgres = Arc::new(PostgresRepository::new(db.pool.clone()));
            let repo: Arc<dyn ContentRepository> = postgres.clone();
            let seeder: Arc<dyn SeedTarget> = postgres;
            (repo, seeder)
        }
    };

    if let Some(seed_path) = &config.repository.seed {
        tracing::info!("Seeding content from {}", seed_path);
        let seed = SeedFile::read(seed_path).await?;
        apply_seed(seeder.as_ref(), &seed).await?;
    }

    let random: Arc<dyn RandomSource> = match config.random.seed {
        Some(seed) => {
            tracing::info!("Coupon selection seeded with {}", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let app = app(AppState::new(repo, random, config.coupons.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
