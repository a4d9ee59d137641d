//! CLI command definitions and dispatch.

pub mod album;
pub mod asset;
pub mod health;
pub mod shared_link;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use assethub_auth::AccessCore;
use assethub_core::config::AppConfig;
use assethub_core::error::AppError;
use assethub_database::DatabasePool;
use assethub_database::repositories::{
    PgAccessRepository, PgAlbumAssetRepository, PgAlbumRepository, PgAssetRepository,
    PgSharedLinkAssetRepository, PgSharedLinkRepository,
};
use assethub_service::{AlbumService, AssetService, SharedLinkService};

use crate::output::OutputFormat;

/// AssetHub: bulk album and shared link membership tool
#[derive(Debug, Parser)]
#[command(name = "assethub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Album membership
    Album(album::AlbumArgs),
    /// Individual shared link membership
    SharedLink(shared_link::SharedLinkArgs),
    /// Asset trash and statistics
    Asset(asset::AssetArgs),
    /// Check database connectivity
    Health,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        info!(version = env!("CARGO_PKG_VERSION"), "Starting AssetHub");
        let db = DatabasePool::connect(&config.database).await?;

        let result = match &self.command {
            Commands::Album(args) => album::execute(args, &Services::new(&db), self.format).await,
            Commands::SharedLink(args) => {
                shared_link::execute(args, &Services::new(&db), self.format).await
            }
            Commands::Asset(args) => asset::execute(args, &Services::new(&db), self.format).await,
            Commands::Health => health::execute(&db).await,
        };

        db.close().await;
        result
    }
}

/// Services wired to PostgreSQL repositories.
pub struct Services {
    /// Album membership service
    pub albums: AlbumService,
    /// Shared link membership service
    pub shared_links: SharedLinkService,
    /// Asset trash and statistics service
    pub assets: AssetService,
}

impl Services {
    /// Build every service over one connection pool.
    pub fn new(db: &DatabasePool) -> Self {
        let pool = db.pool().clone();
        let access = Arc::new(AccessCore::new(Arc::new(PgAccessRepository::new(
            pool.clone(),
        ))));
        let asset_repo = Arc::new(PgAssetRepository::new(pool.clone()));

        Self {
            albums: AlbumService::new(
                Arc::clone(&access),
                Arc::new(PgAlbumRepository::new(pool.clone())),
                asset_repo.clone(),
                Arc::new(PgAlbumAssetRepository::new(pool.clone())),
            ),
            shared_links: SharedLinkService::new(
                Arc::clone(&access),
                Arc::new(PgSharedLinkRepository::new(pool.clone())),
                Arc::new(PgSharedLinkAssetRepository::new(pool)),
            ),
            assets: AssetService::new(access, asset_repo),
        }
    }
}
