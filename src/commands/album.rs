//! Album membership CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::error::AppError;
use assethub_core::types::id::{AlbumId, AssetId, UserId};
use assethub_core::types::pagination::PageRequest;
use assethub_entity::bulk::BulkIdsDto;
use assethub_service::AuthContext;

use super::Services;
use crate::output::{self, OutputFormat};

/// Arguments for album commands
#[derive(Debug, Args)]
pub struct AlbumArgs {
    /// Album subcommand
    #[command(subcommand)]
    pub command: AlbumCommand,
}

/// Album subcommands
#[derive(Debug, Subcommand)]
pub enum AlbumCommand {
    /// Add assets to an album
    Add {
        /// Acting user
        #[arg(short, long)]
        user: UserId,
        /// Target album
        #[arg(short, long)]
        album: AlbumId,
        /// Asset ids, in order; repeats are reported as duplicates
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
    /// Remove assets from an album
    Remove {
        /// Acting user
        #[arg(short, long)]
        user: UserId,
        /// Target album
        #[arg(short, long)]
        album: AlbumId,
        /// Asset ids, in order
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
    /// List the assets of an album, newest first
    List {
        /// Acting user
        #[arg(short, long)]
        user: UserId,
        /// Album to list
        #[arg(short, long)]
        album: AlbumId,
        /// Rows to skip
        #[arg(long, default_value_t = 0)]
        skip: u64,
        /// Rows to return
        #[arg(long, default_value_t = 250)]
        take: u64,
    },
}

/// Album asset display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    /// Asset ID
    id: String,
    /// Asset type
    asset_type: String,
    /// Original path
    path: String,
    /// Captured at
    taken: String,
}

/// Execute album commands
pub async fn execute(
    args: &AlbumArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        AlbumCommand::Add {
            user,
            album,
            assets,
        } => {
            let results = services
                .albums
                .add_assets(
                    &AuthContext::user(*user),
                    BulkIdsDto::new(*album, assets.iter().copied()),
                )
                .await?;
            output::print_results(&results, format);
        }
        AlbumCommand::Remove {
            user,
            album,
            assets,
        } => {
            let results = services
                .albums
                .remove_assets(
                    &AuthContext::user(*user),
                    BulkIdsDto::new(*album, assets.iter().copied()),
                )
                .await?;
            output::print_results(&results, format);
        }
        AlbumCommand::List {
            user,
            album,
            skip,
            take,
        } => {
            let request = PageRequest::new(*skip, *take);
            let page = services
                .albums
                .get_assets(&AuthContext::user(*user), *album, request)
                .await?;

            let rows: Vec<AssetRow> = page
                .items
                .iter()
                .map(|a| AssetRow {
                    id: a.id.to_string(),
                    asset_type: format!("{:?}", a.asset_type),
                    path: a.original_path.clone(),
                    taken: a.file_created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            if page.has_next_page && format == OutputFormat::Table {
                println!(
                    "More results: --skip {}",
                    request.skip.saturating_add(page.items.len() as u64)
                );
            }
        }
    }

    Ok(())
}
