//! Asset trash and statistics CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::error::AppError;
use assethub_core::types::id::{AssetId, UserId};
use assethub_entity::asset::AssetStatsOptions;
use assethub_service::AuthContext;

use super::Services;
use crate::output::{self, OutputFormat};

/// Arguments for asset commands
#[derive(Debug, Args)]
pub struct AssetArgs {
    /// Asset subcommand
    #[command(subcommand)]
    pub command: AssetCommand,
}

/// Asset subcommands
#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// Count a user's assets by type
    Stats {
        /// Owner of the assets
        #[arg(short, long)]
        user: UserId,
        /// Only archived (true) or only unarchived (false) assets
        #[arg(long)]
        archived: Option<bool>,
        /// Only favorites (true) or only non-favorites (false)
        #[arg(long)]
        favorite: Option<bool>,
        /// Count trashed assets instead of live ones
        #[arg(long)]
        trashed: bool,
    },
    /// Move assets to the trash
    Trash {
        /// Acting user (must own every asset)
        #[arg(short, long)]
        user: UserId,
        /// Asset ids
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
    /// Restore assets from the trash
    Restore {
        /// Acting user (must own every asset)
        #[arg(short, long)]
        user: UserId,
        /// Asset ids
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
}

/// Statistics display row for table output
#[derive(Debug, Serialize, Tabled)]
struct StatsRow {
    /// Images
    images: u64,
    /// Videos
    videos: u64,
    /// Audio
    audio: u64,
    /// Other
    other: u64,
    /// Total
    total: u64,
}

/// Execute asset commands
pub async fn execute(
    args: &AssetArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        AssetCommand::Stats {
            user,
            archived,
            favorite,
            trashed,
        } => {
            let options = AssetStatsOptions {
                is_archived: *archived,
                is_favorite: *favorite,
                is_trashed: *trashed,
            };
            let stats = services
                .assets
                .statistics(&AuthContext::user(*user), options)
                .await?;

            output::print_item(
                &StatsRow {
                    images: stats.images,
                    videos: stats.videos,
                    audio: stats.audio,
                    other: stats.other,
                    total: stats.total(),
                },
                format,
            );
        }
        AssetCommand::Trash { user, assets } => {
            let trashed = services
                .assets
                .trash(&AuthContext::user(*user), assets)
                .await?;
            output::print_success(&format!("{trashed} asset(s) moved to trash"));
        }
        AssetCommand::Restore { user, assets } => {
            let restored = services
                .assets
                .restore(&AuthContext::user(*user), assets)
                .await?;
            output::print_success(&format!("{restored} asset(s) restored"));
        }
    }

    Ok(())
}
