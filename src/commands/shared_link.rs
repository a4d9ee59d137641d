//! Shared link membership CLI commands.

use clap::{Args, Subcommand};

use assethub_core::error::AppError;
use assethub_core::types::id::{AssetId, SharedLinkId, UserId};
use assethub_entity::bulk::BulkIdsDto;
use assethub_service::AuthContext;

use super::Services;
use crate::output::{self, OutputFormat};

/// Arguments for shared link commands
#[derive(Debug, Args)]
pub struct SharedLinkArgs {
    /// Shared link subcommand
    #[command(subcommand)]
    pub command: SharedLinkCommand,
}

/// Shared link subcommands
#[derive(Debug, Subcommand)]
pub enum SharedLinkCommand {
    /// Add assets to an individual shared link
    Add {
        /// Acting user (must own the link)
        #[arg(short, long)]
        user: UserId,
        /// Target shared link
        #[arg(short, long)]
        link: SharedLinkId,
        /// Asset ids, in order
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
    /// Remove assets from an individual shared link
    Remove {
        /// Acting user (must own the link)
        #[arg(short, long)]
        user: UserId,
        /// Target shared link
        #[arg(short, long)]
        link: SharedLinkId,
        /// Asset ids, in order
        #[arg(required = true)]
        assets: Vec<AssetId>,
    },
}

/// Execute shared link commands
pub async fn execute(
    args: &SharedLinkArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), AppError> {
    let results = match &args.command {
        SharedLinkCommand::Add { user, link, assets } => {
            services
                .shared_links
                .add_assets(
                    &AuthContext::user(*user),
                    BulkIdsDto::new(*link, assets.iter().copied()),
                )
                .await?
        }
        SharedLinkCommand::Remove { user, link, assets } => {
            services
                .shared_links
                .remove_assets(
                    &AuthContext::user(*user),
                    BulkIdsDto::new(*link, assets.iter().copied()),
                )
                .await?
        }
    };

    output::print_results(&results, format);
    Ok(())
}
