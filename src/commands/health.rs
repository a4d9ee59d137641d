//! Database health check command.

use assethub_core::error::AppError;
use assethub_database::DatabasePool;

use crate::output;

/// Run `SELECT 1` against the configured database
pub async fn execute(db: &DatabasePool) -> Result<(), AppError> {
    if db.health_check().await? {
        output::print_success("Database is reachable");
        Ok(())
    } else {
        Err(AppError::database("Database health check failed"))
    }
}
