//! Fixtures command - seed data management.

use crate::cli::args::{FixturesAction, FixturesArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::fixtures::FixtureLoader;
use crate::infra::Database;

/// Execute the fixtures command
pub async fn execute(args: FixturesArgs, config: Config) -> AppResult<()> {
    // Fixtures need the schema in place, so migrations run first
    let db = Database::connect(&config).await;

    match args.action {
        FixturesAction::Load { append } => {
            let summary = FixtureLoader::new(db.get_connection()).load(append).await?;
            println!(
                "Loaded {} producers, {} images, {} alcohols, {} users.",
                summary.producers, summary.images, summary.alcohols, summary.users
            );
        }
    }

    Ok(())
}
