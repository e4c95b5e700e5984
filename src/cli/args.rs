//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Cellar - REST catalog of alcoholic beverages
#[derive(Parser, Debug)]
#[command(name = "cellar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Create a user account
    CreateUser(CreateUserArgs),

    /// Manage seed data
    Fixtures(FixturesArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to, overriding SERVER_HOST
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on, overriding SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the create-user command; all three are required
#[derive(Parser, Debug)]
pub struct CreateUserArgs {
    /// Email address, used as the login name
    pub email: String,

    /// Plain text password, hashed before storage
    pub password: String,

    /// Role name (user or admin)
    pub role: String,
}

/// Arguments for the fixtures command
#[derive(Parser, Debug)]
pub struct FixturesArgs {
    #[command(subcommand)]
    pub action: FixturesAction,
}

/// Fixture actions
#[derive(Subcommand, Debug)]
pub enum FixturesAction {
    /// Load the seed catalog
    Load {
        /// Keep existing rows instead of purging first
        #[arg(long)]
        append: bool,
    },
}
