//! Pet adoption CLI
//!
//! Runs the web service or applies the schema migrations.

use clap::{Parser, Subcommand};
use petadopt_core::logging_facility::{self, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "petadopt")]
#[command(about = "Pet adoption records - pets, adopters, adoptions, payments", long_about = None)]
struct Cli {
    /// Logging profile: development, production or test
    #[arg(
        long,
        global = true,
        env = "PETADOPT_LOG_PROFILE",
        default_value = "development"
    )]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Migrate the database, then serve HTTP until Ctrl-C
    Serve(commands::serve::ServeArgs),
    /// Apply pending migrations and report them
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args).await,
        Commands::Migrate(args) => commands::migrate::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
