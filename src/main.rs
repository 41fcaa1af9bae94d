use anyhow::Result;
use clap::Parser;
use log::info;

use surveyx_cli::cli::{AppContext, Cli, Commands, commands};
use surveyx_cli::config::Config;
use surveyx_cli::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("surveyx-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting surveyx-cli");

    let config = Config::load()?;
    let sessions = SessionStore::open()?;
    let ctx = AppContext { config, sessions };

    match cli.command {
        Commands::Auth(args) => commands::handle_auth_command(&ctx, args).await?,
        Commands::Survey(args) => commands::handle_survey_command(&ctx, args).await?,
        Commands::Question(args) => commands::handle_question_command(&ctx, args).await?,
        Commands::Response(args) => commands::handle_response_command(&ctx, args).await?,
        Commands::Analytics(args) => commands::handle_analytics_command(&ctx, args).await?,
    }

    Ok(())
}
