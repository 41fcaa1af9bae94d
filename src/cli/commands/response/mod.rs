pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_response_command;

#[derive(Args)]
pub struct ResponseCommands {
    #[command(subcommand)]
    pub command: ResponseSubcommands,
}

#[derive(Subcommand)]
pub enum ResponseSubcommands {
    /// Show collected responses as a respondent-by-question table
    List {
        /// Survey id
        survey_id: i64,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Answer a published survey via its shareable link (no login needed)
    Submit {
        /// Shareable survey link
        link: String,
    },
}
