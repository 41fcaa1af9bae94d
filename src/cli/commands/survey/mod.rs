pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_survey_command;

#[derive(Args)]
pub struct SurveyCommands {
    #[command(subcommand)]
    pub command: SurveySubcommands,
}

#[derive(Subcommand)]
pub enum SurveySubcommands {
    /// List your surveys
    List,
    /// Show one survey with its questions
    Show {
        /// Survey id
        survey_id: i64,
    },
    /// Create a new draft survey
    Create {
        /// Survey title
        #[arg(long)]
        title: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// Optional expiration, e.g. 2024-12-31T23:59 or 2024-12-31
        #[arg(long)]
        expires: Option<String>,
    },
    /// Update title, description or expiration of a survey
    Update {
        /// Survey id
        survey_id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New expiration, e.g. 2024-12-31T23:59
        #[arg(long)]
        expires: Option<String>,
    },
    /// Delete a survey
    Delete {
        /// Survey id
        survey_id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Publish a draft survey and print its shareable link
    Publish {
        /// Survey id
        survey_id: i64,
    },
}
