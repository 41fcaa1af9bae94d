pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_analytics_command;

#[derive(Args)]
pub struct AnalyticsCommands {
    #[command(subcommand)]
    pub command: AnalyticsSubcommands,
}

#[derive(Subcommand)]
pub enum AnalyticsSubcommands {
    /// Show the analytics record of a survey
    Show {
        /// Survey id
        survey_id: i64,
    },
    /// Ask the server to (re)generate analytics for a survey
    Generate {
        /// Survey id
        survey_id: i64,
    },
}
