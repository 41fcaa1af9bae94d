use clap::{Parser, Subcommand};

use super::commands::analytics::AnalyticsCommands;
use super::commands::auth::AuthCommands;
use super::commands::question::QuestionCommands;
use super::commands::response::ResponseCommands;
use super::commands::survey::SurveyCommands;

#[derive(Parser)]
#[command(name = "surveyx-cli")]
#[command(about = "A CLI tool for creating surveys and collecting responses with SurveyX")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account registration and session management
    Auth(AuthCommands),
    /// Create, publish and manage surveys
    Survey(SurveyCommands),
    /// Manage the questions of a survey
    Question(QuestionCommands),
    /// View collected responses or answer a published survey
    Response(ResponseCommands),
    /// Server-computed analytics for a survey
    Analytics(AnalyticsCommands),
}
