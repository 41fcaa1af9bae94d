pub mod handler;

use clap::{Args, Subcommand, ValueEnum};

pub use handler::handle_question_command;

use crate::api::models::QuestionType;

#[derive(Args)]
pub struct QuestionCommands {
    #[command(subcommand)]
    pub command: QuestionSubcommands,
}

#[derive(Subcommand)]
pub enum QuestionSubcommands {
    /// List the questions of a survey
    List {
        /// Survey id
        survey_id: i64,
    },
    /// Add a question to a survey
    Add {
        /// Survey id
        survey_id: i64,
        /// Question text
        #[arg(long)]
        text: String,
        /// Question type
        #[arg(long, value_enum, default_value = "text")]
        r#type: QuestionTypeArg,
        /// Answer option (repeat for multiple; choice types need at least one)
        #[arg(long = "option")]
        options: Vec<String>,
        /// Mark the question as optional
        #[arg(long)]
        optional: bool,
    },
    /// Edit an existing question
    Edit {
        /// Question id
        question_id: i64,
        /// Survey the question belongs to
        #[arg(long)]
        survey: i64,
        #[arg(long)]
        text: Option<String>,
        #[arg(long, value_enum)]
        r#type: Option<QuestionTypeArg>,
        /// Replacement answer options (repeat for multiple)
        #[arg(long = "option")]
        options: Vec<String>,
        /// Set the required flag
        #[arg(long)]
        required: Option<bool>,
    },
    /// Delete a question
    Delete {
        /// Question id
        question_id: i64,
        /// Survey the question belongs to
        #[arg(long)]
        survey: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Interactively add, edit, delete and reorder questions
    Manage {
        /// Survey id
        survey_id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuestionTypeArg {
    /// Free text answer
    Text,
    /// Pick one of several options
    MultipleChoice,
    /// 1-5 rating
    Rating,
    /// Pick from a dropdown list
    Dropdown,
}

impl From<QuestionTypeArg> for QuestionType {
    fn from(arg: QuestionTypeArg) -> Self {
        match arg {
            QuestionTypeArg::Text => QuestionType::Text,
            QuestionTypeArg::MultipleChoice => QuestionType::MultipleChoice,
            QuestionTypeArg::Rating => QuestionType::Rating,
            QuestionTypeArg::Dropdown => QuestionType::Dropdown,
        }
    }
}
