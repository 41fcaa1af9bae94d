pub mod handler;

use clap::{Args, Subcommand};

pub use handler::handle_auth_command;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Register a new account
    Signup {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },
    /// Log in and store the session
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session
    Status,
}
