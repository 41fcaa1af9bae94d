//! Auth command handlers

use anyhow::Result;
use colored::*;
use dialoguer::Input;
use log::info;

use crate::api::models::{LoginRequest, SignupRequest};
use crate::cli::AppContext;
use crate::session::Session;

use super::{AuthCommands, AuthSubcommands};

pub async fn handle_auth_command(ctx: &AppContext, args: AuthCommands) -> Result<()> {
    match args.command {
        AuthSubcommands::Signup { username, email } => signup(ctx, username, email).await,
        AuthSubcommands::Login { username } => login(ctx, username).await,
        AuthSubcommands::Logout => logout(ctx),
        AuthSubcommands::Status => status(ctx),
    }
}

fn prompt_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

async fn signup(ctx: &AppContext, username: Option<String>, email: Option<String>) -> Result<()> {
    let username = prompt_missing(username, "Username")?;
    let email = prompt_missing(email, "Email")?;
    let password = rpassword::prompt_password("Password: ")?;

    let client = ctx.public_client();
    let response = client
        .signup(&SignupRequest {
            username: username.clone(),
            email,
            password,
        })
        .await?;

    info!("Registered account {}", username);
    println!("{}", response.message.bright_green());
    println!("Log in with: surveyx-cli auth login --username {}", username);
    Ok(())
}

async fn login(ctx: &AppContext, username: Option<String>) -> Result<()> {
    let username = prompt_missing(username, "Username")?;
    let password = rpassword::prompt_password("Password: ")?;

    let client = ctx.public_client();
    let response = client
        .login(&LoginRequest { username, password })
        .await?;

    let session = Session::from(response);
    ctx.sessions.save(&session)?;

    info!("Logged in as {}", session.username);
    println!(
        "Logged in as {} <{}>",
        session.username.bright_green().bold(),
        session.email
    );
    Ok(())
}

fn logout(ctx: &AppContext) -> Result<()> {
    ctx.sessions.clear()?;
    println!("Logged out.");
    Ok(())
}

fn status(ctx: &AppContext) -> Result<()> {
    match ctx.sessions.load() {
        Some(session) => {
            println!(
                "Logged in as {} <{}>",
                session.username.bright_green().bold(),
                session.email
            );
            println!("Server: {}", ctx.config.base_url.cyan());
        }
        None => {
            println!("{}", "Not logged in.".yellow());
        }
    }
    Ok(())
}
