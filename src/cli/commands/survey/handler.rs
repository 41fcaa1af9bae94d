//! Survey command handlers

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use colored::*;
use dialoguer::Confirm;
use log::info;

use crate::api::models::{Survey, SurveyStatus, SurveyUpsert, UserRef};
use crate::cli::AppContext;
use crate::view::forms::SurveyDraft;

use super::{SurveyCommands, SurveySubcommands};

pub async fn handle_survey_command(ctx: &AppContext, args: SurveyCommands) -> Result<()> {
    match args.command {
        SurveySubcommands::List => list(ctx).await,
        SurveySubcommands::Show { survey_id } => show(ctx, survey_id).await,
        SurveySubcommands::Create {
            title,
            description,
            expires,
        } => create(ctx, title, description, expires).await,
        SurveySubcommands::Update {
            survey_id,
            title,
            description,
            expires,
        } => update(ctx, survey_id, title, description, expires).await,
        SurveySubcommands::Delete { survey_id, yes } => delete(ctx, survey_id, yes).await,
        SurveySubcommands::Publish { survey_id } => publish(ctx, survey_id).await,
    }
}

/// Accepts the formats the web form produced (datetime-local) plus a
/// date-only shorthand.
fn parse_expiry(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap())
        })
        .with_context(|| format!("Invalid expiration date: {}", raw))
}

fn status_label(status: SurveyStatus) -> ColoredString {
    match status {
        SurveyStatus::Draft => status.label().yellow(),
        SurveyStatus::Active => status.label().bright_green(),
        SurveyStatus::Closed => status.label().red(),
    }
}

fn print_survey(survey: &Survey) {
    println!("{} (id {})", survey.title.bold(), survey.survey_id);
    println!("Status: {}", status_label(survey.status));
    if let Some(description) = &survey.description {
        if !description.is_empty() {
            println!("Description: {}", description);
        }
    }
    if let Some(created) = survey.created_at {
        println!("Created: {}", created.format("%Y-%m-%d %H:%M"));
    }
    if let Some(expires) = survey.expires_at {
        println!("Expires: {}", expires.format("%Y-%m-%d %H:%M"));
    }
    if let Some(link) = &survey.survey_link {
        println!("Share link: {}", link.cyan());
    }
    println!("Responses: {}", survey.response_count);
}

async fn list(ctx: &AppContext) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let surveys = client.list_surveys().await?;

    if surveys.is_empty() {
        println!("No surveys yet. Create one with 'surveyx-cli survey create'.");
        return Ok(());
    }

    for survey in &surveys {
        let link = survey.survey_link.as_deref().unwrap_or("-");
        println!(
            "{:>5}  {:<8}  {:>9}  {:<12}  {}",
            survey.survey_id,
            status_label(survey.status),
            survey.response_count,
            link,
            survey.title
        );
    }
    println!();
    println!("{} survey(s)", surveys.len());
    Ok(())
}

async fn show(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let survey = client.get_survey(survey_id).await?;
    let questions = client.list_questions(survey_id).await?;

    print_survey(&survey);
    println!();
    if questions.is_empty() {
        println!("No questions yet. Add one with 'surveyx-cli question add {}'.", survey_id);
        return Ok(());
    }

    println!("{}", "Questions".bold());
    for (index, question) in questions.iter().enumerate() {
        let required = if question.required { " [required]" } else { "" };
        println!(
            "{:>3}. {} ({}){}",
            index + 1,
            question.question_text,
            question.question_type.label(),
            required.dimmed()
        );
        for option in question.options() {
            println!("       - {}", option);
        }
    }
    Ok(())
}

async fn create(
    ctx: &AppContext,
    title: String,
    description: Option<String>,
    expires: Option<String>,
) -> Result<()> {
    let (session, client) = ctx.authed_client()?;

    let expires_at = expires.as_deref().map(parse_expiry).transpose()?;
    let draft = SurveyDraft {
        title,
        description,
        expires_at,
    };
    draft.validate()?;

    let survey = client
        .create_survey(&SurveyUpsert {
            title: draft.title,
            description: draft.description,
            expires_at: draft.expires_at,
            creator: UserRef {
                user_id: session.user_id,
            },
        })
        .await?;

    info!("Created survey {}", survey.survey_id);
    println!("Created survey {} (id {})", survey.title.bright_green(), survey.survey_id);
    println!("Publish it with: surveyx-cli survey publish {}", survey.survey_id);
    Ok(())
}

async fn update(
    ctx: &AppContext,
    survey_id: i64,
    title: Option<String>,
    description: Option<String>,
    expires: Option<String>,
) -> Result<()> {
    let (session, client) = ctx.authed_client()?;
    let existing = client.get_survey(survey_id).await?;

    let expires_at = match expires.as_deref() {
        Some(raw) => Some(parse_expiry(raw)?),
        None => existing.expires_at,
    };
    let draft = SurveyDraft {
        title: title.unwrap_or(existing.title),
        description: description.or(existing.description),
        expires_at,
    };
    draft.validate()?;

    let survey = client
        .update_survey(
            survey_id,
            &SurveyUpsert {
                title: draft.title,
                description: draft.description,
                expires_at: draft.expires_at,
                creator: UserRef {
                    user_id: session.user_id,
                },
            },
        )
        .await?;

    println!("Updated survey {} (id {})", survey.title.bright_green(), survey.survey_id);
    Ok(())
}

async fn delete(ctx: &AppContext, survey_id: i64, yes: bool) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let survey = client.get_survey(survey_id).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete survey '{}' and all of its responses?",
                survey.title
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    client.delete_survey(survey_id).await?;
    info!("Deleted survey {}", survey_id);
    println!("Deleted survey {}.", survey_id);
    Ok(())
}

async fn publish(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let survey = client.publish_survey(survey_id).await?;

    let Some(link) = &survey.survey_link else {
        bail!("Survey was published but the server returned no shareable link");
    };

    info!("Published survey {}", survey_id);
    println!("Survey {} is now {}.", survey.title.bold(), status_label(survey.status));
    println!("Share link: {}", link.bright_green());
    println!("Respondents can answer with: surveyx-cli response submit {}", link);
    Ok(())
}
