//! Question command handlers

use anyhow::{Result, bail};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use log::info;

use crate::api::models::{Question, QuestionType, QuestionUpsert, SurveyRef};
use crate::cli::AppContext;
use crate::view::forms::QuestionDraft;
use crate::view::questions::{move_down, move_up};

use super::{QuestionCommands, QuestionSubcommands, QuestionTypeArg};

pub async fn handle_question_command(ctx: &AppContext, args: QuestionCommands) -> Result<()> {
    match args.command {
        QuestionSubcommands::List { survey_id } => list(ctx, survey_id).await,
        QuestionSubcommands::Add {
            survey_id,
            text,
            r#type,
            options,
            optional,
        } => add(ctx, survey_id, text, r#type, options, optional).await,
        QuestionSubcommands::Edit {
            question_id,
            survey,
            text,
            r#type,
            options,
            required,
        } => edit(ctx, question_id, survey, text, r#type, options, required).await,
        QuestionSubcommands::Delete {
            question_id,
            survey,
            yes,
        } => delete(ctx, question_id, survey, yes).await,
        QuestionSubcommands::Manage { survey_id } => manage(ctx, survey_id).await,
    }
}

fn print_questions(questions: &[Question]) {
    for (index, question) in questions.iter().enumerate() {
        let required = if question.required { " [required]" } else { "" };
        println!(
            "{:>3}. {} (id {}, {}){}",
            index + 1,
            question.question_text.bold(),
            question.question_id,
            question.question_type.label(),
            required.dimmed()
        );
        for option in question.options() {
            println!("       - {}", option);
        }
    }
}

fn upsert_from_draft(draft: &QuestionDraft, survey_id: i64) -> QuestionUpsert {
    let options = draft.clean_options();
    QuestionUpsert {
        question_text: draft.text.clone(),
        question_type: draft.question_type,
        answer_options: if options.is_empty() { None } else { Some(options) },
        required: draft.required,
        survey: SurveyRef { survey_id },
    }
}

async fn list(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let questions = client.list_questions(survey_id).await?;

    if questions.is_empty() {
        println!("No questions yet. Add one with 'surveyx-cli question add {}'.", survey_id);
        return Ok(());
    }
    print_questions(&questions);
    Ok(())
}

async fn add(
    ctx: &AppContext,
    survey_id: i64,
    text: String,
    question_type: QuestionTypeArg,
    options: Vec<String>,
    optional: bool,
) -> Result<()> {
    let (_, client) = ctx.authed_client()?;

    let draft = QuestionDraft {
        text,
        question_type: question_type.into(),
        options,
        required: !optional,
    };
    draft.validate()?;

    let question = client
        .create_question(&upsert_from_draft(&draft, survey_id))
        .await?;

    info!("Created question {} on survey {}", question.question_id, survey_id);
    println!(
        "Added question {} (id {})",
        question.question_text.bright_green(),
        question.question_id
    );
    Ok(())
}

async fn edit(
    ctx: &AppContext,
    question_id: i64,
    survey_id: i64,
    text: Option<String>,
    question_type: Option<QuestionTypeArg>,
    options: Vec<String>,
    required: Option<bool>,
) -> Result<()> {
    let (_, client) = ctx.authed_client()?;

    let questions = client.list_questions(survey_id).await?;
    let Some(existing) = questions.iter().find(|q| q.question_id == question_id) else {
        bail!("Question {} not found on survey {}", question_id, survey_id);
    };

    let draft = QuestionDraft {
        text: text.unwrap_or_else(|| existing.question_text.clone()),
        question_type: question_type
            .map(QuestionType::from)
            .unwrap_or(existing.question_type),
        options: if options.is_empty() {
            existing.options().to_vec()
        } else {
            options
        },
        required: required.unwrap_or(existing.required),
    };
    draft.validate()?;

    let question = client
        .update_question(question_id, &upsert_from_draft(&draft, survey_id))
        .await?;

    println!(
        "Updated question {} (id {})",
        question.question_text.bright_green(),
        question.question_id
    );
    Ok(())
}

async fn delete(ctx: &AppContext, question_id: i64, survey_id: i64, yes: bool) -> Result<()> {
    let (_, client) = ctx.authed_client()?;

    let questions = client.list_questions(survey_id).await?;
    let Some(question) = questions.iter().find(|q| q.question_id == question_id) else {
        bail!("Question {} not found on survey {}", question_id, survey_id);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete question '{}'?", question.question_text))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    client.delete_question(question_id).await?;
    info!("Deleted question {}", question_id);
    println!("Deleted question {}.", question_id);
    Ok(())
}

const MANAGE_ACTIONS: &[&str] = &[
    "Add question",
    "Edit question",
    "Delete question",
    "Move question up",
    "Move question down",
    "Done",
];

/// Interactive editing loop over one survey's question list, mirroring the
/// add/edit/delete/move actions of the web question editor. Reordering only
/// rearranges the displayed list; the backend keeps its own order.
async fn manage(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let survey = client.get_survey(survey_id).await?;
    let mut questions = client.list_questions(survey_id).await?;

    println!("Managing questions of {}", survey.title.bold());

    loop {
        println!();
        if questions.is_empty() {
            println!("No questions yet.");
        } else {
            print_questions(&questions);
        }
        println!();

        let action = Select::new()
            .with_prompt("Action")
            .items(MANAGE_ACTIONS)
            .default(0)
            .interact()?;

        match MANAGE_ACTIONS[action] {
            "Add question" => {
                let draft = prompt_question(None)?;
                let created = client
                    .create_question(&upsert_from_draft(&draft, survey_id))
                    .await?;
                println!("Added question {}.", created.question_id);
                questions.push(created);
            }
            "Edit question" => {
                let Some(index) = pick_question(&questions)? else {
                    continue;
                };
                let draft = prompt_question(Some(&questions[index]))?;
                let updated = client
                    .update_question(
                        questions[index].question_id,
                        &upsert_from_draft(&draft, survey_id),
                    )
                    .await?;
                println!("Updated question {}.", updated.question_id);
                questions[index] = updated;
            }
            "Delete question" => {
                let Some(index) = pick_question(&questions)? else {
                    continue;
                };
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete question '{}'?",
                        questions[index].question_text
                    ))
                    .default(false)
                    .interact()?;
                if confirmed {
                    client.delete_question(questions[index].question_id).await?;
                    let removed = questions.remove(index);
                    println!("Deleted question {}.", removed.question_id);
                }
            }
            "Move question up" => {
                if let Some(index) = pick_question(&questions)? {
                    if move_up(&mut questions, index) {
                        println!("Moved up. (display order only; not saved to the server)");
                    }
                }
            }
            "Move question down" => {
                if let Some(index) = pick_question(&questions)? {
                    if move_down(&mut questions, index) {
                        println!("Moved down. (display order only; not saved to the server)");
                    }
                }
            }
            _ => break,
        }
    }

    Ok(())
}

fn pick_question(questions: &[Question]) -> Result<Option<usize>> {
    if questions.is_empty() {
        println!("{}", "No questions to select.".yellow());
        return Ok(None);
    }
    let labels: Vec<&str> = questions.iter().map(|q| q.question_text.as_str()).collect();
    let index = Select::new()
        .with_prompt("Which question")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

/// Prompt for a full question draft, pre-filling from an existing question
/// when editing. Re-prompts until the draft validates.
fn prompt_question(existing: Option<&Question>) -> Result<QuestionDraft> {
    let types = [
        QuestionType::Text,
        QuestionType::MultipleChoice,
        QuestionType::Rating,
        QuestionType::Dropdown,
    ];
    let type_labels: Vec<&str> = types.iter().map(|t| t.label()).collect();

    loop {
        let mut text_input = Input::<String>::new().with_prompt("Question text");
        if let Some(question) = existing {
            text_input = text_input.with_initial_text(question.question_text.clone());
        }
        let text = text_input.interact_text()?;

        let default_type = existing
            .and_then(|q| types.iter().position(|t| *t == q.question_type))
            .unwrap_or(0);
        let type_index = Select::new()
            .with_prompt("Question type")
            .items(&type_labels)
            .default(default_type)
            .interact()?;
        let question_type = types[type_index];

        let mut options = Vec::new();
        if question_type.is_choice() {
            if let Some(question) = existing {
                options = question.options().to_vec();
                if !options.is_empty() {
                    println!("Current options: {}", options.join(", "));
                    let keep = Confirm::new()
                        .with_prompt("Keep current options?")
                        .default(true)
                        .interact()?;
                    if !keep {
                        options.clear();
                    }
                }
            }
            if options.is_empty() {
                println!("Enter answer options (empty line to finish):");
                loop {
                    let option: String = Input::new()
                        .with_prompt("Option")
                        .allow_empty(true)
                        .interact_text()?;
                    if option.trim().is_empty() {
                        break;
                    }
                    options.push(option);
                }
            }
        }

        let required = Confirm::new()
            .with_prompt("Required?")
            .default(existing.map(|q| q.required).unwrap_or(true))
            .interact()?;

        let draft = QuestionDraft {
            text,
            question_type,
            options,
            required,
        };
        match draft.validate() {
            Ok(()) => return Ok(draft),
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}
