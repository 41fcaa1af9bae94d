//! Response command handlers
//!
//! `list` renders the aggregated respondent-by-question matrix; `submit` is
//! the public respondent flow behind a shareable link.

use anyhow::{Result, bail};
use colored::*;
use dialoguer::{Input, Select};
use log::{debug, info};

use crate::api::models::{NewResponse, Question, QuestionRef, QuestionType, SurveyRef};
use crate::cli::AppContext;
use crate::view::aggregate::group_responses;

use super::{ResponseCommands, ResponseSubcommands};

pub async fn handle_response_command(ctx: &AppContext, args: ResponseCommands) -> Result<()> {
    match args.command {
        ResponseSubcommands::List { survey_id, no_color } => list(ctx, survey_id, no_color).await,
        ResponseSubcommands::Submit { link } => submit(ctx, &link).await,
    }
}

async fn list(ctx: &AppContext, survey_id: i64, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    let (_, client) = ctx.authed_client()?;

    // Sequential prerequisites of the aggregation: survey, questions,
    // responses. A missing survey is its own terminal state.
    let survey = match client.get_survey(survey_id).await {
        Ok(survey) => survey,
        Err(err) => {
            debug!("Survey {} lookup failed: {:#}", survey_id, err);
            bail!("Survey not found");
        }
    };
    let questions = client.list_questions(survey_id).await?;
    let responses = client.list_responses(survey_id).await?;

    if responses.is_empty() {
        println!("No responses have been submitted for this survey yet.");
        return Ok(());
    }
    if questions.is_empty() {
        println!("This survey has no questions; responses cannot be displayed.");
        return Ok(());
    }

    let groups = group_responses(&responses, &questions);

    println!("{} - Responses", survey.title.bold());
    println!("Total responses: {}", groups.len());
    println!();

    let mut headers = vec!["Respondent".to_string(), "Submitted".to_string()];
    headers.extend(questions.iter().map(|q| truncate(&q.question_text, 32)));

    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|group| {
            let mut row = vec![
                group.display_name().to_string(),
                group.submitted_at.format("%Y-%m-%d").to_string(),
            ];
            row.extend(
                questions
                    .iter()
                    .map(|q| truncate(group.answer_for(q.question_id), 32)),
            );
            row
        })
        .collect();

    print!("{}", render_table(&headers, &rows));
    Ok(())
}

async fn submit(ctx: &AppContext, link: &str) -> Result<()> {
    let client = ctx.public_client();

    let public = match client.get_survey_by_link(link).await {
        Ok(public) => public,
        Err(err) => {
            debug!("Public survey lookup for '{}' failed: {:#}", link, err);
            bail!("Survey not found or not currently active.");
        }
    };

    println!("{}", public.survey.title.bold());
    if let Some(description) = &public.survey.description {
        if !description.is_empty() {
            println!("{}", description);
        }
    }
    println!();

    if public.questions.is_empty() {
        bail!("This survey has no questions yet.");
    }

    let mut items = Vec::with_capacity(public.questions.len());
    for question in &public.questions {
        let answer = prompt_answer(question)?;
        items.push(NewResponse {
            question: QuestionRef {
                question_id: question.question_id,
            },
            survey: SurveyRef {
                survey_id: public.survey.survey_id,
            },
            answer_text: answer,
        });
    }

    // The prompts already enforce required questions; keep the final check
    // the web form performed anyway.
    let unanswered = public
        .questions
        .iter()
        .zip(&items)
        .filter(|(q, item)| q.required && item.answer_text.trim().is_empty())
        .count();
    if unanswered > 0 {
        bail!("Please answer all required questions ({} unanswered)", unanswered);
    }

    client
        .submit_responses(public.survey.survey_id, &items)
        .await?;

    info!("Submitted {} answers to survey {}", items.len(), public.survey.survey_id);
    println!();
    println!("{}", "Thank you! Your response has been recorded.".bright_green());
    Ok(())
}

const SKIP_LABEL: &str = "(no answer)";
const RATING_SCALE: &[&str] = &["1", "2", "3", "4", "5"];

fn prompt_answer(question: &Question) -> Result<String> {
    let required = if question.required { " *" } else { "" };
    let prompt = format!("{}{}", question.question_text, required);

    match question.question_type {
        QuestionType::Text => {
            let answer: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(!question.required)
                .interact_text()?;
            Ok(answer)
        }
        QuestionType::Rating => Ok(select_from(&prompt, RATING_SCALE, question.required)?),
        QuestionType::MultipleChoice | QuestionType::Dropdown => {
            let options: Vec<&str> = question.options().iter().map(String::as_str).collect();
            if options.is_empty() {
                // Malformed question; treat as free text rather than failing
                // the whole submission.
                let answer: String = Input::new()
                    .with_prompt(prompt)
                    .allow_empty(!question.required)
                    .interact_text()?;
                return Ok(answer);
            }
            Ok(select_from(&prompt, &options, question.required)?)
        }
    }
}

/// Select one of `options`; optional questions get an extra skip entry that
/// maps to an empty answer.
fn select_from(prompt: &str, options: &[&str], required: bool) -> Result<String> {
    let mut labels: Vec<&str> = options.to_vec();
    if !required {
        labels.push(SKIP_LABEL);
    }
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    if !required && index == labels.len() - 1 {
        return Ok(String::new());
    }
    Ok(labels[index].to_string())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(headers, &widths));
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("a rather long question text", 10), "a rathe...");
    }

    #[test]
    fn table_columns_align_to_widest_cell() {
        let headers = vec!["A".to_string(), "Header".to_string()];
        let rows = vec![
            vec!["long cell".to_string(), "x".to_string()],
            vec!["y".to_string(), "z".to_string()],
        ];
        let table = render_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "A          Header");
        assert_eq!(lines[1], "---------  ------");
        assert_eq!(lines[2], "long cell  x");
        assert_eq!(lines[3], "y          z");
    }
}
