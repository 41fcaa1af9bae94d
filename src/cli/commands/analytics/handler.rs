//! Analytics command handlers

use anyhow::Result;
use colored::*;
use log::info;

use crate::api::models::AnalyticsRecord;
use crate::cli::AppContext;
use crate::view::insights::{Insights, NO_RESPONSES_PLACEHOLDER};

use super::{AnalyticsCommands, AnalyticsSubcommands};

pub async fn handle_analytics_command(ctx: &AppContext, args: AnalyticsCommands) -> Result<()> {
    match args.command {
        AnalyticsSubcommands::Show { survey_id } => show(ctx, survey_id).await,
        AnalyticsSubcommands::Generate { survey_id } => generate(ctx, survey_id).await,
    }
}

fn print_record(record: &AnalyticsRecord) {
    println!("{}", "Analysis Summary".bold());
    println!(
        "{}",
        record.analysis_summary.as_deref().unwrap_or("N/A")
    );
    println!();

    let insights = Insights::parse(record.insights.as_deref());
    println!("{}", "Insights".bold());
    if insights.is_malformed() {
        println!(
            "{}",
            "(insights payload could not be parsed; showing defaults)".yellow()
        );
    }
    println!("Question: {}", insights.question());
    println!("Total Responses: {}", insights.response_count());
    println!("Responses:");
    let responses = insights.responses();
    if responses.is_empty() {
        println!("  - {}", NO_RESPONSES_PLACEHOLDER);
    } else {
        for response in responses {
            println!("  - {}", response);
        }
    }
}

async fn show(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let record = client.get_analytics(survey_id).await?;
    print_record(&record);
    Ok(())
}

async fn generate(ctx: &AppContext, survey_id: i64) -> Result<()> {
    let (_, client) = ctx.authed_client()?;
    let record = client.generate_analytics(survey_id).await?;
    info!("Generated analytics {} for survey {}", record.analytics_id, survey_id);
    println!("{}", "Analytics generated.".bright_green());
    println!();
    print_record(&record);
    Ok(())
}
