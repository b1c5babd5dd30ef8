//! Status command - registry summary

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use roster_core::RosterContext;

pub fn run(ctx: &RosterContext, json: bool) -> Result<ExitCode> {
    let summary = ctx.user_service.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Registry Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Users".to_string(), summary.total_users.to_string()]);
    table.add_row(vec![
        "Placeholder emails".to_string(),
        summary.placeholder_emails.to_string(),
    ]);
    println!("{}", table);

    if let (Some(lowest), Some(highest)) = (summary.lowest_id, summary.highest_id) {
        println!();
        println!("Id range: {} to {}", lowest, highest);
    }
    if let Some(seed) = &ctx.config.seed_file {
        println!("Seeded from: {}", seed.display());
    }

    Ok(ExitCode::SUCCESS)
}
