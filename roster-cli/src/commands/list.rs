//! List command - show every user

use std::process::ExitCode;

use anyhow::Result;
use roster_core::RosterContext;

use crate::output;

pub fn run(ctx: &RosterContext, json: bool) -> Result<ExitCode> {
    let users = ctx.user_service.list_users()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(ExitCode::SUCCESS);
    }

    if users.is_empty() {
        output::warning("No users registered");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", output::user_table(&users));
    Ok(ExitCode::SUCCESS)
}
