//! Get command - show one user

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use roster_core::services::UserService;
use roster_core::{Error, RosterContext};

use crate::output;

pub fn run(ctx: &RosterContext, id: i64, json: bool) -> Result<ExitCode> {
    if show_user(&ctx.user_service, id, json, &mut io::stdout())? {
        return Ok(ExitCode::SUCCESS);
    }
    output::error(&format!("User {} not found", id));
    Ok(ExitCode::FAILURE)
}

/// Write the user to `out`; `false` when no user has that id
fn show_user(users: &UserService, id: i64, json: bool, out: &mut impl Write) -> Result<bool> {
    let user = match users.require_user(id) {
        Ok(user) => user,
        Err(Error::NotFound(_)) => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&user)?)?;
    } else {
        writeln!(out, "{}", output::user_table(std::slice::from_ref(&user)))?;
    }
    Ok(true)
}
