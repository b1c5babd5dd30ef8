//! Shell command - line-oriented session against one in-process registry
//!
//! The registry lives only as long as the session. Names containing spaces
//! may be wrapped in double quotes: `add 1 "Alice B." alice@b.com`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use roster_core::services::UserService;
use roster_core::RosterContext;

use crate::output;

const HELP: &str = "\
Commands:
  add <id> <name> [email]   register a user (replaces an existing id)
  get <id>                  show one user
  list                      show all users
  status                    show registry summary
  help                      show this help
  quit | exit               leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Add {
        id: i64,
        name: String,
        email: Option<String>,
    },
    Get(i64),
    List,
    Status,
    Help,
    Quit,
    Empty,
}

pub fn run(ctx: &RosterContext) -> Result<ExitCode> {
    println!("{}", "Roster shell. Type 'help' for commands.".bold());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("roster> ");
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };

        match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(&ctx.user_service, command, &mut stdout)?,
            Err(msg) => output::error(&msg),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn execute(users: &UserService, command: ShellCommand, out: &mut impl Write) -> Result<()> {
    match command {
        ShellCommand::Add { id, name, email } => {
            let registration = users.add_user(id, name, email)?;
            let verb = if registration.replaced { "Replaced" } else { "Added" };
            let user = &registration.user;
            writeln!(out, "{}", format!("{} user {} <{}>", verb, user.name(), user.email()).green())?;
        }
        ShellCommand::Get(id) => match users.get_user(id)? {
            Some(user) => writeln!(out, "{}", output::user_table(std::slice::from_ref(&user)))?,
            None => writeln!(out, "{}", format!("User {} not found", id).yellow())?,
        },
        ShellCommand::List => {
            let all = users.list_users()?;
            if all.is_empty() {
                writeln!(out, "{}", "No users registered".yellow())?;
            } else {
                writeln!(out, "{}", output::user_table(&all))?;
            }
        }
        ShellCommand::Status => {
            let summary = users.summary()?;
            writeln!(
                out,
                "{} users, {} with placeholder email",
                summary.total_users, summary.placeholder_emails
            )?;
        }
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit | ShellCommand::Empty => {}
    }
    Ok(())
}

fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(ShellCommand::Empty);
    };

    match (head.as_str(), args) {
        ("add", [id, name]) => Ok(ShellCommand::Add {
            id: parse_id(id)?,
            name: name.clone(),
            email: None,
        }),
        ("add", [id, name, email]) => Ok(ShellCommand::Add {
            id: parse_id(id)?,
            name: name.clone(),
            email: Some(email.clone()),
        }),
        ("add", _) => Err("usage: add <id> <name> [email]".to_string()),
        ("get", [id]) => Ok(ShellCommand::Get(parse_id(id)?)),
        ("get", _) => Err("usage: get <id>".to_string()),
        ("list", []) => Ok(ShellCommand::List),
        ("list", _) => Err("usage: list".to_string()),
        ("status", []) => Ok(ShellCommand::Status),
        ("status", _) => Err("usage: status".to_string()),
        ("help", _) => Ok(ShellCommand::Help),
        ("quit" | "exit", _) => Ok(ShellCommand::Quit),
        (other, _) => Err(format!("unknown command '{}', type 'help'", other)),
    }
}

fn parse_id(token: &str) -> std::result::Result<i64, String> {
    token
        .parse()
        .map_err(|_| format!("invalid id '{}', expected an integer", token))
}

/// Split on whitespace, keeping double-quoted runs together
fn tokenize(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}
