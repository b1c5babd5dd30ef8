//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use roster_core::User;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Table of users, one row each
pub fn user_table(users: &[User]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["ID", "Name", "Email"]);
    for user in users {
        table.add_row(vec![user.id().to_string(), user.name().to_string(), user.email().to_string()]);
    }
    table
}
