//! Terminal output for msgcomp commands
//!
//! Payloads and rendered trees go to stdout uncolored; status lines use
//! `colored`, which honors NO_COLOR and CLICOLOR_FORCE.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

use crate::cli::error::CliError;
use crate::domain::ComponentTree;

/// Report a failed command on stderr, naming the offending field for limit violations.
pub fn error(err: &CliError) {
    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(violation) = err.violation() {
        eprintln!("  {} {}", "field:".dimmed(), violation.field());
        if let Some(limit) = violation.limit() {
            eprintln!("  {} {}", "limit:".dimmed(), limit);
        }
    }
}

pub fn warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// One-line verdict for `msgcomp check`.
pub fn checked(layout: &Path, tree: &ComponentTree) {
    let summary = if tree.is_empty_marker() {
        "no components".to_string()
    } else {
        format!(
            "{} rows, {} components",
            tree.rows().len(),
            tree.component_count()
        )
    };
    println!("{} {}: {}", "✓".green(), layout.display(), summary);
}

/// `label: value` with a green label.
pub fn labeled(label: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), value);
}

/// Uncolored data for piping.
pub fn plain(data: &(impl Display + ?Sized)) {
    println!("{}", data);
}
