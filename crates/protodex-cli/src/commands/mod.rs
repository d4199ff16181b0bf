//! Command implementations

mod sources;
mod validate;
mod verify;

pub use sources::run_sources;
pub use validate::run_validate;
pub use verify::run_verify;

use colored::Colorize;

/// Section banner matching the original report layout.
pub(crate) fn banner(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}

pub(crate) fn ok(message: &str) {
    println!("  {} {}", "[OK]".green(), message);
}

pub(crate) fn warn(message: &str) {
    println!("  {} {}", "[WARN]".yellow(), message);
}

pub(crate) fn error(message: &str) {
    println!("  {} {}", "[ERROR]".red(), message);
}
