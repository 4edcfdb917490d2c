//! Command-line handling that runs before the TUI starts.
//!
//! ```ignore
//! use unsplash_tui::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_line, VERSION};

/// Handle commands that do not need the TUI.
///
/// Returns the exit code to use, or `None` when the browser should start.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            println!("{}", help_text());
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {reason}\n\n{}", help_text());
            Some(2)
        }
        CliCommand::RunTui { .. } => None,
    }
}
