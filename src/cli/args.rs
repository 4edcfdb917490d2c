//! Command-line argument parsing.

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Start the browser, optionally searching straight away
    RunTui { query: Option<String> },
    /// An argument we do not understand
    Invalid(String),
}

/// Parse `std::env::args()`-style arguments; the first item is the program
/// name.
///
/// ```
/// use unsplash_tui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["unsplash-tui".to_string(), "--query".to_string(), "fog".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui { query: Some("fog".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut query = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--query" | "-q" => match args.next() {
                Some(value) => query = Some(value),
                None => return CliCommand::Invalid(format!("{arg} needs a value")),
            },
            other => {
                if let Some(value) = other.strip_prefix("--query=") {
                    query = Some(value.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {other}"));
                }
            }
        }
    }

    let query = query.filter(|q| !q.trim().is_empty());
    CliCommand::RunTui { query }
}
