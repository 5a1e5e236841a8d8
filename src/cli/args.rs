//! Command-line argument parsing for the tvdash CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Load everything and print the dashboard summary (default)
    Summary,
    /// Shows in one category
    Category(String),
    /// Shows released in one year
    Year(i32),
    /// Shows rated within `[min, max]`
    Rate { min: f64, max: f64 },
    /// Server-side title search
    Search(String),
    /// Detail of the show with this URL
    Detail(String),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: tvdash [OPTIONS]

Options:
  --category <name>     List shows in a category
  --year <year>         List shows released in a year
  --rate <min> <max>    List shows rated within [min, max]
  --search <keyword>    Search titles on the server
  --detail <url>        Show one show's details
  -V, --version         Print version
  -h, --help            Print this help

Environment:
  TVDASH_API_BASE_URL   API base URL (default http://localhost:8000)
  TVDASH_TIMEOUT_SECS   Request timeout in seconds (default 15)
  TVDASH_PAGE_SIZE      Page size of the bulk show request (default 1000)
  RUST_LOG              Log filter (default info)";

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognised flag wins. Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use tvdash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tvdash".to_string(), "--year".to_string(), "2021".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Year(2021));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--category" => {
                return match args.next() {
                    Some(category) => CliCommand::Category(category),
                    None => missing_value("--category"),
                }
            }
            "--year" => {
                return match args.next().map(|v| v.parse::<i32>()) {
                    Some(Ok(year)) => CliCommand::Year(year),
                    Some(Err(_)) => CliCommand::Invalid("--year expects an integer".to_string()),
                    None => missing_value("--year"),
                }
            }
            "--rate" => {
                let min = args.next().map(|v| v.parse::<f64>());
                let max = args.next().map(|v| v.parse::<f64>());
                return match (min, max) {
                    (Some(Ok(min)), Some(Ok(max))) => CliCommand::Rate { min, max },
                    (None, _) | (_, None) => missing_value("--rate"),
                    _ => CliCommand::Invalid("--rate expects two numbers".to_string()),
                };
            }
            "--search" => {
                return match args.next() {
                    Some(keyword) => CliCommand::Search(keyword),
                    None => missing_value("--search"),
                }
            }
            "--detail" => {
                return match args.next() {
                    Some(url) => CliCommand::Detail(url),
                    None => missing_value("--detail"),
                }
            }
            _ => {}
        }
    }
    CliCommand::Summary
}

fn missing_value(flag: &str) -> CliCommand {
    CliCommand::Invalid(format!("{} requires a value", flag))
}
