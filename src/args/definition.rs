//! Command-line argument definition and processing.

use clap::Parser;

use akhbar::sources::ApiClient;
use akhbar::state::ActiveFilter;
use akhbar::theme::Settings;

/// akhbar - A terminal reader for the akhbar news aggregation service
#[derive(Parser, Debug)]
#[command(name = "akhbar")]
#[command(version)]
#[command(about = "A terminal reader for the akhbar news aggregation service", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Backend base URL (e.g. http://localhost:8000); remembered for later runs
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Forget a remembered --api-base and fall back to settings/defaults
    #[arg(long)]
    pub reset_api_base: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the first page of news to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Page size for --print (defaults to page_size from settings)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Probe the backend health endpoint and exit (non-zero when unhealthy)
    #[arg(long)]
    pub health: bool,

    /// Only show news from this category id
    #[arg(long, value_name = "ID")]
    pub category_id: Option<i64>,

    /// Only show news from this agency id
    #[arg(long, value_name = "ID")]
    pub agency_id: Option<i64>,

    /// Free-text search over titles and content
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,
}

/// What: Run a one-shot mode when one was requested.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `client`: Client for the resolved API base.
/// - `settings`: Loaded settings (default page size).
/// - `filter`: Filter built from the command line.
///
/// Output:
/// - `Some(exit_code)` when a one-shot mode ran; `None` to continue into the TUI.
///
/// Details:
/// - `--health` takes precedence over `--print`.
pub async fn process_args(
    args: &Args,
    client: &ApiClient,
    settings: &Settings,
    filter: &ActiveFilter,
) -> Option<i32> {
    if args.health {
        return Some(super::health::handle_health(client).await);
    }
    if args.print {
        let limit = args.limit.filter(|n| *n > 0).unwrap_or(settings.page_size);
        return Some(super::news::handle_print(client, filter, limit).await);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags and values parse into the expected fields.
    fn args_parse_filters_and_modes() {
        let args = Args::parse_from([
            "akhbar",
            "--api-base",
            "http://news.local:8000/",
            "--print",
            "--limit",
            "5",
            "--category-id",
            "3",
            "-q",
            "نفت",
        ]);
        assert_eq!(args.api_base.as_deref(), Some("http://news.local:8000/"));
        assert!(args.print && !args.health && !args.reset_api_base);
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.category_id, Some(3));
        assert_eq!(args.agency_id, None);
        assert_eq!(args.query.as_deref(), Some("نفت"));
        assert_eq!(args.log_level, "info");
    }
}
