//! Shared utilities for argument processing.

use akhbar::state::ActiveFilter;

/// What: Determine the log level from the command line.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - `--verbose` overrides `--log-level`. `RUST_LOG`, when set, overrides both
///   at subscriber setup.
pub fn determine_log_level(args: &super::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Build the startup filter from `--category-id`, `--agency-id`, and `--query`.
///
/// Details:
/// - Blank query text is dropped.
pub fn initial_filter(args: &super::Args) -> ActiveFilter {
    ActiveFilter {
        agency_id: args.agency_id,
        category_id: args.category_id,
        q: args
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
    }
}
