//! akhbar binary entrypoint kept minimal. The full runtime lives in `akhbar::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use akhbar::app::{RunOptions, run};
use akhbar::sources::{ApiClient, forget_api_base, resolve_api_base};
use akhbar::theme;

struct AkhbarTimer;

impl tracing_subscriber::fmt::time::FormatTime for AkhbarTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let s = akhbar::util::ts_to_date(chrono::Utc::now().timestamp()); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/akhbar.log`, falling back to stderr.
///
/// Details:
/// - `RUST_LOG` overrides `level` when set.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = theme::logs_dir().join("akhbar.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(AkhbarTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(AkhbarTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = theme::settings();
    let store = theme::api_base_store_path();
    if args.reset_api_base {
        match forget_api_base(&store) {
            Ok(true) => println!("remembered API base removed"),
            Ok(false) => println!("no remembered API base"),
            Err(e) => {
                eprintln!("could not remove {}: {e}", store.display());
                std::process::exit(1);
            }
        }
    }
    let (api_base, source) = resolve_api_base(
        args.api_base.as_deref(),
        settings.api_base_url.as_deref(),
        &store,
    );
    tracing::info!(base = %api_base, ?source, "akhbar starting");

    let filter = args::initial_filter(&args);
    let client = match ApiClient::new(&api_base) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            tracing::error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };
    if let Some(code) = args::process_args(&args, &client, &settings, &filter).await {
        std::process::exit(code);
    }

    let opts = RunOptions {
        api_base,
        settings,
        initial_filter: filter,
    };
    if let Err(err) = run(opts).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("{err}");
    }
    tracing::info!("akhbar exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    #[test]
    fn akhbar_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::AkhbarTimer.format_time(&mut writer);
        assert!(buf.contains("-T"));
    }
}
