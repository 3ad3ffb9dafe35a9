mod cli;
mod clock;
mod config;
mod draft;
mod model;
mod requirements;
mod sequencer;
mod storage;
mod tour;
mod transition;
mod tui;

use std::process;

use tracing_subscriber::EnvFilter;

use config::Config;
use storage::Storage;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // The guard must outlive the app so buffered log lines flush on exit.
    let _log_guard = init_logging(&config);

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to `~/.waypoint/waypoint.log`, never to the terminal — the
/// screen belongs to the TUI. `WAYPOINT_LOG` overrides the configured
/// filter.
fn init_logging(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = dirs::home_dir().map(|h| h.join(".waypoint"))?;
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let filter = std::env::var("WAYPOINT_LOG")
        .ok()
        .or_else(|| config.log_filter.clone())
        .unwrap_or_else(|| "info".to_string());

    let appender = tracing_appender::rolling::never(&dir, "waypoint.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Some(guard)
}
