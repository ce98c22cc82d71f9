use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{Layer, Registry};

const LOG_FILE_NAME: &str = "ferrowm.log";

/// A plain text layer appending to `$XDG_CACHE_HOME/ferrowm/ferrowm.log`.
pub fn layer() -> Option<(Box<dyn Layer<Registry> + Send + Sync>, WorkerGuard)> {
    let dirs = xdg::BaseDirectories::with_prefix("ferrowm").ok()?;
    let log_dir = match dirs.create_cache_directory("") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Couldn't create log directory: {err}");
            return None;
        }
    };

    let writer = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking)
        .boxed();
    Some((layer, guard))
}
