use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[cfg(feature = "file-log")]
pub mod file;

/// Keeps the background log writers running. Hold it until the window manager exits.
#[must_use]
pub struct LogGuard {
    #[cfg(feature = "file-log")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Builds the filter from `RUST_LOG`, or from `level` when the variable is unset.
///
/// A directive that does not parse leaves the filter at `info` and is handed back.
#[must_use]
pub fn parse_log_level(level: &str) -> (EnvFilter, Option<ParseError>) {
    let directives =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| level.to_owned());
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(&directives)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    (filter, parse_err)
}

/// Installs the global subscriber: stderr always, a log file with the `file-log` feature.
pub fn setup_logging(level: &str) -> LogGuard {
    let (filter, parse_err) = parse_log_level(level);
    let subscriber = tracing_subscriber::registry();

    #[cfg(feature = "file-log")]
    let (subscriber, file_guard) = {
        let (layer, guard) = file::layer().unzip();
        (subscriber.with(layer), guard)
    };

    let subscriber = subscriber
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if let Err(err) = subscriber.try_init() {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level {:?}, using info: {}", level, err);
    }

    LogGuard {
        #[cfg(feature = "file-log")]
        _file: file_guard,
    }
}
