use srms_config::LogConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// - **Console**: compact, to stderr so command output on stdout stays clean.
///   Filtered by `RUST_LOG`, else by `LOG_LEVEL` for the client's crates.
/// - **JSON file**: daily rolling `srms.*.json` under `SRMS_LOG_DIR`, at
///   `info`, when a log directory is configured.
pub fn init_tracing(config: &LogConfig) {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{crate_name}={level},srms_auth={level},reqwest=warn,hyper=warn",
            crate_name = env!("CARGO_CRATE_NAME"),
            level = config.level
        ))
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter);

    let json_layer = config.dir.as_ref().and_then(|dir| {
        match RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("srms")
            .filename_suffix("json")
            .build(dir)
        {
            Ok(appender) => Some(
                fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            ),
            Err(e) => {
                eprintln!(
                    "⚠️  Failed to open log directory {}: {}. Continuing with console logging only...",
                    dir.display(),
                    e
                );
                None
            }
        }
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
    {
        eprintln!("⚠️  Tracing already initialized: {}", e);
    }
}
