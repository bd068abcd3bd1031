use clap::ValueEnum;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,hyper=warn,reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Standard,
    Json,
}

/// Installs the global tracing subscriber. `log` records from the library are
/// bridged into it, so `RUST_LOG` filters both.
pub fn setup_logging(format: LoggingFormat) {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
