use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Env vars consulted for a filter directive, in order.
const FILTER_ENV_VARS: [&str; 2] = ["STRESSI_LOG", "RUST_LOG"];

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn build_filter(directive: Option<String>, verbose: bool) -> EnvFilter {
    directive.map_or_else(
        || EnvFilter::new(default_filter(verbose)),
        |value| {
            EnvFilter::try_new(value).unwrap_or_else(|_err| EnvFilter::new(default_filter(verbose)))
        },
    )
}

/// Installs the global subscriber. Logs go to stderr so the report on stdout
/// stays parseable. Calling it twice keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let directive = FILTER_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let filter = build_filter(directive, verbose);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
