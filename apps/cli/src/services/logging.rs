use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "warn";

/// Filter directive for a `-v` count, falling back to the configured level.
pub fn level_for(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Parses the directive for `verbosity`/`configured`. An unparsable
/// directive yields the `warn` filter plus the reason it was rejected.
pub fn filter_for(verbosity: u8, configured: &str) -> (EnvFilter, Option<String>) {
    let directive = level_for(verbosity, configured);
    match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new(FALLBACK_LEVEL),
            Some(format!("'{directive}': {err}")),
        ),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over everything else.
/// Output goes to stderr so it never mixes with tables or JSON on stdout.
pub fn init(verbosity: u8, configured: &str) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => filter_for(verbosity, configured),
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Some(reason) = rejected {
        tracing::warn!(%reason, "invalid [logging] level, falling back to warn");
    }
}
