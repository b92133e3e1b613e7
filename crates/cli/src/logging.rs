use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args;

/// Installs a stderr subscriber filtered by `directives`.
///
/// Invalid directives fall back to the default level with a warning.
pub(crate) fn init(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {}. Falling back to '{}'",
            directives,
            e,
            args::DEFAULT_LOG_LEVEL
        );
        EnvFilter::new(args::DEFAULT_LOG_LEVEL)
    });

    // Ignore repeated initialization
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}
