use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BINWRAP_LOG=debug`.
pub const LOG_ENV: &str = "BINWRAP_LOG";

/// Install the stderr subscriber. Defaults to `warn` so the wrapper stays
/// silent unless something is off.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (tests, embedding) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
