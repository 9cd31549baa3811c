use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

// Initialize the tracing subscriber once per container lifecycle.
// Log level comes from RUST_LOG and defaults to info.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            // CloudWatch adds the ingestion time.
            .without_time()
            .init();
    });
}
