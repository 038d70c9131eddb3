use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

/// Installs a global `tracing` subscriber for tests, once per process.
///
/// Honors `RUST_LOG`; falls back to `debug`. Output goes through the test
/// writer so it is captured per test.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
        init_test_setup();
    }
}
