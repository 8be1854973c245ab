use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TEST_LOGGING: OnceLock<()> = OnceLock::new();

fn env_filter(base_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .unwrap_or_else(|e| panic!("Invalid log filter: {}", e))
}

/// Installs a console subscriber. `RUST_LOG` overrides `base_level`.
///
/// # Panics
///
/// Panics if the filter is invalid or a global subscriber is already set.
pub fn setup_logging(base_level: &str) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(base_level))
        .with(console_layer)
        .try_init()
        .unwrap_or_else(|e| panic!("Logger initialization failed: {}", e));
}

/// Routes log output through the libtest capture. Safe to call from every test.
pub fn setup_test_logging() {
    TEST_LOGGING.get_or_init(|| {
        let test_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_test_writer();

        // Another harness may have installed a global subscriber already.
        let _ = tracing_subscriber::registry()
            .with(env_filter("debug"))
            .with(test_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_is_idempotent() {
        setup_test_logging();
        setup_test_logging();
        tracing::debug!("test logging initialized");
    }
}
