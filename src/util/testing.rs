use std::env;
use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the global tracing subscriber for tests, once per process.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        info!("Test setup complete");
    });
}
