pub mod builders;

use std::sync::Once;

use taskorder::logging::LOG_ENV;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a per-test capturing subscriber, once per test binary.
///
/// Reads the same `TASKORDER_LOG` directives as the binary, defaulting to
/// `warn` so passing tests stay quiet. Output only shows for failing tests
/// unless run with `-- --nocapture`, e.g.
/// `TASKORDER_LOG=taskorder::dag=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
