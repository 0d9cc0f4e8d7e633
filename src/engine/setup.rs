// Process-wide initialization
//
// Everything global (currently only the logger) is set up here, once, before
// the window or any character exists. Nothing at runtime reaches back into
// global state afterwards.

use std::sync::Once;

use log::info;

static INIT: Once = Once::new();

/// Initialize process-wide services. Safe to call more than once; only the
/// first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        // Info by default, RUST_LOG overrides
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_err() {
            // Another logger was installed first (e.g. by a test harness)
            return;
        }

        info!(
            "{} {} starting",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.is_completed());
    }
}
