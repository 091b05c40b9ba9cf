use tracing_subscriber::EnvFilter;

/// Initialise logging. Debug builds of the app usually run with
/// `debug_logging` enabled in the settings file; everything else stays at
/// `info`. `RUST_LOG` can override the filter, but only when debug logging
/// is on, so a stray environment variable cannot make a normal run verbose.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
