use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "carecompare=info,warn",
        2 => "carecompare=debug,info",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr so machine-readable
/// output on stdout stays clean. `-v` flags take precedence over `RUST_LOG`.
pub fn init_tracing(verbosity: u8) {
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(0)))
    } else {
        EnvFilter::new(default_directive(verbosity))
    };

    // A subscriber may already be set (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
