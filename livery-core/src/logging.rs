//! Tracing setup for hosts embedding the paintjob manager

use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_tracing`]
///
/// `RUST_LOG` wins when set; otherwise `default_directive` applies
/// (e.g. `"livery_core=info"`).
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a stderr fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(default_directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_directive))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
