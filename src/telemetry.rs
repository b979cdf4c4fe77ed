//! Telemetry helpers for hosts embedding `donut-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host unless it opts into the `telemetry` feature and calls
//! `init_default_tracing`.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "donut_rs=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
/// Events go to stderr so stdout stays free for rendered output.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
