//! Log setup for the `chart-adapter` binary.
//!
//! Conversions emit `tracing` events (a `debug` per chart, a `trace` per
//! skipped cell). Library users install their own subscriber; the CLI uses
//! [`init_default_tracing`].

/// Installs a compact subscriber filtered by `RUST_LOG` (default `info`).
///
/// Events go to stderr: the CLI prints the options document on stdout and
/// callers pipe it straight into a renderer, so log lines must never mix in.
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
