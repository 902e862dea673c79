//! Subscriber setup for the tooltip pipeline's diagnostics.
//!
//! Events emitted under `chart_tooltip::*` targets:
//! - `WARN` "cannot find tooltip field in data" (`field`): a configured
//!   field path did not resolve. Silenced for composition lookups
//!   (`is_composition`), where partial misses are expected.
//! - `WARN` "falling back to auto format" (`error`): a number or time
//!   specifier was rejected and the value was auto-formatted instead.
//! - `DEBUG` row counts per `get_tooltip_data` call, the sort mode applied,
//!   and unrecognized sort keywords in a config.
//! - `TRACE` skipped group marks, combined bin ranges and dropped
//!   line/area date fields.

/// Installs a compact `fmt` subscriber for the events above.
///
/// Only active with the `telemetry` feature. The filter comes from
/// `RUST_LOG` and defaults to `warn`, so missing fields and format
/// fallbacks show up while per-call row counts stay hidden; use
/// `RUST_LOG=chart_tooltip=debug` to see those.
///
/// Returns `false` when the feature is off or the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
